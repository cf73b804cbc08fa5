use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logocut",
    version,
    about = "Make a logo's near-black background transparent and crop to the logo"
)]
pub struct CliArgs {
    /// Input image (any format the image codecs can decode)
    pub input: PathBuf,

    /// Output PNG path (created or overwritten)
    pub output: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positionals_are_required() {
        assert!(CliArgs::try_parse_from(["logocut", "in.jpg"]).is_err());
        assert!(CliArgs::try_parse_from(["logocut", "a", "b", "c"]).is_err());

        let args = CliArgs::try_parse_from(["logocut", "in.jpg", "out.png", "--log"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.jpg"));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert!(args.log);
    }
}
