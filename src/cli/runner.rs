use tracing::info;

use logocut::io::reader::load_rgba;
use logocut::io::writers::png::write_rgba_png;
use logocut::process_image;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    println!("Opening {}", args.input.display());
    let loaded = load_rgba(&args.input)?;
    info!("Source layout: {}", loaded.layout);

    let processed = process_image(loaded.image);
    match processed.bbox {
        Some(bbox) => info!(
            "Cleared {} pixels, crop box {} ({}x{})",
            processed.cleared,
            bbox,
            bbox.width(),
            bbox.height()
        ),
        None => info!(
            "Cleared {} pixels, no content left, keeping full size",
            processed.cleared
        ),
    }

    println!("Saving to {}", args.output.display());
    write_rgba_png(&args.output, &processed.image)?;

    info!(
        "Successfully processed: {:?} -> {:?}",
        args.input, args.output
    );
    println!("Done");
    Ok(())
}
