use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Encode `img` as 8-bit RGBA PNG in memory.
pub fn encode_rgba_png(img: &RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(Cursor::new(&mut bytes));
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode then write to `output`, creating or truncating the file.
/// Nothing touches the disk unless encoding succeeded.
pub fn write_rgba_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let bytes = encode_rgba_png(img).map_err(|e| Error::encode(output, e))?;
    fs::write(output, &bytes).map_err(|e| Error::encode(output, e))?;
    debug!("Wrote {} bytes to {:?}", bytes.len(), output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn alpha_survives_exactly() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([255, 128, 3, 1]));
        img.put_pixel(2, 1, Rgba([9, 9, 9, 254]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_rgba_png(&path, &img).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.color(), image::ColorType::Rgba8);
        assert_eq!(back.into_rgba8(), img);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"stale").unwrap();

        let img = RgbaImage::from_pixel(1, 1, Rgba([20, 30, 40, 50]));
        write_rgba_png(&path, &img).unwrap();
        assert_eq!(image::open(&path).unwrap().into_rgba8(), img);
    }

    #[test]
    fn missing_directory_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.png");
        let img = RgbaImage::from_pixel(1, 1, Rgba([20, 30, 40, 50]));

        let err = write_rgba_png(&path, &img).unwrap_err();
        assert!(matches!(err, Error::Encode { .. }));
        assert!(!path.exists());
    }
}
