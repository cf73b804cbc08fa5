use std::path::Path;

use image::{DynamicImage, ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::SourceLayout;

/// A decoded input, already normalized to RGBA8.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: RgbaImage,
    pub layout: SourceLayout,
}

/// Open and decode `path`, normalizing the result to RGBA8.
///
/// The format is sniffed from the file content, with the extension as fallback.
/// The file handle lives only as long as the reader and is closed once decoding
/// returns, whether it succeeded or not.
pub fn load_rgba(path: &Path) -> Result<LoadedImage> {
    let decoded = {
        let reader = ImageReader::open(path)
            .map_err(|e| Error::decode(path, e))?
            .with_guessed_format()
            .map_err(|e| Error::decode(path, e))?;
        debug!("Detected format for {:?}: {:?}", path, reader.format());
        reader.decode().map_err(|e| Error::decode(path, e))?
    };

    let layout = SourceLayout::from(decoded.color());
    info!(
        "Decoded {:?}: {}x{} {} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        layout,
        decoded.color()
    );

    Ok(LoadedImage {
        image: normalize_to_rgba(decoded, layout),
        layout,
    })
}

/// Single conversion point from any decoded layout to RGBA8.
/// Sources without alpha gain a fully opaque channel; wider samples are narrowed.
pub fn normalize_to_rgba(img: DynamicImage, layout: SourceLayout) -> RgbaImage {
    match (layout, img) {
        (SourceLayout::Rgba, DynamicImage::ImageRgba8(rgba)) => rgba,
        (layout, other) => {
            debug!(
                "Normalizing {} source ({:?} channels, {:?}) to Rgba8",
                layout,
                layout.channels(),
                other.color()
            );
            if !layout.has_alpha() {
                debug!("Source has no alpha channel, filling with 255");
            }
            other.into_rgba8()
        }
    }
}
