use image::RgbaImage;
use tracing::info;

use crate::core::processing::crop::crop_to_content;
use crate::core::processing::threshold::clear_dark_pixels;
use crate::types::BoundingBox;

/// Output of the in-memory transform.
#[derive(Debug, Clone)]
pub struct ProcessedLogo {
    pub image: RgbaImage,
    /// Pixels rewritten to transparent black by the threshold pass
    pub cleared: u64,
    /// Crop applied, `None` when the image held no content
    pub bbox: Option<BoundingBox>,
}

/// Threshold then crop. Pure over the buffer; no I/O.
pub fn process_rgba(mut img: RgbaImage) -> ProcessedLogo {
    let (width, height) = img.dimensions();
    let cleared = clear_dark_pixels(&mut img);
    let (image, bbox) = crop_to_content(img);

    match bbox {
        Some(b) => info!(
            "Processed {}x{}: cleared {} pixels, cropped to {} ({}x{})",
            width,
            height,
            cleared,
            b,
            b.width(),
            b.height()
        ),
        None => info!(
            "Processed {}x{}: cleared {} pixels, image fully transparent, no crop",
            width, height, cleared
        ),
    }

    ProcessedLogo {
        image,
        cleared,
        bbox,
    }
}
