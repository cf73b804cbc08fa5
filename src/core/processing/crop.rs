use image::RgbaImage;
use image::imageops;
use tracing::debug;

use crate::types::BoundingBox;

/// A pixel is content unless all four channels are zero.
#[inline]
fn is_content(pixel: &[u8]) -> bool {
    pixel.iter().any(|&c| c != 0)
}

/// Minimal half-open box around every content pixel, or `None` when the image
/// holds no content at all.
pub fn content_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let row_len = width as usize * 4;
    let mut bbox: Option<BoundingBox> = None;

    for (y, row) in img.as_raw().chunks_exact(row_len).enumerate() {
        let y = y as u32;
        // First and last content column in this row
        let Some(first) = row.chunks_exact(4).position(is_content) else {
            continue;
        };
        let last = row
            .chunks_exact(4)
            .rposition(is_content)
            .unwrap_or(first);
        let (first, last) = (first as u32, last as u32);

        bbox = Some(match bbox {
            None => BoundingBox {
                left: first,
                top: y,
                right: last + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(first),
                top: b.top,
                right: b.right.max(last + 1),
                bottom: y + 1,
            },
        });
    }

    bbox
}

/// Crop `img` to its content bounds. Without content the buffer is returned as is.
pub fn crop_to_content(img: RgbaImage) -> (RgbaImage, Option<BoundingBox>) {
    let (width, height) = img.dimensions();
    let Some(bbox) = content_bounds(&img) else {
        debug!("No content pixels found, keeping {}x{} uncropped", width, height);
        return (img, None);
    };

    if bbox.covers(width, height) {
        debug!("Content spans the whole {}x{} image", width, height);
        return (img, Some(bbox));
    }

    debug!(
        "Cropping {}x{} to {} -> {}x{}",
        width,
        height,
        bbox,
        bbox.width(),
        bbox.height()
    );
    let cropped = imageops::crop_imm(&img, bbox.left, bbox.top, bbox.width(), bbox.height())
        .to_image();
    (cropped, Some(bbox))
}
