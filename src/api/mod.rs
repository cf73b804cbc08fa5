//! High-level library API: run the whole logo pipeline from one file to another,
//! or on an in-memory buffer. Prefer these entrypoints over the low-level
//! processing modules when embedding logocut.
use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::core::processing::pipeline::process_rgba;
use crate::error::Result;
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::{BoundingBox, SourceLayout};

pub use crate::core::processing::pipeline::ProcessedLogo;

/// What a file-to-file run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub layout: SourceLayout,
    pub input_size: (u32, u32),
    pub output_size: (u32, u32),
    pub cleared: u64,
    pub bbox: Option<BoundingBox>,
}

/// Threshold and crop an RGBA buffer (no disk I/O).
pub fn process_image(img: RgbaImage) -> ProcessedLogo {
    process_rgba(img)
}

/// Load `input`, clear its dark background, crop to content and save as PNG.
///
/// Decoding failures surface before any processing; encoding failures surface
/// after it, with nothing written.
pub fn process_logo_to_path(input: &Path, output: &Path) -> Result<ProcessSummary> {
    let loaded = load_rgba(input)?;
    let input_size = loaded.image.dimensions();

    let processed = process_rgba(loaded.image);
    let output_size = processed.image.dimensions();

    write_rgba_png(output, &processed.image)?;
    info!(
        "Saved {:?}: {}x{} -> {}x{}",
        output, input_size.0, input_size.1, output_size.0, output_size.1
    );

    Ok(ProcessSummary {
        layout: loaded.layout,
        input_size,
        output_size,
        cleared: processed.cleared,
        bbox: processed.bbox,
    })
}
