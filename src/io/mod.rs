//! I/O layer: the `reader` that decodes any supported input into RGBA8 and the
//! `writers` that encode results to disk.
pub mod reader;
pub use reader::{LoadedImage, load_rgba, normalize_to_rgba};

pub mod writers;
