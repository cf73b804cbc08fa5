#![doc = r#"
logocut — turn a logo on a near-black background into a cropped, transparent PNG.

Every pixel whose red, green and blue channels are all below [`THRESHOLD`] (15)
becomes transparent black `(0, 0, 0, 0)`; every other pixel is kept exactly. The
result is then cropped to the smallest rectangle holding any pixel that is not
`(0, 0, 0, 0)`. A fully transparent result is left at its original size.

The same pipeline powers the `logocut` binary and can be embedded directly.

Process a file to a file
------------------------
```rust,no_run
use std::path::Path;

fn main() -> logocut::Result<()> {
    let summary = logocut::process_logo_to_path(
        Path::new("logo.jpg"),
        Path::new("logo.png"),
    )?;
    println!("cleared {} pixels, crop {:?}", summary.cleared, summary.bbox);
    Ok(())
}
```

Process in memory
-----------------
```rust
use image::{Rgba, RgbaImage};

let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
img.put_pixel(1, 2, Rgba([255, 200, 0, 255]));

let out = logocut::process_image(img);
assert_eq!(out.image.dimensions(), (1, 1));
assert_eq!(out.cleared, 15);
```

Error handling
--------------
Failures are `logocut::Error::Decode` (input missing, unreadable or not an image)
or `logocut::Error::Encode` (PNG encoding failed or the output could not be written).

```rust,no_run
use std::path::Path;
use logocut::{process_logo_to_path, Error};

match process_logo_to_path(Path::new("/bad/in.png"), Path::new("/out.png")) {
    Ok(_) => {}
    Err(Error::Decode { path, source }) => eprintln!("cannot read {}: {source}", path.display()),
    Err(Error::Encode { path, source }) => eprintln!("cannot write {}: {source}", path.display()),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — threshold, crop and the in-memory pipeline.
- [`io`] — RGBA reader and PNG writer.
- [`types`] — `BoundingBox`, `SourceLayout`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::processing::threshold::THRESHOLD;
pub use error::{Error, Result};
pub use types::{BoundingBox, SourceLayout};

pub use api::{ProcessSummary, ProcessedLogo, process_image, process_logo_to_path};
