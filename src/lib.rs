#![doc = r#"
CLAHE — batch contrast-limited adaptive histogram equalization.

This crate provides a typed, ergonomic API for enhancing local contrast in
8-bit and 16-bit grayscale and RGB images using CLAHE: tiled histograms with
a contrast-limiting clip, per-tile mapping functions, and bilinear blending
of the mappings across tile boundaries so tile seams never show. It powers
the `clahe` CLI and can be embedded in your own Rust applications.

Color images are equalized on the CIE Lab luminance channel only; the
chrominance channels pass through untouched, so hue and saturation are
preserved. 16-bit inputs are rescaled into the 8-bit domain relative to
their own maximum sample before equalization. Output is always 8-bit with
the input's dimensions and channel count.

Quick start: process a directory
--------------------------------
```rust,no_run
use std::path::Path;
use clahe::{process_directory_to_path, ClaheParams, WindowSize};

fn main() -> clahe::Result<()> {
    let params = ClaheParams {
        clip_limit: 2.0,
        window_size: WindowSize::square(8),
        workers: 4,
    };

    let report = process_directory_to_path(Path::new("input"), Path::new("output"), &params)?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Each image is dispatched to a bounded worker pool and processed to completion
independently; undecodable files and unsupported sample depths are logged,
counted, and skipped without disturbing sibling images.

Single files and raw planes
---------------------------
```rust,no_run
use std::path::Path;
use clahe::{process_file_to_path, ClaheParams};

fn main() -> clahe::Result<()> {
    process_file_to_path(Path::new("in.png"), Path::new("out.png"), &ClaheParams::default())
}
```

When you already hold a single-channel 8-bit plane, call the equalizer core
directly:

```rust
use ndarray::Array2;
use clahe::{equalize_plane, WindowSize};

let plane = Array2::<u8>::zeros((128, 128));
let out = equalize_plane(&plane, 2.0, WindowSize::square(8));
assert_eq!(out.dim(), (128, 128));
```

Error handling
--------------
All public functions return `clahe::Result<T>`; match on `clahe::Error` to
handle specific cases. Only `Error::InvalidInputDirectory` (and I/O failures
during setup) abort a batch; everything else stays per-image.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — shared types (`WindowSize`, `BitDepth`, `ImageKind`).
- [`io`] — image decoding/encoding behind the planar model.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::ClaheParams;
pub use crate::core::processing::equalize::equalize_plane;
pub use crate::core::processing::pipeline::{OutputImage, PlanarImage, process_image};
pub use crate::error::{Error, Result};
pub use crate::types::{BitDepth, ImageKind, WindowSize};

// High-level API re-exports
pub use crate::api::{
    BatchReport, list_input_files, process_directory_to_path, process_file_to_path,
};
