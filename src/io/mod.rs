//! I/O layer: decoding input files into the planar model and encoding
//! equalized results, both backed by the `image` crate.
pub mod reader;
pub mod writer;

pub use reader::decode_image;
pub use writer::encode_image;
