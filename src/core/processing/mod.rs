//! Processing primitives: the tiled equalizer core, 16-bit depth
//! normalization, Lab luminance split/merge, and the per-image pipeline.
pub mod color;
pub mod equalize;
pub mod normalize;
pub mod pipeline;
