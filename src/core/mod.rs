//! Core processing building blocks: the CLAHE equalizer, depth normalization,
//! Lab luminance handling, and the per-image pipeline. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
