//! Shared types used across the crate: sample depths, the tile grid
//! dimensions driving the equalizer, and the detected image layout reported
//! in per-image diagnostics.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum BitDepth {
    U8,
    U16,
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitDepth::U8 => write!(f, "8 bit"),
            BitDepth::U16 => write!(f, "16 bit"),
        }
    }
}

/// Tile grid dimensions: how many tiles subdivide the image along each axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WindowSize {
    pub rows: usize,
    pub cols: usize,
}

impl WindowSize {
    /// Square grid, as the CLI exposes it.
    pub fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }
}

impl std::fmt::Display for WindowSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Depth/channel classification of a decoded image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ImageKind {
    Gray8,
    Gray16,
    Rgb8,
    Rgb16,
}

impl ImageKind {
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            ImageKind::Gray8 | ImageKind::Rgb8 => BitDepth::U8,
            ImageKind::Gray16 | ImageKind::Rgb16 => BitDepth::U16,
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            ImageKind::Gray8 | ImageKind::Gray16 => 1,
            ImageKind::Rgb8 | ImageKind::Rgb16 => 3,
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageKind::Gray8 => write!(f, "gray scale 8 bit image"),
            ImageKind::Gray16 => write!(f, "gray scale 16 bit image"),
            ImageKind::Rgb8 => write!(f, "RGB 8 bit image"),
            ImageKind::Rgb16 => write!(f, "RGB 16 bit image"),
        }
    }
}
