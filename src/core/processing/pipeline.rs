//! Per-image processing pipeline: sample depth normalization, luminance
//! routing for color images, and the CLAHE core. Each image moves through
//! the stages by ownership transfer; nothing is shared across images.
use ndarray::Array2;
use tracing::debug;

use crate::core::params::ClaheParams;
use crate::core::processing::{color, equalize, normalize};
use crate::types::ImageKind;

/// A decoded image in planar form, classified by depth and channel count.
#[derive(Debug, Clone)]
pub enum PlanarImage {
    Gray8(Array2<u8>),
    Gray16(Array2<u16>),
    Rgb8 {
        r: Array2<u8>,
        g: Array2<u8>,
        b: Array2<u8>,
    },
    Rgb16 {
        r: Array2<u16>,
        g: Array2<u16>,
        b: Array2<u16>,
    },
}

impl PlanarImage {
    pub fn kind(&self) -> ImageKind {
        match self {
            PlanarImage::Gray8(_) => ImageKind::Gray8,
            PlanarImage::Gray16(_) => ImageKind::Gray16,
            PlanarImage::Rgb8 { .. } => ImageKind::Rgb8,
            PlanarImage::Rgb16 { .. } => ImageKind::Rgb16,
        }
    }

    /// (height, width) in pixels.
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            PlanarImage::Gray8(plane) => plane.dim(),
            PlanarImage::Gray16(plane) => plane.dim(),
            PlanarImage::Rgb8 { r, .. } => r.dim(),
            PlanarImage::Rgb16 { r, .. } => r.dim(),
        }
    }
}

/// Equalized result: always 8-bit, channel count and dimensions preserved.
#[derive(Debug, Clone)]
pub enum OutputImage {
    Gray(Array2<u8>),
    Rgb {
        r: Array2<u8>,
        g: Array2<u8>,
        b: Array2<u8>,
    },
}

impl OutputImage {
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            OutputImage::Gray(plane) => plane.dim(),
            OutputImage::Rgb { r, .. } => r.dim(),
        }
    }
}

/// Drive one image through normalize -> extract -> equalize -> recombine.
pub fn process_image(image: PlanarImage, params: &ClaheParams) -> OutputImage {
    match image {
        PlanarImage::Gray8(plane) => OutputImage::Gray(equalize::equalize_plane(
            &plane,
            params.clip_limit,
            params.window_size,
        )),
        PlanarImage::Gray16(plane) => {
            let max = normalize::max_sample(&[&plane]);
            debug!("normalizing 16 bit gray image, max sample {max}");
            let plane = normalize::normalize_plane(&plane, max);
            OutputImage::Gray(equalize::equalize_plane(
                &plane,
                params.clip_limit,
                params.window_size,
            ))
        }
        PlanarImage::Rgb8 { r, g, b } => equalize_rgb(&r, &g, &b, params),
        PlanarImage::Rgb16 { r, g, b } => {
            let max = normalize::max_sample(&[&r, &g, &b]);
            debug!("normalizing 16 bit RGB image, max sample {max}");
            let r = normalize::normalize_plane(&r, max);
            let g = normalize::normalize_plane(&g, max);
            let b = normalize::normalize_plane(&b, max);
            equalize_rgb(&r, &g, &b, params)
        }
    }
}

/// Equalize the Lab luminance channel only; chrominance passes through.
fn equalize_rgb(r: &Array2<u8>, g: &Array2<u8>, b: &Array2<u8>, params: &ClaheParams) -> OutputImage {
    let mut planes = color::split_luminance(r, g, b);
    planes.l = equalize::equalize_plane(&planes.l, params.clip_limit, params.window_size);
    let (r, g, b) = color::merge_luminance(&planes);
    OutputImage::Rgb { r, g, b }
}
