//! 16-bit to 8-bit sample depth normalization. Scaling is purely relative to
//! the image's own maximum sample; nothing is cached across images.
use ndarray::Array2;

/// Maximum sample across a set of planes. RGB images scan all three channels
/// jointly so the channels keep their relative balance after scaling.
pub fn max_sample(planes: &[&Array2<u16>]) -> u16 {
    planes
        .iter()
        .flat_map(|plane| plane.iter())
        .copied()
        .max()
        .unwrap_or(0)
}

/// Rescale one 16-bit plane into the 8-bit domain: `s -> round(255 * s / max)`.
/// `max` must be the joint maximum over every plane of the image. A fully
/// black image (`max == 0`) maps to all zeros; an empty plane is a no-op.
pub fn normalize_plane(plane: &Array2<u16>, max: u16) -> Array2<u8> {
    if max == 0 {
        return Array2::zeros(plane.dim());
    }
    let scale = 255.0 / max as f64;
    plane.mapv(|s| (s as f64 * scale).round().clamp(0.0, 255.0) as u8)
}
