//! Lab luminance handling for color images. Only the L channel is equalized;
//! the a/b chrominance planes are carried through untouched so hue and
//! saturation survive the round trip within transform rounding error.
use ndarray::Array2;
use palette::{FromColor, IntoColor, Lab, LinSrgb, Srgb};

/// Luminance plane scaled onto the 8-bit domain plus untouched chrominance.
/// L in Lab spans [0, 100]; it is stored here as `round(l * 255 / 100)` so
/// the equalizer can treat it as an ordinary 8-bit plane.
pub struct LabPlanes {
    pub l: Array2<u8>,
    pub a: Array2<f32>,
    pub b: Array2<f32>,
}

/// Split an RGB image into Lab planes, isolating luminance for equalization.
pub fn split_luminance(r: &Array2<u8>, g: &Array2<u8>, b: &Array2<u8>) -> LabPlanes {
    let dim = r.dim();
    let mut l_plane = Array2::zeros(dim);
    let mut a_plane = Array2::zeros(dim);
    let mut b_plane = Array2::zeros(dim);

    for ((row, col), &red) in r.indexed_iter() {
        let srgb = Srgb::new(
            red as f32 / 255.0,
            g[(row, col)] as f32 / 255.0,
            b[(row, col)] as f32 / 255.0,
        );
        let lab: Lab = Lab::from_color(srgb.into_linear());
        l_plane[(row, col)] = (lab.l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8;
        a_plane[(row, col)] = lab.a;
        b_plane[(row, col)] = lab.b;
    }

    LabPlanes {
        l: l_plane,
        a: a_plane,
        b: b_plane,
    }
}

/// Reassemble an RGB image from an (equalized) luminance plane and the
/// original chrominance planes. Output is 8-bit with the input dimensions.
pub fn merge_luminance(planes: &LabPlanes) -> (Array2<u8>, Array2<u8>, Array2<u8>) {
    let dim = planes.l.dim();
    let mut r = Array2::zeros(dim);
    let mut g = Array2::zeros(dim);
    let mut b = Array2::zeros(dim);

    for ((row, col), &l8) in planes.l.indexed_iter() {
        let lab: Lab = Lab::new(
            l8 as f32 * 100.0 / 255.0,
            planes.a[(row, col)],
            planes.b[(row, col)],
        );
        let lin: LinSrgb<f32> = lab.into_color();
        let srgb: Srgb<f32> = Srgb::from_linear(lin);
        r[(row, col)] = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        g[(row, col)] = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        b[(row, col)] = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    (r, g, b)
}
