//! Encoding processed planes back to files. The container format follows the
//! destination extension, as the `image` crate resolves it.
use std::path::Path;

use ndarray::Array2;

use crate::core::processing::pipeline::OutputImage;
use crate::error::{Error, Result};

/// Encode an equalized image to `path`. Output is always 8-bit per channel.
pub fn encode_image(image: &OutputImage, path: &Path) -> Result<()> {
    match image {
        OutputImage::Gray(plane) => {
            let (h, w) = plane.dim();
            let buf =
                image::GrayImage::from_raw(w as u32, h as u32, plane.iter().copied().collect())
                    .ok_or_else(|| Error::Processing("gray plane does not match its shape".into()))?;
            buf.save(path).map_err(|source| Error::Encode {
                path: path.to_path_buf(),
                source,
            })
        }
        OutputImage::Rgb { r, g, b } => {
            let (h, w) = r.dim();
            let buf = image::RgbImage::from_raw(w as u32, h as u32, interleave(r, g, b))
                .ok_or_else(|| Error::Processing("rgb planes do not match their shape".into()))?;
            buf.save(path).map_err(|source| Error::Encode {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn interleave(r: &Array2<u8>, g: &Array2<u8>, b: &Array2<u8>) -> Vec<u8> {
    let mut packed = Vec::with_capacity(r.len() * 3);
    for ((red, green), blue) in r.iter().zip(g.iter()).zip(b.iter()) {
        packed.push(*red);
        packed.push(*green);
        packed.push(*blue);
    }
    packed
}
