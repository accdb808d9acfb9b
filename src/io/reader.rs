//! Decoding arbitrary image files into the planar model. Alpha channels are
//! dropped on decode; float-sample images are rejected as unsupported depth.
use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;

use crate::core::processing::pipeline::PlanarImage;
use crate::error::{Error, Result};

/// Decode `path` into planar form, classifying depth and channel count.
pub fn decode_image(path: &Path) -> Result<PlanarImage> {
    let dynamic = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    planar_from_dynamic(dynamic, path)
}

fn planar_from_dynamic(dynamic: DynamicImage, path: &Path) -> Result<PlanarImage> {
    match dynamic {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            Ok(PlanarImage::Gray8(plane_from_raw(buf.into_raw(), h, w)?))
        }
        DynamicImage::ImageLumaA8(_) => {
            let buf = dynamic.to_luma8();
            let (w, h) = buf.dimensions();
            Ok(PlanarImage::Gray8(plane_from_raw(buf.into_raw(), h, w)?))
        }
        DynamicImage::ImageLuma16(buf) => {
            let (w, h) = buf.dimensions();
            Ok(PlanarImage::Gray16(plane_from_raw(buf.into_raw(), h, w)?))
        }
        DynamicImage::ImageLumaA16(_) => {
            let buf = dynamic.to_luma16();
            let (w, h) = buf.dimensions();
            Ok(PlanarImage::Gray16(plane_from_raw(buf.into_raw(), h, w)?))
        }
        DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            let (r, g, b) = rgb_planes(&buf.into_raw(), h, w)?;
            Ok(PlanarImage::Rgb8 { r, g, b })
        }
        DynamicImage::ImageRgba8(_) => {
            let buf = dynamic.to_rgb8();
            let (w, h) = buf.dimensions();
            let (r, g, b) = rgb_planes(&buf.into_raw(), h, w)?;
            Ok(PlanarImage::Rgb8 { r, g, b })
        }
        DynamicImage::ImageRgb16(buf) => {
            let (w, h) = buf.dimensions();
            let (r, g, b) = rgb_planes(&buf.into_raw(), h, w)?;
            Ok(PlanarImage::Rgb16 { r, g, b })
        }
        DynamicImage::ImageRgba16(_) => {
            let buf = dynamic.to_rgb16();
            let (w, h) = buf.dimensions();
            let (r, g, b) = rgb_planes(&buf.into_raw(), h, w)?;
            Ok(PlanarImage::Rgb16 { r, g, b })
        }
        other => Err(Error::UnsupportedSampleDepth {
            path: path.to_path_buf(),
            detail: format!("{:?}", other.color()),
        }),
    }
}

fn plane_from_raw<T>(raw: Vec<T>, height: u32, width: u32) -> Result<Array2<T>> {
    Array2::from_shape_vec((height as usize, width as usize), raw)
        .map_err(|e| Error::Processing(e.to_string()))
}

/// De-interleave packed RGB samples into three planes.
fn rgb_planes<T: Copy>(raw: &[T], height: u32, width: u32) -> Result<(Array2<T>, Array2<T>, Array2<T>)> {
    let pixels = height as usize * width as usize;
    let mut r = Vec::with_capacity(pixels);
    let mut g = Vec::with_capacity(pixels);
    let mut b = Vec::with_capacity(pixels);
    for px in raw.chunks_exact(3) {
        r.push(px[0]);
        g.push(px[1]);
        b.push(px[2]);
    }
    Ok((
        plane_from_raw(r, height, width)?,
        plane_from_raw(g, height, width)?,
        plane_from_raw(b, height, width)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageKind;

    #[test]
    fn rgb_samples_land_in_row_major_planes() {
        // 2x2 image, distinct channel values per pixel.
        let raw: Vec<u8> = vec![
            10, 20, 30, 40, 50, 60, //
            70, 80, 90, 100, 110, 120,
        ];
        let (r, g, b) = rgb_planes(&raw, 2, 2).unwrap();
        assert_eq!(r[(0, 0)], 10);
        assert_eq!(g[(0, 1)], 50);
        assert_eq!(b[(1, 0)], 90);
        assert_eq!(r[(1, 1)], 100);
        assert_eq!(b[(1, 1)], 120);
    }

    #[test]
    fn luma_and_rgba_variants_classify_as_expected() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(3, 2, image::Luma([7])));
        let decoded = planar_from_dynamic(gray, Path::new("x")).unwrap();
        assert_eq!(decoded.kind(), ImageKind::Gray8);
        assert_eq!(decoded.dimensions(), (2, 3));

        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([1, 2, 3, 128]),
        ));
        let decoded = planar_from_dynamic(rgba, Path::new("x")).unwrap();
        assert_eq!(decoded.kind(), ImageKind::Rgb8, "alpha is dropped, not rejected");
    }

    #[test]
    fn float_samples_are_unsupported() {
        let float = DynamicImage::ImageRgb32F(image::Rgb32FImage::from_pixel(
            2,
            2,
            image::Rgb([0.1, 0.2, 0.3]),
        ));
        let err = planar_from_dynamic(float, Path::new("f.exr")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSampleDepth { .. }));
    }
}
