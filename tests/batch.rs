//! End-to-end batch tests: real files on disk, a bounded worker pool, and
//! per-image error isolation.
use std::path::Path;

use clahe::{ClaheParams, Error, WindowSize, process_directory_to_path};
use image::ImageReader;

fn params(workers: usize) -> ClaheParams {
    ClaheParams {
        clip_limit: 2.0,
        window_size: WindowSize::square(4),
        workers,
    }
}

#[test]
fn corrupt_input_does_not_disturb_siblings() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let gradient = image::GrayImage::from_fn(64, 64, |x, _| image::Luma([(x * 4) as u8]));
    gradient.save(input.path().join("gradient.png")).unwrap();
    std::fs::write(input.path().join("broken.png"), b"not an image").unwrap();

    let report = process_directory_to_path(input.path(), output.path(), &params(2)).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);
    assert!(output.path().join("gradient.png").is_file());
    assert!(!output.path().join("broken.png").exists());
}

#[test]
fn missing_input_directory_is_fatal() {
    let output = tempfile::tempdir().unwrap();
    let err = process_directory_to_path(
        Path::new("/definitely/not/here"),
        output.path(),
        &params(1),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidInputDirectory { .. }));
}

#[test]
fn sixteen_bit_input_comes_out_as_8_bit() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let deep = image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_fn(32, 32, |x, y| {
        image::Luma([((x + y) * 900) as u16])
    });
    deep.save(input.path().join("deep.png")).unwrap();

    let report = process_directory_to_path(input.path(), output.path(), &params(1)).unwrap();
    assert_eq!(report.processed, 1);

    let written = ImageReader::open(output.path().join("deep.png"))
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(written.color(), image::ColorType::L8);
    assert_eq!(written.width(), 32);
    assert_eq!(written.height(), 32);
}

#[test]
fn rgb_output_keeps_three_channels_and_dimensions() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let colorful = image::RgbImage::from_fn(48, 40, |x, y| {
        image::Rgb([(x * 5) as u8, (y * 6) as u8, 90])
    });
    colorful.save(input.path().join("colorful.png")).unwrap();

    let report = process_directory_to_path(input.path(), output.path(), &params(3)).unwrap();
    assert_eq!(report.processed, 1);

    let written = ImageReader::open(output.path().join("colorful.png"))
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(written.color(), image::ColorType::Rgb8);
    assert_eq!(written.width(), 48);
    assert_eq!(written.height(), 40);
}

#[test]
fn workers_beyond_file_count_still_drain_the_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    for i in 0..3u32 {
        let img = image::GrayImage::from_fn(16, 16, |x, y| image::Luma([(x * y + i) as u8]));
        img.save(input.path().join(format!("img{i}.png"))).unwrap();
    }

    let report = process_directory_to_path(input.path(), output.path(), &params(8)).unwrap();
    assert_eq!(report.processed, 3);
    for i in 0..3u32 {
        assert!(output.path().join(format!("img{i}.png")).is_file());
    }
}
