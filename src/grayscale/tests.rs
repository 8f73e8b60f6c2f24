//! Tests for the grayscale transform and converter

use std::fs;

use image::{DynamicImage, Rgba, RgbaImage};
use tempfile::TempDir;

use crate::errors::PipelineError;
use crate::grayscale::{average_rgb, grayscale_in_place, to_grayscale, GrayscaleConverter};
use crate::test_utils::write_solid_png;

#[test]
fn test_average_truncates() {
    assert_eq!(average_rgb(90, 150, 210), 150);
    assert_eq!(average_rgb(1, 1, 0), 0);
    assert_eq!(average_rgb(255, 255, 254), 254);
    assert_eq!(average_rgb(255, 255, 255), 255);
    assert_eq!(average_rgb(0, 0, 0), 0);
}

#[test]
fn test_in_place_preserves_alpha() {
    let mut pixels = vec![
        10, 20, 31, 7,
        255, 0, 0, 255,
        3, 3, 3, 0,
    ];
    grayscale_in_place(&mut pixels);
    assert_eq!(pixels, vec![
        20, 20, 20, 7,
        85, 85, 85, 255,
        3, 3, 3, 0,
    ]);
}

#[test]
fn test_in_place_ignores_trailing_partial_pixel() {
    let mut pixels = vec![30, 60, 90, 1, 200, 100];
    grayscale_in_place(&mut pixels);
    assert_eq!(pixels, vec![60, 60, 60, 1, 200, 100]);
}

#[test]
fn test_to_grayscale_keeps_dimensions() {
    let mut source = RgbaImage::new(3, 2);
    for (x, y, px) in source.enumerate_pixels_mut() {
        *px = Rgba([(x * 80) as u8, (y * 120) as u8, 17, (x + y) as u8]);
    }
    let gray = to_grayscale(&DynamicImage::ImageRgba8(source.clone()));

    assert_eq!(gray.dimensions(), (3, 2));
    for (x, y, px) in gray.enumerate_pixels() {
        let orig = source.get_pixel(x, y);
        let avg = ((orig[0] as u32 + orig[1] as u32 + orig[2] as u32) / 3) as u8;
        assert_eq!(*px, Rgba([avg, avg, avg, orig[3]]));
    }
}

#[test]
fn test_to_grayscale_from_rgb_sets_opaque_alpha() {
    let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([90, 150, 210]));
    let gray = to_grayscale(&DynamicImage::ImageRgb8(rgb));
    assert!(gray.pixels().all(|px| *px == Rgba([150, 150, 150, 255])));
}

#[test]
fn test_convert_all_writes_same_names() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("out/nested");
    fs::create_dir_all(&src).unwrap();
    write_solid_png(&src.join("a.png"), 10, 10, [90, 150, 210, 255]);
    write_solid_png(&src.join("B.PNG"), 4, 3, [0, 0, 255, 128]);
    fs::write(src.join("readme.txt"), b"not an image").unwrap();

    let report = GrayscaleConverter::default().convert_all(&src, &dest).unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.failures().is_empty());

    let a = image::open(dest.join("a.png")).unwrap().to_rgba8();
    assert_eq!(a.dimensions(), (10, 10));
    assert!(a.pixels().all(|px| *px == Rgba([150, 150, 150, 255])));

    let b = image::open(dest.join("B.PNG")).unwrap().to_rgba8();
    assert_eq!(b.dimensions(), (4, 3));
    assert!(b.pixels().all(|px| *px == Rgba([85, 85, 85, 128])));

    assert!(!dest.join("readme.txt").exists());
}

#[test]
fn test_convert_all_isolates_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    write_solid_png(&src.join("one.png"), 2, 2, [9, 9, 9, 255]);
    write_solid_png(&src.join("two.png"), 2, 2, [30, 0, 0, 255]);
    fs::write(src.join("broken.png"), b"\x89PNG garbage").unwrap();

    let report = GrayscaleConverter::default().convert_all(&src, &dest).unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(report.converted().len(), 2);
    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].source, src.join("broken.png"));
    assert!(matches!(failures[0].result, Err(PipelineError::DecodeError { .. })));

    assert!(dest.join("one.png").exists());
    assert!(dest.join("two.png").exists());
    assert!(!dest.join("broken.png").exists());
}

#[test]
fn test_convert_all_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    write_solid_png(&src.join("a.png"), 5, 5, [12, 200, 45, 60]);

    let converter = GrayscaleConverter::default();
    converter.convert_all(&src, &dest).unwrap();
    let first = fs::read(dest.join("a.png")).unwrap();
    converter.convert_all(&src, &dest).unwrap();
    let second = fs::read(dest.join("a.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_convert_all_skips_subdirectories() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::create_dir_all(src.join("dir.png")).unwrap();
    write_solid_png(&src.join("sub/b.png"), 2, 2, [1, 2, 3, 4]);

    let report = GrayscaleConverter::default().convert_all(&src, &dest).unwrap();

    assert!(report.is_empty());
    assert!(dest.is_dir());
    assert!(!dest.join("b.png").exists());
}

#[test]
fn test_convert_all_missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = GrayscaleConverter::default()
        .convert_all(&dir.path().join("nope"), &dir.path().join("dest"));
    assert!(matches!(result, Err(PipelineError::IoError(_))));
}

#[test]
fn test_convert_file_reports_encode_error() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("a.png");
    write_solid_png(&src, 2, 2, [1, 2, 3, 4]);

    let result = GrayscaleConverter::default()
        .convert_file(&src, &dir.path().join("a.unknownformat"));

    assert!(matches!(result, Err(PipelineError::EncodeError { .. })));
}

#[test]
fn test_convert_all_writes_jpeg_without_alpha() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    image::RgbImage::from_pixel(4, 4, image::Rgb([90, 150, 210]))
        .save(src.join("a.jpg"))
        .unwrap();

    let report = GrayscaleConverter::new("jpg").convert_all(&src, &dest).unwrap();

    assert_eq!(report.converted(), vec![&dest.join("a.jpg")]);
    assert!(report.failures().is_empty());

    // JPEG is lossy, so only require near-equal channels around the mean
    let gray = image::open(dest.join("a.jpg")).unwrap().to_rgb8();
    assert_eq!(gray.dimensions(), (4, 4));
    for px in gray.pixels() {
        let [r, g, b] = px.0;
        assert!(r.abs_diff(g) <= 3 && g.abs_diff(b) <= 3, "not gray: {:?}", px);
        assert!(r.abs_diff(150) <= 10, "unexpected level: {:?}", px);
    }
}

#[test]
fn test_png_output_keeps_alpha() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("a.png");
    let dest = dir.path().join("b.png");
    write_solid_png(&src, 2, 2, [30, 60, 90, 77]);

    GrayscaleConverter::default().convert_file(&src, &dest).unwrap();

    let gray = image::open(&dest).unwrap();
    assert!(gray.color().has_alpha());
    assert!(gray.to_rgba8().pixels().all(|px| *px == Rgba([60, 60, 60, 77])));
}

#[test]
fn test_custom_extension_is_normalized() {
    assert_eq!(GrayscaleConverter::new(".PNG").extension(), "png");
}
