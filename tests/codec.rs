mod common;

use common::synthetic_image::{checkerboard, noise, uniform};
use image_convolution::image::io::{load_image, save_image, write_json_file};
use image_convolution::{convolve, CodecError, FilterKernel, Layout, PaddingPolicy};
use tempfile::TempDir;

#[test]
fn png_round_trip_preserves_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rgb.png");
    let img = noise(9, 6, 3, 42);
    save_image(&img, &path).unwrap();
    let loaded = load_image(&path, 0, Layout::Interleaved).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn planar_buffers_are_saved_interleaved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/dir/planar.png");
    let img = checkerboard(8, 8, 4, 2);
    let planar = img.clone().into_layout(Layout::Planar);
    save_image(&planar, &path).unwrap();
    assert_eq!(planar.layout(), Layout::Planar);

    let loaded = load_image(&path, 0, Layout::Planar).unwrap();
    assert_eq!(loaded.layout(), Layout::Planar);
    assert_eq!(loaded, planar);
    assert_eq!(loaded.into_layout(Layout::Interleaved), img);
}

#[test]
fn lossless_formats_round_trip() {
    let dir = TempDir::new().unwrap();
    let img = noise(5, 4, 3, 7);
    for ext in ["bmp", "tga"] {
        let path = dir.path().join(format!("out.{ext}"));
        save_image(&img, &path).unwrap();
        assert_eq!(load_image(&path, 0, Layout::Interleaved).unwrap(), img, "{ext}");
    }
}

#[test]
fn jpeg_is_written_and_decodes_to_same_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.jpg");
    let img = checkerboard(16, 16, 3, 4);
    save_image(&img, &path).unwrap();
    let loaded = load_image(&path, 0, Layout::Interleaved).unwrap();
    assert_eq!(
        (loaded.width(), loaded.height(), loaded.channels()),
        (16, 16, 3)
    );
}

#[test]
fn jpeg_accepts_alpha_buffers_by_dropping_alpha() {
    let dir = TempDir::new().unwrap();
    for (channels, decoded) in [(2, 1), (4, 3)] {
        let path = dir.path().join(format!("alpha{channels}.jpg"));
        let mut img = uniform(8, 8, channels, 128);
        for y in 0..8 {
            for x in 0..8 {
                img[(x, y, channels - 1)] = 0;
            }
        }
        save_image(&img, &path).unwrap();
        let loaded = load_image(&path, 0, Layout::Interleaved).unwrap();
        assert_eq!(loaded.channels(), decoded, "{channels} channels");
        // Flat colour survives JPEG almost exactly; alpha is not blended in.
        assert!(loaded
            .as_slice()
            .iter()
            .all(|&v| (v as i32 - 128).abs() <= 2));
    }
}

#[test]
fn channel_force_converts_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rgb.png");
    save_image(&noise(4, 4, 3, 9), &path).unwrap();
    let rgba = load_image(&path, 4, Layout::Interleaved).unwrap();
    assert_eq!(rgba.channels(), 4);
    assert!((0..4).all(|y| (0..4).all(|x| rgba[(x, y, 3)] == 255)));
    let gray = load_image(&path, 1, Layout::Interleaved).unwrap();
    assert_eq!(gray.channels(), 1);
    assert!(matches!(
        load_image(&path, 5, Layout::Interleaved),
        Err(CodecError::UnsupportedChannels(5))
    ));
}

#[test]
fn unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gif");
    assert!(matches!(
        save_image(&noise(2, 2, 1, 1), &path),
        Err(CodecError::UnsupportedFormat(_))
    ));
}

#[test]
fn decode_then_convolve_then_encode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    save_image(&checkerboard(12, 10, 3, 3), &input).unwrap();

    let img = load_image(&input, 0, Layout::Planar).unwrap();
    let blurred = convolve(&img, &FilterKernel::gaussian_blur(), PaddingPolicy::Replicate).unwrap();
    save_image(&blurred, &output).unwrap();

    let reloaded = load_image(&output, 0, Layout::Planar).unwrap();
    assert_eq!(reloaded, blurred);
}

#[test]
fn json_report_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports/run.json");
    write_json_file(&path, &serde_json::json!({ "iterations": 3 })).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"iterations\": 3"));
}
