//! End-to-end tests: image files and buffers through to finished text.
//!
//! These tests verify:
//! - Each output format from a real buffer
//! - Image files decode and render
//! - Invalid inputs fail without output
//! - Every charset produces distinct output for the same image

use std::collections::HashSet;

use glyphcast::ascii::{Charset, OutputFormat};
use glyphcast::source::load_image;
use glyphcast::{render, PixelBuffer, RenderError, RenderOptions, TextArtifact};

fn solid(rgb: [u8; 3], width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_rgb(rgb.repeat((width * height) as usize), width, height).unwrap()
}

/// Diagonal gradient with a colored tint, like a simple photo.
fn make_test_image(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 255 / (width + height - 2)) as u8;
            data.extend_from_slice(&[v, v / 2, 255 - v]);
        }
    }
    PixelBuffer::from_rgb(data, width, height).unwrap()
}

// ====================
// Output formats
// ====================

#[test]
fn test_white_pixel_block_is_single_at() {
    let opts = RenderOptions {
        width: 1,
        ..Default::default()
    };
    let out = render(&solid([255, 255, 255], 2, 2), &opts).unwrap();
    assert_eq!(out, TextArtifact::Plain("@\n".to_string()));
}

#[test]
fn test_ansi_output() {
    let opts = RenderOptions {
        width: 1,
        color: true,
        ..Default::default()
    };
    let out = render(&solid([255, 0, 0], 2, 2), &opts).unwrap();
    assert_eq!(out.format(), OutputFormat::Ansi);
    // Red luma is 0.2126, index 1 in the basic ramp
    assert_eq!(out.as_str(), "\x1b[38;2;255;0;0m.\x1b[0m\n");
}

#[test]
fn test_html_output() {
    let opts = RenderOptions {
        width: 2,
        html: true,
        ..Default::default()
    };
    let out = render(&solid([255, 255, 255], 4, 4), &opts).unwrap();
    assert_eq!(out.format(), OutputFormat::Html);

    let html = out.as_str();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("white-space:pre"));
    assert!(html.contains("monospace"));
    assert_eq!(html.matches("<span style=\"color:#ffffff\">@</span>").count(), 2);
    // Single row, so nothing to separate
    assert_eq!(html.matches("<br>").count(), 0);
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_braille_color_is_cell_mean() {
    // Left cell: white top half, black bottom half. Right cell: solid red.
    let mut data = Vec::new();
    for y in 0..4 {
        for x in 0..4 {
            let rgb = match (x < 2, y < 2) {
                (true, true) => [255, 255, 255],
                (true, false) => [0, 0, 0],
                (false, _) => [255, 0, 0],
            };
            data.extend_from_slice(&rgb);
        }
    }
    let pixels = PixelBuffer::from_rgb(data, 4, 4).unwrap();
    let opts = RenderOptions {
        width: 2,
        charset: Charset::Braille,
        color: true,
        ..Default::default()
    };
    let out = render(&pixels, &opts).unwrap();

    // One escape per cell, carrying the mean of all 8 dots' pixels
    assert_eq!(out.as_str().matches("\x1b[38;2;").count(), 2);
    assert_eq!(
        out.as_str(),
        "\x1b[38;2;127;127;127m\u{281B}\x1b[38;2;255;0;0m\u{2800}\x1b[0m\n"
    );
}

#[test]
fn test_rgba_input_ignores_alpha() {
    let rgba: Vec<u8> = [255u8, 255, 255, 0].repeat(4);
    let pixels = PixelBuffer::from_rgba(rgba, 2, 2).unwrap();
    let opts = RenderOptions {
        width: 1,
        ..Default::default()
    };
    assert_eq!(render(&pixels, &opts).unwrap().as_str(), "@\n");
}

#[test]
fn test_charsets_differ() {
    let image = make_test_image(160, 96);
    let outputs: HashSet<String> = Charset::ALL
        .iter()
        .map(|&charset| {
            let opts = RenderOptions {
                width: 40,
                charset,
                ..Default::default()
            };
            render(&image, &opts).unwrap().into_string()
        })
        .collect();
    assert_eq!(outputs.len(), Charset::ALL.len());
}

#[test]
fn test_all_option_combinations_render() {
    let image = make_test_image(64, 48);
    for charset in Charset::ALL {
        for bits in 0..32u8 {
            let opts = RenderOptions {
                width: 16,
                charset,
                invert: bits & 1 != 0,
                dither: bits & 2 != 0,
                edge: bits & 4 != 0,
                color: bits & 8 != 0,
                html: bits & 16 != 0,
                ..Default::default()
            };
            let out = render(&image, &opts).unwrap();
            assert!(!out.as_str().is_empty(), "{:?}", opts);
            assert_eq!(out.format(), opts.output_format(), "{:?}", opts);
        }
    }
}

// ====================
// Image files
// ====================

#[test]
fn test_png_file_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("white.png");
    image::RgbImage::from_pixel(8, 8, image::Rgb([255, 255, 255]))
        .save(&path)
        .unwrap();

    let pixels = load_image(&path).unwrap();
    let opts = RenderOptions {
        width: 4,
        ..Default::default()
    };
    assert_eq!(render(&pixels, &opts).unwrap().as_str(), "@@@@\n@@@@\n");
}

#[test]
fn test_corrupt_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();
    assert!(matches!(load_image(&path), Err(RenderError::UnreadableSource(_))));
}

// ====================
// Invalid inputs
// ====================

#[test]
fn test_empty_buffer_rejected() {
    assert!(matches!(
        PixelBuffer::from_rgb(Vec::new(), 0, 0),
        Err(RenderError::UnreadableSource(_))
    ));
}

#[test]
fn test_zero_width_rejected() {
    let opts = RenderOptions {
        width: 0,
        ..Default::default()
    };
    assert!(matches!(
        render(&solid([1, 2, 3], 4, 4), &opts),
        Err(RenderError::InvalidOption(_))
    ));
}

#[test]
fn test_unknown_charset_name_rejected() {
    assert!(matches!(
        "emoji".parse::<Charset>(),
        Err(RenderError::InvalidOption(_))
    ));
}
