//! Unit tests for the rendering stages through the public API.
//!
//! These tests verify:
//! - Luminance weights
//! - Brightness to glyph monotonicity
//! - Grid aspect correction
//! - Inversion and dithering behavior
//! - Braille packing
//! - Edge emphasis

use glyphcast::ascii::*;
use glyphcast::{render, render_grid, PixelBuffer, RenderOptions};

fn solid(rgb: [u8; 3], width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_rgb(rgb.repeat((width * height) as usize), width, height).unwrap()
}

/// Horizontal gray ramp from black on the left to white on the right.
fn horizontal_ramp(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    PixelBuffer::from_rgb(data, width, height).unwrap()
}

fn basic_index(c: char) -> usize {
    BASIC_CHARSET.iter().position(|&g| g == c).unwrap()
}

// ==================== Luminance Tests ====================

#[test]
fn test_luma_coefficients_sum_to_one() {
    assert_eq!(luma([0, 0, 0]), 0.0);
    assert_eq!(luma([255, 255, 255]), 1.0);
    for v in [1u8, 64, 128, 200, 254] {
        assert!((luma([v, v, v]) - v as f32 / 255.0).abs() < 1e-6);
    }
}

#[test]
fn test_luma_green_dominates() {
    assert!(luma([0, 255, 0]) > luma([255, 0, 0]));
    assert!(luma([255, 0, 0]) > luma([0, 0, 255]));
}

// ==================== Mapping Tests ====================

#[test]
fn test_brighter_never_maps_lighter() {
    let opts = RenderOptions {
        width: 10,
        ..Default::default()
    };
    let grid = render_grid(&horizontal_ramp(100, 20), &opts).unwrap();
    assert_eq!(grid.rows, 1);

    let indices: Vec<usize> = grid.chars.iter().map(|&c| basic_index(c)).collect();
    assert!(indices.windows(2).all(|w| w[0] <= w[1]), "{:?}", indices);
    assert_eq!(indices[0], 0);
}

#[test]
fn test_quantize_bounds_for_every_table() {
    for charset in Charset::ALL {
        let levels = charset.levels();
        assert_eq!(quantize(0.0, levels), 0);
        assert_eq!(quantize(1.0, levels), levels - 1);
    }
}

#[test]
fn test_invert_mirrors_indices() {
    let pixels = horizontal_ramp(100, 20);
    let normal = RenderOptions {
        width: 10,
        ..Default::default()
    };
    let inverted = RenderOptions {
        invert: true,
        ..normal
    };

    let a = render_grid(&pixels, &normal).unwrap();
    let b = render_grid(&pixels, &inverted).unwrap();

    for (&x, &y) in a.chars.iter().zip(&b.chars) {
        assert_eq!(basic_index(x) + basic_index(y), BASIC_CHARSET.len() - 1);
    }
}

#[test]
fn test_invert_black_is_full_ink() {
    let opts = RenderOptions {
        width: 2,
        invert: true,
        ..Default::default()
    };
    let grid = render_grid(&solid([0, 0, 0], 4, 4), &opts).unwrap();
    assert!(grid.chars.iter().all(|&c| c == '@'));
}

#[test]
fn test_dither_is_deterministic() {
    let pixels = horizontal_ramp(64, 64);
    let opts = RenderOptions {
        width: 32,
        dither: true,
        ..Default::default()
    };
    let first = render(&pixels, &opts).unwrap();
    let second = render(&pixels, &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dither_mixes_levels_on_flat_gray() {
    // 0.3 sits between two Block levels, so diffusion must alternate them
    let gray = (0.3f32 * 255.0).round() as u8;
    let opts = RenderOptions {
        width: 16,
        charset: Charset::Block,
        dither: true,
        ..Default::default()
    };
    let grid = render_grid(&solid([gray, gray, gray], 64, 64), &opts).unwrap();
    let distinct: std::collections::HashSet<char> = grid.chars.iter().copied().collect();
    assert!(distinct.len() >= 2, "{:?}", distinct);
}

// ==================== Dimension Tests ====================

#[test]
fn test_aspect_correction_halves_rows() {
    let opts = RenderOptions::default();
    let grid = render_grid(&solid([128, 128, 128], 200, 100), &opts).unwrap();
    assert_eq!(grid.cols, 80);
    assert_eq!(grid.rows, 20);
    // Uncorrected would be 40 rows
    assert!(grid.rows < 40);
}

#[test]
fn test_tall_narrow_image_keeps_one_row_minimum() {
    let size = grid_size(1000, 1, 10, DEFAULT_CELL_ASPECT).unwrap();
    assert_eq!(size, GridSize { cols: 10, rows: 1 });
}

#[test]
fn test_output_ends_every_row() {
    let opts = RenderOptions {
        width: 12,
        ..Default::default()
    };
    let out = render(&horizontal_ramp(48, 48), &opts).unwrap();
    let text = out.as_str();
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 6);
    assert!(text.lines().all(|l| l.chars().count() == 12));
}

// ==================== Braille Tests ====================

#[test]
fn test_braille_corner_dots() {
    let mut dots = [[false; 4]; 2];
    dots[0][0] = true;
    dots[1][3] = true;
    assert_eq!(pack_dots(dots), 0x81);
    assert_eq!(mask_to_char(0x81), '\u{2881}');
}

#[test]
fn test_braille_range() {
    assert_eq!(mask_to_char(0), BRAILLE_BASE);
    assert_eq!(mask_to_char(0xFF), '\u{28FF}');
}

#[test]
fn test_braille_half_lit_cell() {
    // Left half white, right half black: column 0 dots on, column 1 off
    let mut data = Vec::new();
    for _ in 0..8 {
        for x in 0..4 {
            let v = if x < 2 { 255 } else { 0 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    let pixels = PixelBuffer::from_rgb(data, 4, 8).unwrap();
    let opts = RenderOptions {
        width: 1,
        charset: Charset::Braille,
        cell_aspect: 1.0,
        ..Default::default()
    };
    let grid = render_grid(&pixels, &opts).unwrap();
    assert_eq!(grid.rows, 2);
    // 0x01 | 0x02 | 0x04 | 0x40
    assert!(grid.chars.iter().all(|&c| c == '\u{2847}'), "{:?}", grid.chars);
}

// ==================== Edge Tests ====================

/// Mid-gray field with a one-pixel white vertical line at `line_x`.
fn gray_with_line(width: u32, height: u32, line_x: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = if x == line_x { 255 } else { 128 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    PixelBuffer::from_rgb(data, width, height).unwrap()
}

#[test]
fn test_edge_forces_heaviest_glyph() {
    let pixels = gray_with_line(40, 8, 17);
    let plain = RenderOptions {
        width: 10,
        ..Default::default()
    };
    let with_edges = RenderOptions { edge: true, ..plain };

    let out = render(&pixels, &plain).unwrap();
    assert_eq!(out.as_str(), "====+=====\n");

    let out = render(&pixels, &with_edges).unwrap();
    assert_eq!(out.as_str(), "====@=====\n");
}

#[test]
fn test_braille_edges_force_dots_on() {
    // Inverted mid-gray sits just below the dot cutoff, so only edges light up
    let pixels = gray_with_line(40, 32, 17);
    let plain = RenderOptions {
        width: 10,
        charset: Charset::Braille,
        invert: true,
        ..Default::default()
    };
    let with_edges = RenderOptions { edge: true, ..plain };

    let grid = render_grid(&pixels, &plain).unwrap();
    assert_eq!((grid.cols, grid.rows), (10, 4));
    assert!(grid.chars.iter().all(|&c| c == '\u{2800}'), "{:?}", grid.chars);

    let grid = render_grid(&pixels, &with_edges).unwrap();
    for line in grid.lines() {
        let row: String = line.iter().collect();
        assert_eq!(row, "\u{2800}\u{2800}\u{2800}\u{2800}\u{28FF}\u{2800}\u{2800}\u{2800}\u{2800}\u{2800}");
    }
}

#[test]
fn test_flat_image_has_no_edges() {
    let opts = RenderOptions {
        width: 8,
        edge: true,
        ..Default::default()
    };
    let with = render(&solid([128, 128, 128], 32, 32), &opts).unwrap();
    let without = render(&solid([128, 128, 128], 32, 32), &RenderOptions { edge: false, ..opts }).unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_sobel_border_is_zero() {
    let pixels = gray_with_line(8, 8, 4);
    let luma = to_luma(&pixels);
    let mag = sobel_magnitude(&luma);
    for x in 0..8 {
        assert_eq!(mag[x], 0.0);
        assert_eq!(mag[7 * 8 + x], 0.0);
    }
    assert!(mag[3 * 8 + 3] > 0.0);
}
