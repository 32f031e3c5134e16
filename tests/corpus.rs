//! Test corpus: synthetic BMP files with various patterns, sizes, and layouts.

use zenbmp::*;

/// Write a 24-bit bottom-up BMP for top-down RGB `pixels`.
///
/// `gap` extra bytes are placed between the info header and the pixel
/// array, and `pad_fill` is written into every row padding byte.
fn write_bmp(pixels: &[u8], w: usize, h: usize, gap: usize, pad_fill: u8) -> Vec<u8> {
    assert_eq!(pixels.len(), w * h * 3);
    let stride = (w * 3 + 3) & !3;
    let data_offset = 54 + gap;
    let file_size = data_offset + stride * h;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&((stride * h) as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend(std::iter::repeat_n(0xC3u8, gap));

    for row in (0..h).rev() {
        for px in pixels[row * w * 3..(row + 1) * w * 3].chunks_exact(3) {
            out.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        out.extend(std::iter::repeat_n(pad_fill, stride - w * 3));
    }
    assert_eq!(out.len(), file_size);
    out
}

fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            let px = if (x + y) % 2 == 0 {
                [200, 220, 240]
            } else {
                [10, 40, 70]
            };
            pixels[off..off + 3].copy_from_slice(&px);
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

fn decode_pixels(data: &[u8]) -> PixelGrid {
    decode_bmp(data, Unstoppable).unwrap().into_pixels()
}

// ── Geometry ─────────────────────────────────────────────────────────

#[test]
fn checkerboard_even_width() {
    let pixels = checkerboard(8, 6);
    let grid = decode_pixels(&write_bmp(&pixels, 8, 6, 0, 0));
    assert_eq!(grid.shape(), (6, 8, 3));
    assert_eq!(grid.as_bytes(), &pixels[..]);
}

#[test]
fn every_padding_amount() {
    // Widths 1..=8 cover padding of 1, 2, 3 and 0 bytes twice.
    for w in 1..=8 {
        let pixels = noise_pattern(w, 3);
        let data = write_bmp(&pixels, w, 3, 0, 0xEE);
        let grid = decode_pixels(&data);
        assert_eq!(grid.as_bytes(), &pixels[..], "width {w}");
    }
}

#[test]
fn single_pixel() {
    let pixels = [255, 0, 128];
    let grid = decode_pixels(&write_bmp(&pixels, 1, 1, 0, 0));
    assert_eq!(grid.get(0, 0), Some([255, 0, 128]));
}

#[test]
fn wide_image() {
    let pixels = noise_pattern(1001, 1);
    let grid = decode_pixels(&write_bmp(&pixels, 1001, 1, 0, 0));
    assert_eq!(grid.as_bytes(), &pixels[..]);
}

#[test]
fn tall_image_row_order() {
    let h = 500;
    let pixels: Vec<u8> = (0..h).flat_map(|y| [y as u8, (y >> 8) as u8, 0]).collect();
    let grid = decode_pixels(&write_bmp(&pixels, 1, h, 0, 0));
    for (y, row) in grid.rows().enumerate() {
        assert_eq!(row, &[y as u8, (y >> 8) as u8, 0], "row {y}");
    }
}

#[test]
fn gap_before_pixel_array() {
    // e.g. a color table or alignment gap the decoder must skip.
    let pixels = checkerboard(5, 4);
    let data = write_bmp(&pixels, 5, 4, 84, 0);
    assert_eq!(bmp::decode_file_header(&data).unwrap().data_offset, 54 + 84);
    assert_eq!(decode_pixels(&data).as_bytes(), &pixels[..]);
}

#[test]
fn top_row_is_last_stored_row() {
    let (w, h) = (3, 4);
    let pixels = noise_pattern(w, h);
    let data = write_bmp(&pixels, w, h, 0, 0);
    let stride = 12;
    let last_stored = &data[54 + stride * (h - 1)..54 + stride * (h - 1) + w * 3];
    let grid = decode_pixels(&data);
    let top = grid.row(0).unwrap();
    for (stored, decoded) in last_stored.chunks_exact(3).zip(top.chunks_exact(3)) {
        assert_eq!([stored[2], stored[1], stored[0]], [decoded[0], decoded[1], decoded[2]]);
    }
}

#[test]
fn extract_with_explicit_geometry() {
    let pixels = noise_pattern(7, 5);
    let data = write_bmp(&pixels, 7, 5, 12, 0x55);
    let grid = bmp::extract_pixels(&data, 66, 7, 5).unwrap();
    assert_eq!(grid.as_bytes(), &pixels[..]);
}

#[test]
fn truncation_at_every_row_boundary() {
    let (w, h) = (3, 4);
    let data = write_bmp(&noise_pattern(w, h), w, h, 0, 0);
    for cut in [54, 54 + 12, 54 + 24, 54 + 36, data.len() - 1] {
        assert!(
            matches!(
                decode_bmp(&data[..cut], Unstoppable),
                Err(BmpError::TruncatedData { .. })
            ),
            "cut at {cut}"
        );
    }
}

#[test]
fn limits_dimension_checks() {
    let data = write_bmp(&checkerboard(4, 2), 4, 2, 0, 0);
    let width_limited = Limits {
        max_width: Some(3),
        ..Default::default()
    };
    assert!(decode_bmp_with_limits(&data, &width_limited, Unstoppable).is_err());
    let height_limited = Limits {
        max_height: Some(1),
        ..Default::default()
    };
    assert!(decode_bmp_with_limits(&data, &height_limited, Unstoppable).is_err());
    let roomy = Limits {
        max_width: Some(4),
        max_height: Some(2),
        max_pixels: Some(8),
        max_memory_bytes: Some(24),
    };
    assert!(decode_bmp_with_limits(&data, &roomy, Unstoppable).is_ok());
}

#[test]
fn synthetic_grid_matches_decoded() {
    let (w, h) = (6, 3);
    let expected = PixelGrid::from_fn(w, h, |row, col| [row as u8 * 40, col as u8 * 30, 99]);
    let data = write_bmp(expected.as_bytes(), w as usize, h as usize, 0, 0);
    assert_eq!(decode_pixels(&data), expected);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_handoff() {
    let pixels = checkerboard(4, 3);
    let grid = decode_pixels(&write_bmp(&pixels, 4, 3, 0, 0));
    let img = grid.to_imgvec();
    assert_eq!((img.width(), img.height()), (4, 3));
    assert_eq!(img.buf()[0], rgb::RGB8::new(200, 220, 240));
    assert_eq!(img.buf()[1], rgb::RGB8::new(10, 40, 70));
}
