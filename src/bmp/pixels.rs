//! 24-bit pixel array extraction.
//!
//! Rows are stored bottom-up, each row is `width` BGR triples padded to a
//! multiple of 4 bytes. Output rows are top-down RGB with no padding.

use alloc::vec;

use enough::{Stop, Unstoppable};

use crate::error::BmpError;
use crate::grid::PixelGrid;

const BYTES_PER_PIXEL: usize = 3;

/// Byte geometry of the stored pixel array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowLayout {
    /// Pixel bytes per row, excluding padding.
    pub row_bytes: usize,
    /// Row stride in the file, rounded up to 4 bytes.
    pub padded_row_bytes: usize,
    /// `data_offset + padded_row_bytes * height`.
    pub end: usize,
}

impl RowLayout {
    pub(crate) fn new(data_offset: u32, width: u32, height: u32) -> Result<Self, BmpError> {
        let too_large = || BmpError::DimensionsTooLarge { width, height };
        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(too_large)?;
        let padded_row_bytes = row_bytes
            .checked_add(3)
            .map(|r| r & !3)
            .ok_or_else(too_large)?;
        let end = padded_row_bytes
            .checked_mul(height as usize)
            .and_then(|size| size.checked_add(data_offset as usize))
            .ok_or_else(too_large)?;
        Ok(Self {
            row_bytes,
            padded_row_bytes,
            end,
        })
    }
}

/// Reconstruct the top-down RGB grid from a bottom-up BGR pixel array.
///
/// `data_offset` is the file header's pixel data offset. Fails with
/// `UnsupportedFormat` for a zero dimension and with `TruncatedData` when
/// the padded rows do not fit in `buffer`.
pub fn extract_pixels(
    buffer: &[u8],
    data_offset: u32,
    width: u32,
    height: u32,
) -> Result<PixelGrid, BmpError> {
    extract_pixels_with_stop(buffer, data_offset, width, height, &Unstoppable)
}

pub(crate) fn extract_pixels_with_stop(
    buffer: &[u8],
    data_offset: u32,
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    if width == 0 {
        return Err(BmpError::unsupported("width", width));
    }
    if height == 0 {
        return Err(BmpError::unsupported("height", height));
    }

    let layout = RowLayout::new(data_offset, width, height)?;
    if layout.end > buffer.len() {
        return Err(BmpError::TruncatedData {
            needed: layout.end,
            actual: buffer.len(),
        });
    }
    let pixel_array = &buffer[data_offset as usize..layout.end];

    stop.check()?;
    let mut out = vec![0u8; layout.row_bytes * height as usize];

    // The first stored row is the bottom of the image, so walking stored
    // rows forward fills the output from its last row upward.
    for (row_idx, (src, dst)) in pixel_array
        .chunks_exact(layout.padded_row_bytes)
        .zip(out.rchunks_exact_mut(layout.row_bytes))
        .enumerate()
    {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for (bgr, rgb) in src[..layout.row_bytes]
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            rgb[0] = bgr[2];
            rgb[1] = bgr[1];
            rgb[2] = bgr[0];
        }
    }

    Ok(PixelGrid::from_raw(width, height, out))
}
