//! BITMAPFILEHEADER and BITMAPINFOHEADER decoding.
//!
//! Only the classic layout is understood: a 14-byte file header followed by
//! a 40-byte info header, both read at fixed offsets.

use super::reader::{read_i32_le, read_u16_le, read_u32_le};
use crate::error::BmpError;

/// "BM" read as a little-endian `u16`.
pub const BMP_SIGNATURE: u16 = 0x4D42;

/// Size of the BITMAPFILEHEADER.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the classic BITMAPINFOHEADER.
pub const INFO_HEADER_SIZE: u32 = 40;

/// The only supported bit depth.
pub const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

// File header fields.
const FILE_SIZE_AT: usize = 2;
const DATA_OFFSET_AT: usize = 10;

// Info header fields, relative to the end of the file header.
const HEADER_SIZE_AT: usize = FILE_HEADER_SIZE;
const WIDTH_AT: usize = FILE_HEADER_SIZE + 4;
const HEIGHT_AT: usize = FILE_HEADER_SIZE + 8;
const PLANES_AT: usize = FILE_HEADER_SIZE + 12;
const BPP_AT: usize = FILE_HEADER_SIZE + 14;
const COMPRESSION_AT: usize = FILE_HEADER_SIZE + 16;

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Reject files that are inconsistent even in fields pixel decoding
    /// does not need. On top of `Standard`, validates: info header size
    /// is 40, planes == 1, compression is BI_RGB, and a non-zero file
    /// size field matches the buffer length.
    Strict,

    /// Default behavior. Reads only the signature, pixel data offset,
    /// width, height and bit depth; other header fields are ignored.
    #[default]
    Standard,
}

// ── File header ─────────────────────────────────────────────────────

/// The fields of BITMAPFILEHEADER needed to locate pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHeader {
    /// Always [`BMP_SIGNATURE`] once decoded.
    pub signature: u16,
    /// Byte offset from the start of the file to the first pixel row.
    pub data_offset: u32,
}

/// Decode the 14-byte file header at the start of `buffer`.
///
/// Fails with `InvalidSignature` unless the buffer starts with `BM`. File
/// size and reserved fields are not interpreted.
pub fn decode_file_header(buffer: &[u8]) -> Result<FileHeader, BmpError> {
    let signature = read_u16_le(buffer, 0)?;
    log::trace!("BMP signature: 0x{signature:04X}");
    if signature != BMP_SIGNATURE {
        return Err(BmpError::InvalidSignature(signature));
    }

    let data_offset = read_u32_le(buffer, DATA_OFFSET_AT)?;
    log::trace!("BMP data offset: {data_offset}");

    Ok(FileHeader {
        signature,
        data_offset,
    })
}

// ── Info header ─────────────────────────────────────────────────────

/// The fields of BITMAPINFOHEADER needed to reconstruct the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHeader {
    /// Width in pixels; always positive once decoded.
    pub width: i32,
    /// Height in pixels; always positive (bottom-up rows) once decoded.
    pub height: i32,
    /// Always [`SUPPORTED_BITS_PER_PIXEL`] once decoded.
    pub bits_per_pixel: u16,
}

impl InfoHeader {
    /// Width as an unsigned pixel count.
    pub fn width_px(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Height as an unsigned row count.
    pub fn height_px(&self) -> u32 {
        self.height.unsigned_abs()
    }
}

/// Decode and validate the classic 40-byte info header.
///
/// The header size field at offset 14 is not consulted, so BMP v4/v5 files
/// are read as if their first 40 bytes were a BITMAPINFOHEADER. Use
/// [`BmpPermissiveness::Strict`] through [`crate::DecodeRequest`] to reject
/// them instead.
pub fn decode_info_header(buffer: &[u8]) -> Result<InfoHeader, BmpError> {
    let width = read_i32_le(buffer, WIDTH_AT)?;
    let height = read_i32_le(buffer, HEIGHT_AT)?;
    let bits_per_pixel = read_u16_le(buffer, BPP_AT)?;
    log::trace!("BMP width: {width}");
    log::trace!("BMP height: {height}");
    log::trace!("BMP bits per pixel: {bits_per_pixel}");

    if width <= 0 {
        return Err(BmpError::unsupported("width", width));
    }
    // Negative height means top-down rows, which is not supported.
    if height <= 0 {
        return Err(BmpError::unsupported("height", height));
    }
    if bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
        return Err(BmpError::unsupported("bits_per_pixel", bits_per_pixel));
    }

    Ok(InfoHeader {
        width,
        height,
        bits_per_pixel,
    })
}

/// Strict-mode checks of fields the standard decoders skip.
pub(crate) fn check_strict(buffer: &[u8]) -> Result<(), BmpError> {
    let file_size = read_u32_le(buffer, FILE_SIZE_AT)?;
    let header_size = read_u32_le(buffer, HEADER_SIZE_AT)?;
    let planes = read_u16_le(buffer, PLANES_AT)?;
    let compression = read_u32_le(buffer, COMPRESSION_AT)?;
    log::trace!(
        "BMP strict fields: file size {file_size}, header size {header_size}, \
         planes {planes}, compression {compression}"
    );

    if header_size != INFO_HEADER_SIZE {
        return Err(BmpError::unsupported("header_size", header_size));
    }
    if planes != 1 {
        return Err(BmpError::unsupported("planes", planes));
    }
    if compression != 0 {
        return Err(BmpError::unsupported("compression", compression));
    }
    if file_size != 0 && file_size as usize != buffer.len() {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "BMP file size field ({file_size}) doesn't match actual size ({})",
            buffer.len()
        )));
    }
    Ok(())
}
