//! Fixed-offset little-endian reads over a byte slice.
//!
//! All multi-byte values in a BMP file are little-endian. Offsets are
//! absolute positions in the file buffer and carry no alignment requirement.

use crate::error::BmpError;

/// Borrow `N` bytes starting at `offset`, or fail with `OutOfBounds`.
fn bytes_at<const N: usize>(buffer: &[u8], offset: usize) -> Result<[u8; N], BmpError> {
    let out_of_bounds = || BmpError::OutOfBounds {
        offset,
        len: N,
        available: buffer.len(),
    };
    let end = offset.checked_add(N).ok_or_else(out_of_bounds)?;
    let bytes = buffer.get(offset..end).ok_or_else(out_of_bounds)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Read an unsigned 16-bit little-endian value at `offset`.
pub fn read_u16_le(buffer: &[u8], offset: usize) -> Result<u16, BmpError> {
    bytes_at::<2>(buffer, offset).map(u16::from_le_bytes)
}

/// Read an unsigned 32-bit little-endian value at `offset`.
pub fn read_u32_le(buffer: &[u8], offset: usize) -> Result<u32, BmpError> {
    bytes_at::<4>(buffer, offset).map(u32::from_le_bytes)
}

/// Read a two's-complement signed 32-bit little-endian value at `offset`.
pub fn read_i32_le(buffer: &[u8], offset: usize) -> Result<i32, BmpError> {
    bytes_at::<4>(buffer, offset).map(i32::from_le_bytes)
}
