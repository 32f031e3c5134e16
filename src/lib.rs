//! # zenbmp
//!
//! Decoder for uncompressed 24-bit Windows BMP images.
//!
//! A BMP buffer is decoded into a [`PixelGrid`]: `height` rows of `width`
//! RGB pixels, top row first, no padding. The decoder undoes the three
//! storage quirks of the format:
//!
//! - rows are stored bottom-up,
//! - each stored row is padded to a multiple of 4 bytes,
//! - each pixel is stored as B, G, R.
//!
//! ## Supported Files
//!
//! - 14-byte BITMAPFILEHEADER with the `BM` signature
//! - 40-byte BITMAPINFOHEADER, positive width and height, 24 bits per pixel
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields) BMP, palettes, and bit depths other than 24
//! - Top-down (negative height) images
//! - BMP v4/v5 headers; [`BmpPermissiveness::Strict`] rejects them outright
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} at offset {}", info.width, info.height, info.data_offset);
//!
//! let decoded = zenbmp::decode_bmp(data, Unstoppable)?;
//! let top_left = decoded.pixels.get(0, 0);
//! # Ok::<(), zenbmp::BmpError>(())
//! ```
//!
//! The individual stages are public too, for callers that want to drive
//! the pipeline themselves:
//!
//! ```
//! use zenbmp::bmp::{decode_file_header, decode_info_header, extract_pixels};
//!
//! # let mut data = vec![0u8; 58];
//! # data[0..2].copy_from_slice(b"BM");
//! # data[10..14].copy_from_slice(&54u32.to_le_bytes());
//! # data[18..22].copy_from_slice(&1i32.to_le_bytes());
//! # data[22..26].copy_from_slice(&1i32.to_le_bytes());
//! # data[28..30].copy_from_slice(&24u16.to_le_bytes());
//! # data[54..57].copy_from_slice(&[0x00, 0x00, 0xFF]);
//! let file = decode_file_header(&data)?;
//! let info = decode_info_header(&data)?;
//! let grid = extract_pixels(&data, file.data_offset, info.width_px(), info.height_px())?;
//! assert_eq!(grid.get(0, 0), Some([0xFF, 0x00, 0x00]));
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod grid;
mod info;
mod limits;

pub mod bmp;

// Re-exports
pub use bmp::{BmpPermissiveness, FileHeader, InfoHeader};
pub use decode::{DecodeRequest, DecodedBmp};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use grid::{CHANNELS, PixelGrid};
pub use info::ImageInfo;
pub use limits::Limits;

/// Decode a 24-bit BMP with default validation and no limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<DecodedBmp, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a 24-bit BMP, rejecting images that exceed `limits`.
pub fn decode_bmp_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodedBmp, BmpError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}
