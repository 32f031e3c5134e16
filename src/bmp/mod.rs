//! Uncompressed 24-bit BMP decoding.
//!
//! The decode is a linear pipeline of pure stages:
//! [`decode_file_header`] → [`decode_info_header`] → [`extract_pixels`].
//! Each stage returns a `Result` and the first error stops the pipeline, so
//! pixel data is never touched when a header is rejected.

mod header;
mod pixels;
mod reader;

pub use header::{
    BMP_SIGNATURE, BmpPermissiveness, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader,
    SUPPORTED_BITS_PER_PIXEL, decode_file_header, decode_info_header,
};
pub use pixels::extract_pixels;
pub use reader::{read_i32_le, read_u16_le, read_u32_le};

use crate::decode::DecodedBmp;
use crate::error::BmpError;
use crate::limits::Limits;
use enough::Stop;

/// Both headers, validated.
pub(crate) fn decode_headers(
    data: &[u8],
    permissiveness: BmpPermissiveness,
) -> Result<(FileHeader, InfoHeader), BmpError> {
    let file_header = decode_file_header(data)?;
    let info_header = decode_info_header(data)?;
    if permissiveness == BmpPermissiveness::Strict {
        header::check_strict(data)?;
    }
    Ok((file_header, info_header))
}

/// Run the full pipeline over `data`.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<DecodedBmp, BmpError> {
    let (file_header, info_header) = decode_headers(data, permissiveness)?;
    let (width, height) = (info_header.width_px(), info_header.height_px());
    check_limits(limits, width, height)?;

    let pixels =
        pixels::extract_pixels_with_stop(data, file_header.data_offset, width, height, stop)?;
    log::debug!("decoded {width}x{height} 24-bit BMP");

    Ok(DecodedBmp {
        file_header,
        info_header,
        pixels,
    })
}

fn check_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), BmpError> {
    match limits {
        Some(limits) => limits.check(width, height),
        None => Ok(()),
    }
}
