use crate::bmp::{self, BmpPermissiveness, FileHeader, InfoHeader};
use crate::error::BmpError;

/// Header summary, available without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Byte offset of the pixel array.
    pub data_offset: u32,
}

impl ImageInfo {
    /// Probe a BMP buffer. Validates both headers but not the pixel extent.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let (file_header, info_header) = bmp::decode_headers(data, BmpPermissiveness::Standard)?;
        Ok(Self::from_headers(&file_header, &info_header))
    }

    pub(crate) fn from_headers(file_header: &FileHeader, info_header: &InfoHeader) -> Self {
        Self {
            width: info_header.width_px(),
            height: info_header.height_px(),
            bits_per_pixel: info_header.bits_per_pixel,
            data_offset: file_header.data_offset,
        }
    }

    /// Bytes needed to hold the decoded RGB grid.
    pub fn output_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(crate::grid::CHANNELS)
    }
}
