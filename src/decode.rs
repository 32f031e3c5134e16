use enough::Stop;

use crate::bmp::{self, BmpPermissiveness, FileHeader, InfoHeader};
use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::info::ImageInfo;
use crate::limits::Limits;

/// A fully decoded BMP: both headers plus the pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBmp {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub pixels: PixelGrid,
}

impl DecodedBmp {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Drop the headers and keep the pixels.
    pub fn into_pixels(self) -> PixelGrid {
        self.pixels
    }
}

/// Builder for a decode with optional limits and validation level.
///
/// ```no_run
/// use zenbmp::{BmpPermissiveness, DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(4096 * 4096), ..Default::default() };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_permissiveness(BmpPermissiveness::Strict)
///     .decode(Unstoppable)?;
/// println!("{:?}", decoded.pixels.shape());
/// # Ok::<(), zenbmp::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Read the headers only.
    pub fn probe(&self) -> Result<ImageInfo, BmpError> {
        let (file_header, info_header) = bmp::decode_headers(self.data, self.permissiveness)?;
        Ok(ImageInfo::from_headers(&file_header, &info_header))
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodedBmp, BmpError> {
        bmp::decode(self.data, self.limits, self.permissiveness, &stop)
    }
}
