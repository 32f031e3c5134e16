use alloc::format;

use crate::error::BmpError;
use crate::grid::CHANNELS;

/// Caps on the image a decode is allowed to produce.
///
/// Checked against the info header before any pixel memory is allocated.
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded RGB grid in bytes, `width * height * 3`.
    ///
    /// Row padding and the input buffer do not count.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check the declared dimensions and the RGB grid they would need.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let (width, height) = (u64::from(width), u64::from(height));
        if let Some(max_width) = self.max_width.filter(|&max| width > max) {
            return Err(BmpError::LimitExceeded(format!(
                "width {width} exceeds limit {max_width}"
            )));
        }
        if let Some(max_height) = self.max_height.filter(|&max| height > max) {
            return Err(BmpError::LimitExceeded(format!(
                "height {height} exceeds limit {max_height}"
            )));
        }
        // u32 * u32 always fits in u64.
        let pixels = width * height;
        if let Some(max_pixels) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(BmpError::LimitExceeded(format!(
                "pixel count {pixels} exceeds limit {max_pixels}"
            )));
        }
        if let Some(max_bytes) = self.max_memory_bytes {
            let grid_bytes = pixels.checked_mul(CHANNELS as u64);
            if grid_bytes.is_none_or(|bytes| bytes > max_bytes) {
                return Err(BmpError::LimitExceeded(format!(
                    "{width}x{height} RGB grid exceeds memory limit {max_bytes}"
                )));
            }
        }
        Ok(())
    }
}
