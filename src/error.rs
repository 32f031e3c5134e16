use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("read of {len} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("invalid BMP signature 0x{0:04X} (expected 0x4D42, \"BM\")")]
    InvalidSignature(u16),

    #[error("unsupported BMP format: {field} = {value}")]
    UnsupportedFormat { field: &'static str, value: i64 },

    #[error("pixel data truncated: need {needed} bytes, got {actual}")]
    TruncatedData { needed: usize, actual: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

impl BmpError {
    pub(crate) fn unsupported(field: &'static str, value: impl Into<i64>) -> Self {
        BmpError::UnsupportedFormat {
            field,
            value: value.into(),
        }
    }
}
