use alloc::string::String;
use enough::StopReason;

/// Errors from PGM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PgmError {
    #[error("not a binary PGM image")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input: needed {expected} pixels, got {actual}")]
    UnexpectedEof { expected: usize, actual: usize },

    #[error("pixel value {value} at ({x}, {y}) outside of range [0, {maxval}]")]
    PixelOutOfRange {
        value: i64,
        maxval: u32,
        x: usize,
        y: usize,
    },

    #[error("maximum gray value {0} exceeds 255")]
    InvalidMaxval(u32),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "image")]
    #[error("failed to decode color image {}: {source}", .path.display())]
    ColorDecode {
        path: std::path::PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl From<StopReason> for PgmError {
    fn from(r: StopReason) -> Self {
        PgmError::Cancelled(r)
    }
}
