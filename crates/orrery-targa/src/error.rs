use std::fmt;

use crate::header::TargaHeader;

/// A decode error from the `.tga` container.
///
/// Every variant is terminal for the decode call that produced it; no partial
/// image is ever returned alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than [`TargaHeader::SIZE`] bytes were supplied.
    TruncatedHeader,

    /// Bits-per-pixel outside the supported set {8, 24, 32}.
    UnsupportedPixelFormat {
        bits_per_pixel: u8,
    },

    /// Color-mapped (indexed) containers, and unknown data-type codes.
    UnsupportedDataType {
        code: u8,
    },

    /// The pixel stream ended before the full image was produced.
    TruncatedPixelData {
        /// Output bytes the header promised.
        expected: usize,
        /// Output bytes actually produced (or available, for raw streams).
        got: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TruncatedHeader => {
                write!(f, "tga: truncated header (need {} bytes)", TargaHeader::SIZE)
            }
            Self::UnsupportedPixelFormat { bits_per_pixel } => {
                write!(f, "tga: unsupported pixel format ({bits_per_pixel} bits per pixel)")
            }
            Self::UnsupportedDataType { code } => {
                write!(f, "tga: unsupported data type (code {code})")
            }
            Self::TruncatedPixelData { expected, got } => {
                write!(f, "tga: truncated pixel data (expected {expected} bytes, got {got})")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
