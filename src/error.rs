use core::fmt::Display;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting ascii art.
#[derive(Debug, Clone)]
pub enum Error {
    /// Grid access outside of the art bounds.
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Color stored for a cell is not `#` followed by six hex digits.
    InvalidColor {
        row: usize,
        col: usize,
        color: String,
    },
    /// Failed to parse color string.
    ColorParsing(String),

    /// Rows of a hex grid have different lengths.
    WidthMismatch,

    /// Image serialization failed.
    Encode(String),

    /// I/O error occurred.
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange {
                row,
                col,
                height,
                width,
            } => write!(
                f,
                "cell ({}, {}) is out of range for {}x{} art",
                row, col, width, height
            ),
            Error::InvalidColor { row, col, color } => write!(
                f,
                "invalid color '{}' for cell ({}, {}); expected #RRGGBB",
                color, row, col
            ),
            Error::ColorParsing(s) => write!(f, "failed to parse color: {}", s),
            Error::WidthMismatch => write!(f, "rows of hex grid do not match each other"),
            Error::Encode(s) => write!(f, "failed to encode image: {}", s),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
