//! Error types for the valentine card core

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// A legacy-format upload could not be converted to a displayable image
    #[error("Could not convert {name}: {reason}")]
    Conversion {
        /// Original file name as uploaded
        name: String,
        /// Human-readable cause
        reason: String,
    },

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Decode(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Blocking worker panicked or was cancelled
    #[error("Worker error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CardError {
    /// Build a conversion error for the named file
    pub fn conversion(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        CardError::Conversion {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::conversion("a.heic", "unsupported brand");
        assert_eq!(format!("{}", err), "Could not convert a.heic: unsupported brand");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
