// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the overlay library.

use std::fmt;

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for the overlay library.
#[derive(Debug)]
pub enum OverlayError {
    /// Error decoding, encoding or processing images.
    ImageError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
    /// Font could not be located, downloaded or parsed.
    FontError(String),
    /// Body data does not match the skeleton topology.
    InvalidBody(String),
    /// Segment table references joints outside the topology.
    InvalidTopology(String),
    /// Error parsing serialized body data.
    ParseError(String),
    /// Drawing surface error.
    VisualizerError(String),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::InvalidBody(msg) => write!(f, "Invalid body: {msg}"),
            Self::InvalidTopology(msg) => write!(f, "Invalid topology: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for OverlayError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::InvalidBody("expected 32 joints, got 2".to_string());
        assert_eq!(err.to_string(), "Invalid body: expected 32 joints, got 2");

        let err = OverlayError::InvalidTopology("test".to_string());
        assert_eq!(err.to_string(), "Invalid topology: test");
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: OverlayError = err.into();
        assert!(matches!(err, OverlayError::ParseError(_)));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = OverlayError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(OverlayError::FontError("x".into()).source().is_none());
    }
}
