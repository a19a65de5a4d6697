//! Custom error types for geohash processing

use std::fmt;
use std::io;

/// Geohash-specific error types
#[derive(Debug)]
pub enum GeoHashError {
    /// I/O error
    IoError(io::Error),
    /// Out-of-range coordinates, precision or malformed input
    InvalidArgument(String),
    /// Operation not defined for the hash's current precision
    IllegalState(String),
    /// Two hashes that must share a precision do not
    PrecisionMismatch(u8, u8),
    /// Malformed configuration file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoHashError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoHashError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeoHashError::IllegalState(msg) => write!(f, "Illegal state: {}", msg),
            GeoHashError::PrecisionMismatch(a, b) => write!(
                f,
                "Precision mismatch: {} vs {} significant bits",
                a, b
            ),
            GeoHashError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoHashError::GenericError(msg) => write!(f, "Geohash error: {}", msg),
        }
    }
}

impl std::error::Error for GeoHashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoHashError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoHashError {
    fn from(error: io::Error) -> Self {
        GeoHashError::IoError(error)
    }
}

/// Result type for geohash operations
pub type GeoHashResult<T> = Result<T, GeoHashError>;

impl From<String> for GeoHashError {
    fn from(msg: String) -> Self {
        GeoHashError::GenericError(msg)
    }
}
