//! Error types for the Heliocentric camera
//!
//! The core camera operations never fail: invalid input silently degenerates
//! the matrices. These errors are only returned by the checked API
//! (`Camera::from_config`, `Camera::try_set_ranges`, `Camera::try_update_aspect`,
//! `CameraConfig::validate`).

use std::fmt;

/// Result type for Heliocentric camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Heliocentric camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Clip planes do not satisfy 0 < z_near < z_far
    InvalidRange(String),

    /// Viewport dimensions cannot produce an aspect ratio
    InvalidViewport(String),

    /// Field of view outside the open interval (0, 180) degrees
    InvalidFieldOfView(String),

    /// Frustum scale is not a finite positive number
    InvalidFrustumScale(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange(msg) => write!(f, "Invalid clip range: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidFieldOfView(msg) => write!(f, "Invalid field of view: {}", msg),
            Error::InvalidFrustumScale(msg) => write!(f, "Invalid frustum scale: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
