/// CameraConfig — validated construction parameters for a Camera.
///
/// The camera's own setters accept anything and let the matrices degenerate.
/// CameraConfig is the checked entry point: `validate()` rejects parameters
/// that would produce a degenerate projection before a Camera is built.

use crate::error::{Error, Result};

/// Default near clip plane distance
pub const DEFAULT_Z_NEAR: f32 = 0.001;
/// Default far clip plane distance
pub const DEFAULT_Z_FAR: f32 = 100.0;
/// Default frustum scale (90° field of view)
pub const DEFAULT_FRUSTUM_SCALE: f32 = 1.0;

/// Projection parameters used to build a Camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Near clip plane distance
    pub z_near: f32,
    /// Far clip plane distance
    pub z_far: f32,
    /// Frustum scale, ignored when `fov_degrees` is set
    pub frustum_scale: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
            frustum_scale: DEFAULT_FRUSTUM_SCALE,
            fov_degrees: None,
        }
    }
}

impl CameraConfig {
    pub fn with_ranges(mut self, z_near: f32, z_far: f32) -> Self {
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }

    /// Set the frustum scale directly. Clears any field of view set earlier.
    pub fn with_frustum_scale(mut self, frustum_scale: f32) -> Self {
        self.frustum_scale = frustum_scale;
        self.fov_degrees = None;
        self
    }

    /// Derive the frustum scale from a field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = Some(fov_degrees);
        self
    }

    /// Frustum scale the camera will use: derived from the FOV when one is set.
    pub fn effective_frustum_scale(&self) -> f32 {
        match self.fov_degrees {
            Some(fov) => frustum_scale_from_fov(fov),
            None => self.frustum_scale,
        }
    }

    /// Check every parameter. The first failure is logged and returned.
    pub fn validate(&self) -> Result<()> {
        validate_ranges(self.z_near, self.z_far)?;
        match self.fov_degrees {
            Some(fov) => validate_fov(fov),
            None => validate_frustum_scale(self.frustum_scale),
        }
    }
}

/// `1 / tan(fov / 2)` with `fov` in degrees
pub(crate) fn frustum_scale_from_fov(fov_degrees: f32) -> f32 {
    1.0 / (fov_degrees.to_radians() / 2.0).tan()
}

pub(crate) fn ranges_are_valid(z_near: f32, z_far: f32) -> bool {
    z_near.is_finite() && z_far.is_finite() && 0.0 < z_near && z_near < z_far
}

// ===== CHECKS (log then return) =====

fn log_and_return_error(error: Error) -> Error {
    crate::camera_error!("heliocentric::CameraConfig", "{}", error);
    error
}

pub(crate) fn validate_ranges(z_near: f32, z_far: f32) -> Result<()> {
    if ranges_are_valid(z_near, z_far) {
        Ok(())
    } else {
        Err(log_and_return_error(Error::InvalidRange(format!(
            "expected 0 < z_near < z_far, got z_near={} z_far={}",
            z_near, z_far
        ))))
    }
}

pub(crate) fn validate_frustum_scale(frustum_scale: f32) -> Result<()> {
    if frustum_scale.is_finite() && frustum_scale > 0.0 {
        Ok(())
    } else {
        Err(log_and_return_error(Error::InvalidFrustumScale(format!(
            "expected a finite positive value, got {}",
            frustum_scale
        ))))
    }
}

pub(crate) fn validate_fov(fov_degrees: f32) -> Result<()> {
    if fov_degrees > 0.0 && fov_degrees < 180.0 {
        Ok(())
    } else {
        Err(log_and_return_error(Error::InvalidFieldOfView(format!(
            "expected 0 < fov < 180 degrees, got {}",
            fov_degrees
        ))))
    }
}

pub(crate) fn validate_viewport(width: u32, height: u32) -> Result<()> {
    if width > 0 && height > 0 {
        Ok(())
    } else {
        Err(log_and_return_error(Error::InvalidViewport(format!(
            "dimensions must be non-zero, got {}x{}",
            width, height
        ))))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
