/// Camera — perspective camera with lazily cached view matrices.
///
/// Two matrices are derived from the camera state:
/// - camera-to-clip (projection), updated eagerly by the projection setters
/// - world-to-camera (view), rebuilt on read when position or orientation changed
///
/// The Camera is owned and driven by the caller (render loop, input code).
/// It holds no references to anything else.

use std::cell::Cell;
use glam::{Mat4, Quat, Vec3};
use crate::error::Result;
use super::config::{self, CameraConfig, DEFAULT_FRUSTUM_SCALE, DEFAULT_Z_FAR, DEFAULT_Z_NEAR};
use super::uniform::CameraUniform;

const LOG_SOURCE: &str = "heliocentric::Camera";

/// Pan rotates around the world up axis
const PAN_AXIS: Vec3 = Vec3::Y;
/// Tilt rotates around -X so a positive angle looks up
const TILT_AXIS: Vec3 = Vec3::NEG_X;
const ROLL_AXIS: Vec3 = Vec3::Z;

/// Build a rotation of `angle` radians around `axis`.
///
/// The axis is used as given: pass a unit vector to get a unit quaternion.
pub fn orient(angle: f32, axis: Vec3) -> Quat {
    let (sin, cos) = (angle / 2.0).sin_cos();
    Quat::from_xyzw(axis.x * sin, axis.y * sin, axis.z * sin, cos)
}

/// Cached view state. Both flags start set so the first read computes everything.
#[derive(Debug, Clone, Copy)]
struct ViewCache {
    world_to_camera: Mat4,
    /// Rotation-only part of world_to_camera
    world_to_camera_rot: Mat4,
    pos_changed: bool,
    dir_changed: bool,
}

impl ViewCache {
    fn dirty() -> Self {
        Self {
            world_to_camera: Mat4::IDENTITY,
            world_to_camera_rot: Mat4::IDENTITY,
            pos_changed: true,
            dir_changed: true,
        }
    }
}

/// Perspective camera.
///
/// Not `Sync`: the view cache is refreshed through a `Cell` on read.
#[derive(Debug, Clone)]
pub struct Camera {
    z_near: f32,
    z_far: f32,
    frustum_scale: f32,
    position: Vec3,
    orientation: Quat,
    camera_to_clip: Mat4,
    view: Cell<ViewCache>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera with z_near = 0.001, z_far = 100 and frustum scale 1.
    pub fn new() -> Self {
        Self::with_ranges(DEFAULT_Z_NEAR, DEFAULT_Z_FAR, DEFAULT_FRUSTUM_SCALE)
    }

    /// Create a camera with explicit clip planes and frustum scale.
    ///
    /// No validation is performed (see [`Camera::from_config`]). The x/y
    /// projection entries stay zero until [`Camera::update_aspect`] is called.
    pub fn with_ranges(z_near: f32, z_far: f32, frustum_scale: f32) -> Self {
        let mut camera = Self {
            z_near,
            z_far,
            frustum_scale,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            camera_to_clip: Mat4::ZERO,
            view: Cell::new(ViewCache::dirty()),
        };
        camera.set_ranges(z_near, z_far);
        camera.set_frustum_scale(frustum_scale);
        // Perspective divide: w_clip = -z_camera
        camera.camera_to_clip.z_axis.w = -1.0;

        crate::camera_debug!(
            LOG_SOURCE,
            "Camera created (z_near={}, z_far={}, frustum_scale={})",
            z_near,
            z_far,
            frustum_scale
        );
        camera
    }

    /// Validate `config` and build a camera from it.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of [`CameraConfig::validate`].
    pub fn from_config(config: &CameraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_ranges(
            config.z_near,
            config.z_far,
            config.effective_frustum_scale(),
        ))
    }

    // ===== PROJECTION =====

    /// Set the clip planes and update the depth entries of the projection.
    ///
    /// Invalid ranges (z_near == z_far, non-positive planes) are accepted and
    /// produce a degenerate projection; a warning is logged.
    pub fn set_ranges(&mut self, z_near: f32, z_far: f32) {
        if !config::ranges_are_valid(z_near, z_far) {
            crate::camera_warn!(
                LOG_SOURCE,
                "Degenerate clip range z_near={} z_far={}",
                z_near,
                z_far
            );
        }
        self.z_near = z_near;
        self.z_far = z_far;
        self.camera_to_clip.z_axis.z = (z_far + z_near) / (z_near - z_far);
        self.camera_to_clip.w_axis.z = (2.0 * z_far * z_near) / (z_near - z_far);
    }

    /// Checked [`Camera::set_ranges`]: the camera is left untouched on error.
    pub fn try_set_ranges(&mut self, z_near: f32, z_far: f32) -> Result<()> {
        config::validate_ranges(z_near, z_far)?;
        self.set_ranges(z_near, z_far);
        Ok(())
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Store the frustum scale. Takes effect on the next `update_aspect`.
    pub fn set_frustum_scale(&mut self, frustum_scale: f32) {
        self.frustum_scale = frustum_scale;
    }

    pub fn frustum_scale(&self) -> f32 {
        self.frustum_scale
    }

    /// Set the frustum scale from a field of view in degrees.
    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.set_frustum_scale(config::frustum_scale_from_fov(fov_degrees));
    }

    /// Apply the frustum scale and the viewport aspect ratio to the projection.
    ///
    /// Must be called whenever the output size changes. A zero width yields
    /// non-finite entries; a warning is logged.
    pub fn update_aspect(&mut self, width: u32, height: u32) {
        if width == 0 {
            crate::camera_warn!(LOG_SOURCE, "Zero-width viewport ({}x{})", width, height);
        }
        self.camera_to_clip.x_axis.x = self.frustum_scale * (height as f32 / width as f32);
        self.camera_to_clip.y_axis.y = self.frustum_scale;
    }

    /// Checked [`Camera::update_aspect`]: rejects zero dimensions.
    pub fn try_update_aspect(&mut self, width: u32, height: u32) -> Result<()> {
        config::validate_viewport(width, height)?;
        self.update_aspect(width, height);
        Ok(())
    }

    /// Projection matrix. Always current.
    pub fn camera_to_clip_matrix(&self) -> Mat4 {
        self.camera_to_clip
    }

    // ===== POSITION =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.view.get_mut().pos_changed = true;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Translate in world space.
    pub fn move_by(&mut self, translation: Vec3) {
        self.set_position(self.position + translation);
    }

    pub fn move_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.move_by(Vec3::new(x, y, z));
    }

    /// Translate in camera space (x = right, y = up, -z = forward).
    ///
    /// The rotation cache is refreshed first, so the move always follows the
    /// current orientation even if no matrix was read since the last turn.
    pub fn move_relative(&mut self, translation: Vec3) {
        let rotation = self.refresh_view().world_to_camera_rot;
        // Orthonormal: the transpose is the inverse
        self.move_by(rotation.transpose().transform_vector3(translation));
    }

    pub fn move_relative_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.move_relative(Vec3::new(x, y, z));
    }

    // ===== ORIENTATION =====

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn reset_orientation(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.view.get_mut().dir_changed = true;
    }

    /// Rotate around the world Y axis.
    pub fn pan(&mut self, angle: f32) {
        self.rotate(angle, PAN_AXIS);
    }

    pub fn tilt(&mut self, angle: f32) {
        self.rotate(angle, TILT_AXIS);
    }

    pub fn roll(&mut self, angle: f32) {
        self.rotate(angle, ROLL_AXIS);
    }

    fn rotate(&mut self, angle: f32, axis: Vec3) {
        // Renormalize to stop drift from repeated composition
        self.orientation = (orient(angle, axis) * self.orientation).normalize();
        self.view.get_mut().dir_changed = true;
    }

    // ===== VIEW MATRICES =====

    /// Bring the view cache up to date and return it.
    fn refresh_view(&self) -> ViewCache {
        let mut view = self.view.get();
        if view.pos_changed || view.dir_changed {
            if view.dir_changed {
                view.world_to_camera_rot = Mat4::from_quat(self.orientation);
            }
            view.world_to_camera =
                view.world_to_camera_rot * Mat4::from_translation(-self.position);
            view.pos_changed = false;
            view.dir_changed = false;
            self.view.set(view);
        }
        view
    }

    /// View matrix, recomputed only if position or orientation changed.
    pub fn world_to_camera_matrix(&self) -> Mat4 {
        self.refresh_view().world_to_camera
    }

    /// `camera_to_clip * world_to_camera`: clip = proj · view · world_point.
    pub fn world_to_clip_matrix(&self) -> Mat4 {
        self.camera_to_clip_matrix() * self.world_to_camera_matrix()
    }

    /// Snapshot of the current matrices, ready for a uniform buffer upload.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(
            self.world_to_camera_matrix(),
            self.camera_to_clip_matrix(),
            self.position,
        )
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
