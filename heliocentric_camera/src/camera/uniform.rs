/// CameraUniform — GPU-ready snapshot of a camera's matrices.
///
/// Layout (std140 compatible, 208 bytes):
///   0: view (Mat4), 64: projection (Mat4), 128: viewProjection (Mat4),
///   192: position (Vec4, w = 1)

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// World-to-camera matrix
    pub view: Mat4,
    /// Camera-to-clip matrix
    pub projection: Mat4,
    /// projection * view
    pub view_projection: Mat4,
    /// Camera position in world space
    pub position: Vec4,
}

impl CameraUniform {
    /// Size of the uniform in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub fn new(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            view,
            projection,
            view_projection: projection * view,
            position: position.extend(1.0),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
