//! Camera module — perspective camera, its configuration, and its GPU snapshot.
//!
//! The Camera is a tool owned and driven by the caller. The crate does not
//! store or manage cameras.

mod camera;
mod config;
mod uniform;

pub use camera::{orient, Camera};
pub use config::{CameraConfig, DEFAULT_FRUSTUM_SCALE, DEFAULT_Z_FAR, DEFAULT_Z_NEAR};
pub use uniform::CameraUniform;
