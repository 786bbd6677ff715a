/*!
# Heliocentric Camera

Perspective camera for the Heliocentric renderer.

This crate keeps a camera's position and orientation and derives the matrices
the rendering pipeline needs to bring world-space geometry into clip space.
Window setup, input handling and draw calls live outside: they drive a
[`Camera`](camera::Camera) and read its matrices back every frame.

## Architecture

- **Camera**: projection parameters, position/orientation, lazily cached view matrices
- **CameraConfig**: validated construction parameters
- **CameraUniform**: GPU-ready snapshot of the camera matrices
- **Logger**: pluggable logging backend used by the camera
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;

// Main heliocentric namespace module
pub mod heliocentric {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::{orient, Camera, CameraConfig, CameraUniform};

    // Logging sub-module (types and global logger control, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }
}

// Re-export math library at crate root
pub use glam;
