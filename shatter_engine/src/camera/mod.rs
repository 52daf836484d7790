//! Camera module: projection and view parameters with derived matrices.
//!
//! Cameras are plain values owned by the caller (game or world code) and
//! handed to the Renderer or to individual render passes.

mod camera;

pub use camera::{Camera, CameraSetup};
