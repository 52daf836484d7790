/// Camera: perspective projection plus look-at view.
///
/// Game code mutates the setup every frame; passes read the matrices once per
/// frame after `update()`.

use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::engine_warn;

/// Projection and view parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSetup {
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    /// Width / height
    pub aspect_ratio: f32,
    pub near_plane_distance: f32,
    pub far_plane_distance: f32,

    pub camera_position: Vec3,
    /// Forward direction, need not be normalized
    pub camera_direction: Vec3,
    /// Up hint, need not be orthogonal to the direction
    pub camera_up: Vec3,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            aspect_ratio: 1280.0 / 720.0,
            near_plane_distance: 1.0,
            far_plane_distance: 100_000.0,
            camera_position: Vec3::new(0.0, 0.0, -600.0),
            camera_direction: Vec3::new(0.0, 0.0, 1.0),
            camera_up: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl CameraSetup {
    /// far > near > 0 and aspect > 0
    pub fn is_valid(&self) -> bool {
        self.near_plane_distance > 0.0
            && self.far_plane_distance > self.near_plane_distance
            && self.aspect_ratio > 0.0
    }
}

/// Perspective camera with memoized matrices
///
/// Matrices reflect the setup as of the last `update()`. Setters only mark the
/// camera dirty; `update()` recomputes when something changed.
#[derive(Debug, Clone)]
pub struct Camera {
    setup: CameraSetup,
    projection_matrix: Mat4,
    view_matrix: Mat4,
    view_projection_inverse: Mat4,
    dirty: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSetup::default())
    }
}

impl Camera {
    /// Create a camera and compute its matrices immediately
    pub fn new(setup: CameraSetup) -> Self {
        let mut camera = Self {
            setup,
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            view_projection_inverse: Mat4::IDENTITY,
            dirty: true,
        };
        camera.update();
        camera
    }

    /// Recompute projection, view and inverse view-projection if the setup changed
    ///
    /// Returns true when the matrices were rebuilt.
    pub fn update(&mut self) -> bool {
        if !self.dirty {
            return false;
        }

        let setup = &self.setup;
        if !setup.is_valid() {
            engine_warn!("shatter::Camera",
                "Invalid projection setup (aspect {}, near {}, far {})",
                setup.aspect_ratio, setup.near_plane_distance, setup.far_plane_distance);
        }
        if setup.camera_direction.cross(setup.camera_up).length_squared() <= f32::EPSILON {
            engine_warn!("shatter::Camera",
                "Camera direction {:?} is zero or parallel to up {:?}",
                setup.camera_direction, setup.camera_up);
        }

        self.projection_matrix = Mat4::perspective_rh_gl(
            setup.field_of_view.to_radians(),
            setup.aspect_ratio,
            setup.near_plane_distance,
            setup.far_plane_distance,
        );
        self.view_matrix = Mat4::look_at_rh(
            setup.camera_position,
            setup.camera_position + setup.camera_direction,
            setup.camera_up,
        );
        self.view_projection_inverse = (self.projection_matrix * self.view_matrix).inverse();
        self.dirty = false;
        true
    }

    // ===== SETTERS =====

    pub fn setup(&self) -> &CameraSetup {
        &self.setup
    }

    pub fn set_setup(&mut self, setup: CameraSetup) {
        self.setup = setup;
        self.dirty = true;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.setup.camera_position = position;
        self.dirty = true;
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.setup.camera_direction = direction;
        self.dirty = true;
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.setup.camera_up = up;
        self.dirty = true;
    }

    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.setup.field_of_view = degrees;
        self.dirty = true;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.setup.aspect_ratio = aspect_ratio;
        self.dirty = true;
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.setup.near_plane_distance = near;
        self.setup.far_plane_distance = far;
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.setup.camera_position
    }

    pub fn direction(&self) -> Vec3 {
        self.setup.camera_direction
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Inverse of projection * view, for screen-to-world conversions
    pub fn view_projection_inverse(&self) -> &Mat4 {
        &self.view_projection_inverse
    }

    /// Unproject a screen position (pixels, origin top-left) to world space
    ///
    /// `depth` is in normalized device coordinates: -1 on the near plane, 1 on
    /// the far plane.
    pub fn screen_to_world(&self, screen: Vec2, viewport_size: Vec2, depth: f32) -> Vec3 {
        let ndc = Vec4::new(
            2.0 * screen.x / viewport_size.x - 1.0,
            1.0 - 2.0 * screen.y / viewport_size.y,
            depth,
            1.0,
        );
        let world = self.view_projection_inverse * ndc;
        world.truncate() / world.w
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
