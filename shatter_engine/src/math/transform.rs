/// Position / orientation / size transform with a lazily rebuilt matrix

use std::cell::Cell;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Object transform
///
/// Orientation is stored as Euler angles in degrees and applied as
/// yaw (Y) * pitch (X) * roll (Z). The 4x4 matrix is translation * rotation *
/// scale, rebuilt on the first query after any component changed.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    /// (pitch, yaw, roll) in degrees
    orientation: Vec3,
    size: Vec3,

    rotation: Cell<Quat>,
    matrix: Cell<Mat4>,
    dirty: Cell<bool>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE)
    }
}

impl Transform {
    pub fn new(position: Vec3, orientation: Vec3, size: Vec3) -> Self {
        Self {
            position,
            orientation,
            size,
            rotation: Cell::new(Quat::IDENTITY),
            matrix: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO, Vec3::ONE)
    }

    // ===== ACCESSORS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Whether the next `matrix()` call rebuilds the matrix
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty.set(true);
    }

    pub fn set_orientation(&mut self, orientation: Vec3) {
        self.orientation = orientation;
        self.dirty.set(true);
    }

    pub fn set_size(&mut self, size: Vec3) {
        self.size = size;
        self.dirty.set(true);
    }

    pub fn set(&mut self, position: Vec3, orientation: Vec3, size: Vec3) {
        self.position = position;
        self.orientation = orientation;
        self.size = size;
        self.dirty.set(true);
    }

    // ===== DERIVED VALUES =====

    /// Translation * rotation * scale
    pub fn matrix(&self) -> Mat4 {
        self.update();
        self.matrix.get()
    }

    pub fn rotation(&self) -> Quat {
        self.update();
        self.rotation.get()
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation())
    }

    /// Apply the full transform to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }

    /// Apply only the rotation
    pub fn rotate_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation() * vector
    }

    /// Apply only the scale
    pub fn scale_vector(&self, vector: Vec3) -> Vec3 {
        vector * self.size
    }

    /// Express `child` (given relative to this transform) in this transform's parent space
    pub fn combine(&self, child: &Transform) -> Transform {
        let position = self.transform_point(child.position);
        let rotation = self.rotation() * child.rotation();
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        let orientation = Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees());
        Transform::new(position, orientation, self.size * child.size)
    }

    fn update(&self) {
        if !self.dirty.get() {
            return;
        }

        let radians = Vec3::new(
            self.orientation.x.to_radians(),
            self.orientation.y.to_radians(),
            self.orientation.z.to_radians(),
        );
        let rotation = Quat::from_euler(EulerRot::YXZ, radians.y, radians.x, radians.z);

        let matrix = Mat4::from_translation(self.position)
            * Mat4::from_quat(rotation)
            * Mat4::from_scale(self.size);

        self.rotation.set(rotation);
        self.matrix.set(matrix);
        self.dirty.set(false);
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
