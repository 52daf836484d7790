/// Axis-aligned bounding boxes

use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
///
/// Meshes store theirs in local space; passes upload the corners as
/// `ObjectBoundsMinimum` / `ObjectBoundsMaximum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for AABB {
    fn default() -> Self {
        Self { min: Vec3::ZERO, max: Vec3::ZERO }
    }
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tight box around a set of points, `None` when the set is empty
    pub fn from_points<I>(points: I) -> Option<AABB>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(AABB { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive point containment test
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Transform this AABB by a matrix, returning a new AABB.
    ///
    /// Arvo's method: projects each matrix axis onto the extents instead of
    /// transforming the eight corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let origin = matrix.col(3).truncate();
        let (min, max) = (0..3).fold((origin, origin), |(min, max), axis_index| {
            let axis = matrix.col(axis_index).truncate();
            let from_min = axis * self.min[axis_index];
            let from_max = axis * self.max[axis_index];
            (min + from_min.min(from_max), max + from_min.max(from_max))
        });
        AABB { min, max }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
