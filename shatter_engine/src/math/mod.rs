/// Math helpers built on glam: lazily evaluated transforms and bounding boxes

pub mod transform;
pub mod aabb;

pub use transform::*;
pub use aabb::*;
