/// Linked shader program trait, program descriptor and uniform values

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Source text for a vertex + fragment program
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Debug label (usually the shader path)
    pub label: String,
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Value uploaded to a uniform location
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// Compiled and linked GPU program
///
/// The program is automatically destroyed when the last `Arc` is dropped.
pub trait Program: Send + Sync {
    /// Location of an active uniform, `None` when the program does not use it
    fn uniform_location(&self, name: &str) -> Option<u32>;
}
