/// Raw geometry handed to `Mesh::populate`
///
/// Asset loaders (OBJ, LM, ...) produce a `Primitive`; the built-in shapes
/// created by the renderer come from the constructors below.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use crate::render::DrawMode;

/// Interleaved vertex as uploaded to the GPU (32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;

    pub fn new(position: Vec3, tex_coord: Vec2, normal: Vec3) -> Self {
        Self { position, tex_coord, normal }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Default::default() }
    }
}

/// Buffer usage hint for a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshType {
    /// Uploaded once
    #[default]
    Static,
    /// Expected to be re-populated often
    Dynamic,
}

/// Vertex and index data of a mesh
#[derive(Debug, Clone, Default)]
pub struct Primitive {
    pub vertices: Vec<Vertex>,
    /// Empty for non-indexed meshes
    pub indices: Vec<u32>,
    /// Vertex normals are meaningful; when false they are generated
    pub has_normals: bool,
    pub draw_mode: DrawMode,
}

impl Primitive {
    /// Non-indexed triangle list from positions only
    pub fn from_positions(positions: &[Vec3]) -> Self {
        Self {
            vertices: positions.iter().copied().map(Vertex::from_position).collect(),
            ..Default::default()
        }
    }

    /// Indexed triangle list from positions only
    pub fn from_indexed_positions(positions: &[Vec3], indices: &[u32]) -> Self {
        Self {
            indices: indices.to_vec(),
            ..Self::from_positions(positions)
        }
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Unit triangle in the XY plane
    pub fn triangle() -> Self {
        Self::from_positions(&[
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
    }

    /// Quad spanning [-1, 1] in the XY plane, two triangles
    pub fn square() -> Self {
        Self::from_indexed_positions(&SQUARE_CORNERS, &[2, 1, 0, 0, 3, 2])
    }

    /// Outline of `square()` drawn as a line loop
    pub fn line_square() -> Self {
        Self::from_indexed_positions(&SQUARE_CORNERS, &[2, 1, 0, 0, 3])
            .with_draw_mode(DrawMode::LineLoop)
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }
}

// bottom-left, bottom-right, top-right, top-left
const SQUARE_CORNERS: [Vec3; 4] = [
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
];
