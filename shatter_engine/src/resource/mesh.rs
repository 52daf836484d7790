/// Mesh resource: CPU-side geometry plus the GPU buffers built from it.
///
/// A mesh is "ready" once `populate()` uploaded its buffers. `destroy()` drops
/// the buffers again and the mesh may be populated anew afterwards.

use std::sync::Arc;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::engine_warn;
use crate::graphics_device::{
    GraphicsDevice, CommandList, Buffer, BufferDesc, BufferUsage, BufferFormat,
    IndexType, VertexAttribute, VertexBinding, VertexLayout,
};
use crate::math::AABB;
use crate::render::DrawMode;
use crate::resource::primitive::{MeshType, Primitive, Vertex};

/// Shader attribute locations of the interleaved `Vertex`
pub mod attribute {
    pub const POSITION: u32 = 0;
    pub const TEXTURE_COORDINATE: u32 = 1;
    pub const NORMAL: u32 = 2;
}

/// Vertex layout shared by every mesh
pub fn vertex_layout() -> VertexLayout {
    VertexLayout {
        bindings: vec![VertexBinding { binding: 0, stride: Vertex::STRIDE }],
        attributes: vec![
            VertexAttribute {
                location: attribute::POSITION,
                binding: 0,
                format: BufferFormat::R32G32B32_SFLOAT,
                offset: 0,
            },
            VertexAttribute {
                location: attribute::TEXTURE_COORDINATE,
                binding: 0,
                format: BufferFormat::R32G32_SFLOAT,
                offset: 12,
            },
            VertexAttribute {
                location: attribute::NORMAL,
                binding: 0,
                format: BufferFormat::R32G32B32_SFLOAT,
                offset: 20,
            },
        ],
    }
}

#[derive(Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    draw_mode: DrawMode,
    mesh_type: MeshType,
    bounds: AABB,
    vertex_buffer: Option<Arc<dyn Buffer>>,
    index_buffer: Option<Arc<dyn Buffer>>,
    /// Where the geometry came from (file path, or empty for generated meshes)
    location: String,
}

impl Mesh {
    pub fn new(mesh_type: MeshType) -> Self {
        Self { mesh_type, ..Default::default() }
    }

    /// Create and populate a mesh in one step
    pub fn from_primitive(
        device: &mut dyn GraphicsDevice,
        primitive: &Primitive,
        mesh_type: MeshType,
    ) -> Result<Self> {
        let mut mesh = Self::new(mesh_type);
        mesh.populate(device, primitive)?;
        Ok(mesh)
    }

    /// Upload `primitive` to new GPU buffers
    ///
    /// Any previous buffers are released first, so a failure leaves the mesh
    /// not ready. Normals are generated when the primitive has none.
    pub fn populate(&mut self, device: &mut dyn GraphicsDevice, primitive: &Primitive) -> Result<()> {
        self.destroy();

        if primitive.vertices.is_empty() {
            return Err(Error::InvalidResource("mesh has no vertices".to_string()));
        }
        let vertex_count = primitive.vertices.len();
        if let Some(index) = primitive.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::InvalidResource(format!(
                "index {} out of range for {} vertices", index, vertex_count
            )));
        }

        let mut vertices = primitive.vertices.clone();
        if !primitive.has_normals {
            Self::generate_normals(&mut vertices, &primitive.indices, primitive.draw_mode);
        }

        let dynamic = self.mesh_type == MeshType::Dynamic;
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let vertex_buffer = device.create_buffer(
            BufferDesc { size: vertex_bytes.len() as u64, usage: BufferUsage::Vertex, dynamic },
            vertex_bytes,
        )?;
        let index_buffer = if primitive.indices.is_empty() {
            None
        } else {
            let index_bytes: &[u8] = bytemuck::cast_slice(&primitive.indices);
            Some(device.create_buffer(
                BufferDesc { size: index_bytes.len() as u64, usage: BufferUsage::Index, dynamic },
                index_bytes,
            )?)
        };

        self.bounds = AABB::from_points(vertices.iter().map(|v| v.position)).unwrap_or_default();
        self.vertices = vertices;
        self.indices = primitive.indices.clone();
        self.draw_mode = primitive.draw_mode;
        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = index_buffer;
        Ok(())
    }

    /// Replace every vertex normal with the area-weighted average of the
    /// normals of the triangles sharing it
    ///
    /// Vertices that belong to no triangle (line modes, degenerate faces)
    /// get a zero normal.
    pub fn generate_normals(vertices: &mut [Vertex], indices: &[u32], draw_mode: DrawMode) {
        let mut sums = vec![Vec3::ZERO; vertices.len()];

        let element_count = if indices.is_empty() { vertices.len() } else { indices.len() };
        let element = |i: usize| if indices.is_empty() { i } else { indices[i] as usize };

        let mut accumulate = |a: usize, b: usize, c: usize| {
            let pa = vertices[a].position;
            let face = (vertices[b].position - pa).cross(vertices[c].position - pa);
            sums[a] += face;
            sums[b] += face;
            sums[c] += face;
        };

        match draw_mode {
            DrawMode::Triangles => {
                for t in 0..element_count / 3 {
                    accumulate(element(3 * t), element(3 * t + 1), element(3 * t + 2));
                }
            }
            DrawMode::TriangleStrip => {
                for t in 0..element_count.saturating_sub(2) {
                    // Every other strip triangle has reversed winding
                    if t % 2 == 0 {
                        accumulate(element(t), element(t + 1), element(t + 2));
                    } else {
                        accumulate(element(t + 1), element(t), element(t + 2));
                    }
                }
            }
            DrawMode::Lines | DrawMode::LineStrip | DrawMode::LineLoop => {}
        }

        for (vertex, sum) in vertices.iter_mut().zip(sums) {
            vertex.normal = sum.normalize_or_zero();
        }
    }

    /// Bind the vertex/index buffers and the vertex layout
    ///
    /// Does nothing on a mesh that is not ready.
    pub fn prepare(&self, cmd: &mut dyn CommandList) -> Result<()> {
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return Ok(());
        };
        cmd.bind_vertex_buffer(vertex_buffer, 0)?;
        if let Some(index_buffer) = &self.index_buffer {
            cmd.bind_index_buffer(index_buffer, 0, IndexType::U32)?;
        }
        cmd.set_vertex_layout(&vertex_layout())
    }

    /// Issue the draw call, indexed when the mesh has an index buffer
    ///
    /// `draw_mode` overrides the stored mode. Drawing a mesh that is not ready
    /// logs a warning and records nothing.
    pub fn draw(&self, cmd: &mut dyn CommandList, draw_mode: Option<DrawMode>) -> Result<()> {
        if !self.is_ready() {
            engine_warn!("shatter::Mesh", "Attempted to draw mesh \"{}\" that is not ready", self.location);
            return Ok(());
        }

        let topology = draw_mode.unwrap_or(self.draw_mode).topology();
        if self.index_buffer.is_some() {
            cmd.draw_indexed(topology, self.indices.len() as u32, 0, 0)
        } else {
            cmd.draw(topology, self.vertices.len() as u32, 0)
        }
    }

    /// Release the GPU buffers; idempotent
    pub fn destroy(&mut self) {
        self.vertex_buffer = None;
        self.index_buffer = None;
    }

    pub fn is_ready(&self) -> bool {
        self.vertex_buffer.is_some()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, draw_mode: DrawMode) {
        self.draw_mode = draw_mode;
    }

    pub fn mesh_type(&self) -> MeshType {
        self.mesh_type
    }

    pub fn vertex_buffer(&self) -> Option<&Arc<dyn Buffer>> {
        self.vertex_buffer.as_ref()
    }

    pub fn index_buffer(&self) -> Option<&Arc<dyn Buffer>> {
        self.index_buffer.as_ref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
