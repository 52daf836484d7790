/// Command recording: the only way the engine issues GPU work

use std::sync::Arc;
use bitflags::bitflags;
use crate::error::Result;
use crate::graphics_device::{
    Buffer, Texture, Program, RenderSurface, UniformValue,
    IndexType, PrimitiveTopology, VertexLayout, CompareOp, ColorBlendState,
};

bitflags! {
    /// Attachments affected by a clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Ordered recording of GPU work, executed by `GraphicsDevice::submit()`
///
/// Uniform uploads and draws apply to the program of the last `bind_program`;
/// blend and depth state persist until changed.
pub trait CommandList: Send + Sync {
    fn begin(&mut self) -> Result<()>;

    fn end(&mut self) -> Result<()>;

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Clear the selected attachments of the current target
    fn clear(&mut self, flags: ClearFlags, color: [f32; 4], depth: f32, stencil: u32) -> Result<()>;

    /// Redirect output to `surface` until the matching pop
    fn push_render_surface(&mut self, surface: &Arc<dyn RenderSurface>) -> Result<()>;

    fn pop_render_surface(&mut self) -> Result<()>;

    fn bind_program(&mut self, program: &Arc<dyn Program>) -> Result<()>;

    /// `location` comes from `Program::uniform_location` of the bound program
    fn set_uniform(&mut self, location: u32, value: UniformValue) -> Result<()>;

    fn set_blend_state(&mut self, state: ColorBlendState) -> Result<()>;

    fn set_depth_write(&mut self, enabled: bool) -> Result<()>;

    fn set_depth_compare(&mut self, op: CompareOp) -> Result<()>;

    /// Attach `texture` to sampler unit `slot`
    fn bind_texture(&mut self, slot: u32, texture: &Arc<dyn Texture>) -> Result<()>;

    /// `offset` is in bytes from the start of `buffer`
    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64) -> Result<()>;

    fn bind_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64, index_type: IndexType) -> Result<()>;

    fn set_vertex_layout(&mut self, layout: &VertexLayout) -> Result<()>;

    /// Non-indexed draw of `vertex_count` vertices from `first_vertex`
    fn draw(&mut self, topology: PrimitiveTopology, vertex_count: u32, first_vertex: u32) -> Result<()>;

    /// Indexed draw; `vertex_offset` is added to every fetched index
    fn draw_indexed(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        first_index: u32,
        vertex_offset: i32,
    ) -> Result<()>;
}

/// Pixel rectangle and depth range of the rasterizer output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Whole `width` x `height` target, depth 0..1
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}
