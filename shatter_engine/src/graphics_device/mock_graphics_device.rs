/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Resources remember how they were created and command lists record every
/// command as a string, so tests can count state changes.

use std::sync::{Arc, Mutex};

use crate::graphics_device::{
    GraphicsDevice, Buffer, Texture, Program, RenderSurface, CommandList,
    BufferDesc, TextureDesc, TextureInfo, ProgramDesc, RenderSurfaceDesc,
    Viewport, ClearFlags, UniformValue, IndexType, PrimitiveTopology,
    VertexLayout, CompareOp, ColorBlendState,
};
use crate::error::{Error, Result};
use crate::engine_bail;

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub size: u64,
    pub name: String,
    pub contents: Mutex<Vec<u8>>,
}

impl MockBuffer {
    pub fn new(size: u64, name: String, data: &[u8]) -> Self {
        Self { size, name, contents: Mutex::new(data.to_vec()) }
    }
}

impl Buffer for MockBuffer {
    fn size(&self) -> u64 {
        self.size
    }

    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let end = offset + data.len() as u64;
        if end > self.size {
            engine_bail!("shatter::mock",
                "update of {} bytes at {} overflows buffer of {} bytes",
                data.len(), offset, self.size);
        }
        let mut contents = self.contents.lock().unwrap();
        if contents.len() < end as usize {
            contents.resize(end as usize, 0);
        }
        contents[offset as usize..end as usize].copy_from_slice(data);
        Ok(())
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
    pub name: String,
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock Program
// ============================================================================

/// Program whose active uniforms are the `uniform <type> <name>;` declarations
/// of its sources, in declaration order
#[derive(Debug)]
pub struct MockProgram {
    pub label: String,
    pub uniforms: Vec<String>,
}

impl MockProgram {
    pub fn new(label: &str, uniforms: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            uniforms: uniforms.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn from_sources(label: &str, sources: &[&str]) -> Self {
        let mut uniforms: Vec<String> = Vec::new();
        for source in sources {
            for line in source.lines() {
                let mut words = line.split_whitespace();
                if words.next() != Some("uniform") {
                    continue;
                }
                let name = words.nth(1).unwrap_or("");
                let name = name.trim_end_matches(';');
                let name = name.split('[').next().unwrap_or("");
                if !name.is_empty() && !uniforms.iter().any(|u| u == name) {
                    uniforms.push(name.to_string());
                }
            }
        }
        Self { label: label.to_string(), uniforms }
    }
}

impl Program for MockProgram {
    fn uniform_location(&self, name: &str) -> Option<u32> {
        self.uniforms.iter().position(|u| u == name).map(|i| i as u32)
    }
}

// ============================================================================
// Mock RenderSurface
// ============================================================================

#[derive(Debug)]
pub struct MockRenderSurface {
    pub width: u32,
    pub height: u32,
}

impl RenderSurface for MockRenderSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

#[derive(Debug, Default)]
pub struct MockCommandList {
    pub commands: Vec<String>,
    /// Every uniform upload, in order
    pub uniforms: Vec<(u32, UniformValue)>,
    /// Make `draw` and `draw_indexed` fail
    pub fail_draws: bool,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded commands starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Value of the last upload to `location`
    pub fn last_uniform(&self, location: u32) -> Option<UniformValue> {
        self.uniforms.iter().rev().find(|(l, _)| *l == location).map(|(_, v)| *v)
    }
}

impl CommandList for MockCommandList {
    fn begin(&mut self) -> Result<()> {
        self.commands.push("begin".to_string());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.commands.push("end".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands.push(format!("set_viewport({}x{})", viewport.width, viewport.height));
        Ok(())
    }

    fn clear(&mut self, flags: ClearFlags, _color: [f32; 4], _depth: f32, _stencil: u32) -> Result<()> {
        self.commands.push(format!("clear({})", flags.bits()));
        Ok(())
    }

    fn push_render_surface(&mut self, surface: &Arc<dyn RenderSurface>) -> Result<()> {
        self.commands.push(format!("push_render_surface({}x{})", surface.width(), surface.height()));
        Ok(())
    }

    fn pop_render_surface(&mut self) -> Result<()> {
        self.commands.push("pop_render_surface".to_string());
        Ok(())
    }

    fn bind_program(&mut self, _program: &Arc<dyn Program>) -> Result<()> {
        self.commands.push("bind_program".to_string());
        Ok(())
    }

    fn set_uniform(&mut self, location: u32, value: UniformValue) -> Result<()> {
        self.commands.push(format!("set_uniform({})", location));
        self.uniforms.push((location, value));
        Ok(())
    }

    fn set_blend_state(&mut self, state: ColorBlendState) -> Result<()> {
        if state.blend_enable {
            self.commands.push(format!(
                "set_blend_state({:?}, {:?})",
                state.src_color_factor, state.dst_color_factor
            ));
        } else {
            self.commands.push("set_blend_state(disabled)".to_string());
        }
        Ok(())
    }

    fn set_depth_write(&mut self, enabled: bool) -> Result<()> {
        self.commands.push(format!("set_depth_write({})", enabled));
        Ok(())
    }

    fn set_depth_compare(&mut self, op: CompareOp) -> Result<()> {
        self.commands.push(format!("set_depth_compare({:?})", op));
        Ok(())
    }

    fn bind_texture(&mut self, slot: u32, _texture: &Arc<dyn Texture>) -> Result<()> {
        self.commands.push(format!("bind_texture({})", slot));
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64) -> Result<()> {
        self.commands.push("bind_vertex_buffer".to_string());
        Ok(())
    }

    fn bind_index_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64, index_type: IndexType) -> Result<()> {
        self.commands.push(format!("bind_index_buffer({:?})", index_type));
        Ok(())
    }

    fn set_vertex_layout(&mut self, layout: &VertexLayout) -> Result<()> {
        self.commands.push(format!("set_vertex_layout({})", layout.attributes.len()));
        Ok(())
    }

    fn draw(&mut self, topology: PrimitiveTopology, vertex_count: u32, _first_vertex: u32) -> Result<()> {
        if self.fail_draws {
            engine_bail!("shatter::mock", "draw disabled");
        }
        self.commands.push(format!("draw({:?}, {})", topology, vertex_count));
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        _first_index: u32,
        _vertex_offset: i32,
    ) -> Result<()> {
        if self.fail_draws {
            engine_bail!("shatter::mock", "draw disabled");
        }
        self.commands.push(format!("draw_indexed({:?}, {})", topology, index_count));
        Ok(())
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock GraphicsDevice that tracks created resources without GPU
#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    /// Track created buffers
    pub created_buffers: Arc<Mutex<Vec<String>>>,
    /// Track created textures
    pub created_textures: Arc<Mutex<Vec<String>>>,
    /// Track created programs
    pub created_programs: Arc<Mutex<Vec<String>>>,
    /// Track created render surfaces
    pub created_surfaces: Arc<Mutex<Vec<String>>>,
    /// Number of submitted command lists
    pub submitted: Arc<Mutex<usize>>,
    /// Last size passed to resize()
    pub size: (u32, u32),
    /// Make every buffer creation fail
    pub fail_buffers: bool,
    /// Make every render surface creation fail
    pub fail_surfaces: bool,
}

impl MockGraphicsDevice {
    /// Create a new mock graphics device
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_created_buffers(&self) -> Vec<String> {
        self.created_buffers.lock().unwrap().clone()
    }

    pub fn get_created_textures(&self) -> Vec<String> {
        self.created_textures.lock().unwrap().clone()
    }

    pub fn get_created_programs(&self) -> Vec<String> {
        self.created_programs.lock().unwrap().clone()
    }

    pub fn get_created_surfaces(&self) -> Vec<String> {
        self.created_surfaces.lock().unwrap().clone()
    }

    pub fn submitted_count(&self) -> usize {
        *self.submitted.lock().unwrap()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Result<Arc<dyn Buffer>> {
        if self.fail_buffers {
            return Err(Error::OutOfMemory);
        }
        let name = format!("buffer_{:?}_{}", desc.usage, desc.size);
        self.created_buffers.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockBuffer::new(desc.size, name, data)))
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let name = format!("texture_{}x{}", desc.width, desc.height);
        self.created_textures.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                filter: desc.filter,
            },
            name,
        }))
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn Program>> {
        for source in [&desc.vertex_source, &desc.fragment_source] {
            if source.trim().is_empty() || source.contains("#error") {
                return Err(Error::ShaderCompilation(format!("{}: mock compile error", desc.label)));
            }
        }
        self.created_programs.lock().unwrap().push(desc.label.clone());
        Ok(Arc::new(MockProgram::from_sources(
            &desc.label,
            &[desc.vertex_source.as_str(), desc.fragment_source.as_str()],
        )))
    }

    fn create_render_surface(&mut self, desc: &RenderSurfaceDesc) -> Result<Arc<dyn RenderSurface>> {
        if self.fail_surfaces {
            engine_bail!("shatter::mock", "render surface creation disabled");
        }
        self.created_surfaces.lock().unwrap().push(format!("surface_{}x{}", desc.width, desc.height));
        Ok(Arc::new(MockRenderSurface { width: desc.width, height: desc.height }))
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(MockCommandList::new()))
    }

    fn submit(&self, commands: &[&dyn CommandList]) -> Result<()> {
        *self.submitted.lock().unwrap() += commands.len();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
