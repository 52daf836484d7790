#![allow(dead_code)]
//! Device test utilities - an in-memory GraphicsDevice for integration tests
//!
//! Integration tests only see the public API, so they cannot use the crate's
//! unit-test mock. This device implements the public traits and writes every
//! recorded command into a log shared with the test.

use shatter_engine::shatter::Result;
use shatter_engine::shatter::graphics_device::{
    Buffer, BufferDesc, ClearFlags, ColorBlendState, CommandList, CompareOp, GraphicsDevice,
    IndexType, PrimitiveTopology, Program, ProgramDesc, RenderSurface, RenderSurfaceDesc,
    Texture, TextureDesc, TextureInfo, UniformValue, VertexLayout, Viewport,
};
use std::sync::{Arc, Mutex};

pub type CommandLog = Arc<Mutex<Vec<String>>>;

struct RecordedBuffer {
    size: u64,
}

impl Buffer for RecordedBuffer {
    fn size(&self) -> u64 {
        self.size
    }

    fn update(&self, _offset: u64, _data: &[u8]) -> Result<()> {
        Ok(())
    }
}

struct RecordedTexture {
    info: TextureInfo,
}

impl Texture for RecordedTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

/// Active uniforms are the names declared with `uniform <type> <name>;`
struct RecordedProgram {
    uniforms: Vec<String>,
}

impl Program for RecordedProgram {
    fn uniform_location(&self, name: &str) -> Option<u32> {
        self.uniforms.iter().position(|u| u == name).map(|i| i as u32)
    }
}

struct RecordedSurface {
    width: u32,
    height: u32,
}

impl RenderSurface for RecordedSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

struct RecordingCommandList {
    log: CommandLog,
}

impl RecordingCommandList {
    fn push(&self, command: String) -> Result<()> {
        self.log.lock().unwrap().push(command);
        Ok(())
    }
}

impl CommandList for RecordingCommandList {
    fn begin(&mut self) -> Result<()> {
        self.push("begin".to_string())
    }

    fn end(&mut self) -> Result<()> {
        self.push("end".to_string())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.push(format!("viewport {}x{}", viewport.width, viewport.height))
    }

    fn clear(&mut self, _flags: ClearFlags, _color: [f32; 4], _depth: f32, _stencil: u32) -> Result<()> {
        self.push("clear".to_string())
    }

    fn push_render_surface(&mut self, surface: &Arc<dyn RenderSurface>) -> Result<()> {
        self.push(format!("push_surface {}x{}", surface.width(), surface.height()))
    }

    fn pop_render_surface(&mut self) -> Result<()> {
        self.push("pop_surface".to_string())
    }

    fn bind_program(&mut self, _program: &Arc<dyn Program>) -> Result<()> {
        self.push("bind_program".to_string())
    }

    fn set_uniform(&mut self, location: u32, _value: UniformValue) -> Result<()> {
        self.push(format!("uniform {}", location))
    }

    fn set_blend_state(&mut self, state: ColorBlendState) -> Result<()> {
        self.push(format!("blend {}", state.blend_enable))
    }

    fn set_depth_write(&mut self, enabled: bool) -> Result<()> {
        self.push(format!("depth_write {}", enabled))
    }

    fn set_depth_compare(&mut self, op: CompareOp) -> Result<()> {
        self.push(format!("depth_compare {:?}", op))
    }

    fn bind_texture(&mut self, slot: u32, _texture: &Arc<dyn Texture>) -> Result<()> {
        self.push(format!("bind_texture {}", slot))
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64) -> Result<()> {
        self.push("bind_vertex_buffer".to_string())
    }

    fn bind_index_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64, _index_type: IndexType) -> Result<()> {
        self.push("bind_index_buffer".to_string())
    }

    fn set_vertex_layout(&mut self, _layout: &VertexLayout) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, topology: PrimitiveTopology, vertex_count: u32, _first_vertex: u32) -> Result<()> {
        self.push(format!("draw {:?} {}", topology, vertex_count))
    }

    fn draw_indexed(&mut self, topology: PrimitiveTopology, index_count: u32, _first_index: u32, _vertex_offset: i32) -> Result<()> {
        self.push(format!("draw_indexed {:?} {}", topology, index_count))
    }
}

/// GraphicsDevice whose command lists all record into one shared log
#[derive(Default)]
pub struct RecordingDevice {
    pub log: CommandLog,
    pub surfaces: usize,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_buffer(&mut self, desc: BufferDesc, _data: &[u8]) -> Result<Arc<dyn Buffer>> {
        Ok(Arc::new(RecordedBuffer { size: desc.size }))
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        Ok(Arc::new(RecordedTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                filter: desc.filter,
            },
        }))
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn Program>> {
        let uniforms = [&desc.vertex_source, &desc.fragment_source]
            .iter()
            .flat_map(|source| source.lines())
            .filter_map(|line| {
                let mut words = line.split_whitespace();
                match words.next() {
                    Some("uniform") => words.nth(1).map(|name| name.trim_end_matches(';').to_string()),
                    _ => None,
                }
            })
            .collect();
        Ok(Arc::new(RecordedProgram { uniforms }))
    }

    fn create_render_surface(&mut self, desc: &RenderSurfaceDesc) -> Result<Arc<dyn RenderSurface>> {
        self.surfaces += 1;
        Ok(Arc::new(RecordedSurface { width: desc.width, height: desc.height }))
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(RecordingCommandList { log: self.log.clone() }))
    }

    fn submit(&self, _commands: &[&dyn CommandList]) -> Result<()> {
        self.log.lock().unwrap().push("submit".to_string());
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Number of entries of `log` equal to `command`
pub fn count(log: &CommandLog, command: &str) -> usize {
    log.lock().unwrap().iter().filter(|entry| *entry == command).count()
}
