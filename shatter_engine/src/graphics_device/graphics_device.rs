/// GraphicsDevice trait - main GPU resource factory interface

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{
    Buffer, BufferDesc, Texture, TextureDesc, Program, ProgramDesc,
    RenderSurface, RenderSurfaceDesc, CommandList,
};

/// Graphics device factory trait
///
/// Backends (OpenGL, Vulkan, ...) implement this trait. Every created resource is
/// reference counted and released when its last `Arc` is dropped, so the engine
/// never calls an explicit destroy.
pub trait GraphicsDevice: Send + Sync {
    /// Create a buffer and upload its initial contents
    ///
    /// `data` may be shorter than `desc.size`; the remainder is left undefined.
    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Result<Arc<dyn Buffer>>;

    /// Create a sampled texture from pixel data
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Compile and link a program
    ///
    /// Returns `Error::ShaderCompilation` with the backend's log on failure.
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn Program>>;

    /// Create an off-screen color (and optional depth) surface
    fn create_render_surface(&mut self, desc: &RenderSurfaceDesc) -> Result<Arc<dyn RenderSurface>>;

    /// Create a new command list for recording
    fn create_command_list(&self) -> Result<Box<dyn CommandList>>;

    /// Submit recorded command lists for execution, in order
    fn submit(&self, commands: &[&dyn CommandList]) -> Result<()>;

    /// Notify the device that the default framebuffer changed size
    fn resize(&mut self, width: u32, height: u32);
}
