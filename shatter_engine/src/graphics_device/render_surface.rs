/// Off-screen render surface trait and descriptor

use crate::graphics_device::TextureFormat;

/// Descriptor for an off-screen color + depth surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSurfaceDesc {
    pub width: u32,
    pub height: u32,
    pub color_format: TextureFormat,
    /// Attach a depth/stencil buffer
    pub depth: bool,
}

/// Render surface resource trait
pub trait RenderSurface: Send + Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}
