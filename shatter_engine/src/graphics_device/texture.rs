/// Sampled GPU textures

/// Pixel layouts a backend texture can store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8_UNORM,
    R8G8_UNORM,
    R8G8B8_UNORM,
    R8G8B8A8_UNORM,
    /// Depth/stencil attachments of render surfaces
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    pub fn size_bytes(&self) -> u32 {
        match self {
            TextureFormat::R8_UNORM => 1,
            TextureFormat::R8G8_UNORM => 2,
            TextureFormat::R8G8B8_UNORM => 3,
            TextureFormat::R8G8B8A8_UNORM | TextureFormat::D24_UNORM_S8_UINT => 4,
        }
    }
}

/// Minification and magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

#[derive(Debug, Clone)]
pub struct TextureDesc {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub filter: FilterMode,
    /// Rows of `width * format.size_bytes()` bytes, no padding
    pub data: Vec<u8>,
}

/// What a texture was created with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub filter: FilterMode,
}

/// Backend texture, released when the last `Arc` goes away
pub trait Texture: Send + Sync {
    fn info(&self) -> &TextureInfo;
}
