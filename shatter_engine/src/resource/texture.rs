/// Texture resource built from decoded pixel data
///
/// Image decoding belongs to the asset loaders; this type only validates the
/// pixel buffer and owns the GPU texture.

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::graphics_device::{
    CommandList, FilterMode, GraphicsDevice, TextureDesc, TextureFormat,
    Texture as GraphicsDeviceTexture,
};

/// Channel layout of decoded pixels, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    R8,
    RG8,
    RGB8,
    RGBA8,
}

impl ImageFormat {
    pub fn channels(self) -> u32 {
        match self {
            ImageFormat::R8 => 1,
            ImageFormat::RG8 => 2,
            ImageFormat::RGB8 => 3,
            ImageFormat::RGBA8 => 4,
        }
    }

    pub fn texture_format(self) -> TextureFormat {
        match self {
            ImageFormat::R8 => TextureFormat::R8_UNORM,
            ImageFormat::RG8 => TextureFormat::R8G8_UNORM,
            ImageFormat::RGB8 => TextureFormat::R8G8B8_UNORM,
            ImageFormat::RGBA8 => TextureFormat::R8G8B8A8_UNORM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilteringMode {
    Nearest,
    #[default]
    Linear,
}

impl FilteringMode {
    pub fn filter_mode(self) -> FilterMode {
        match self {
            FilteringMode::Nearest => FilterMode::Nearest,
            FilteringMode::Linear => FilterMode::Linear,
        }
    }
}

/// Decoded image, rows tightly packed
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub filtering: FilteringMode,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Image filled with a single RGBA color
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            format: ImageFormat::RGBA8,
            filtering: FilteringMode::Linear,
            pixels: rgba.repeat(pixel_count(width, height)),
        }
    }

    pub fn expected_len(&self) -> usize {
        pixel_count(self.width, self.height) * self.format.channels() as usize
    }
}

/// Widened before multiplying, sizes past 65535x65535 overflow u32
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

pub struct Texture {
    texture: Arc<dyn GraphicsDeviceTexture>,
    format: ImageFormat,
    filtering: FilteringMode,
}

impl Texture {
    pub fn create(device: &mut dyn GraphicsDevice, data: &TextureData) -> Result<Self> {
        if data.width == 0 || data.height == 0 {
            return Err(Error::InvalidResource(format!(
                "texture size {}x{} is empty", data.width, data.height
            )));
        }
        if data.pixels.len() != data.expected_len() {
            return Err(Error::InvalidResource(format!(
                "texture {}x{} {:?} needs {} bytes, got {}",
                data.width, data.height, data.format, data.expected_len(), data.pixels.len()
            )));
        }

        let texture = device.create_texture(TextureDesc {
            width: data.width,
            height: data.height,
            format: data.format.texture_format(),
            filter: data.filtering.filter_mode(),
            data: data.pixels.clone(),
        })?;

        Ok(Self { texture, format: data.format, filtering: data.filtering })
    }

    pub fn bind(&self, cmd: &mut dyn CommandList, slot: u32) -> Result<()> {
        cmd.bind_texture(slot, &self.texture)
    }

    pub fn width(&self) -> u32 {
        self.texture.info().width
    }

    pub fn height(&self) -> u32 {
        self.texture.info().height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn filtering(&self) -> FilteringMode {
        self.filtering
    }

    pub fn gpu_texture(&self) -> &Arc<dyn GraphicsDeviceTexture> {
        &self.texture
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
