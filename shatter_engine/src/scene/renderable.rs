/// Drawable capability and the standard Renderable.
///
/// Passes only see the `Drawable` interface: which mesh, shader and textures
/// to use, where the object is and what color it has. Game code may implement
/// it on its own types (sprites, particles, ...) or use `Renderable`.

use glam::Vec4;
use crate::math::Transform;
use crate::render::DrawMode;
use crate::resource::{MeshKey, ShaderKey, TextureKey};

/// Number of texture slots of a Renderable
pub const MAX_TEXTURE_SLOTS: usize = 32;

/// Something a render pass can draw.
///
/// Keys are non-owning references into a `ResourceManager`; a key that no
/// longer resolves is treated like a missing resource.
pub trait Drawable {
    fn mesh(&self) -> Option<MeshKey>;

    fn shader(&self) -> Option<ShaderKey>;

    /// Texture bound to `slot`, `None` when empty or out of range
    fn texture(&self, slot: usize) -> Option<TextureKey>;

    fn transform(&self) -> &Transform;

    /// RGBA color uploaded as `ObjectColor`
    fn color(&self) -> Vec4;

    /// Overrides the mesh's own draw mode when set
    fn draw_mode(&self) -> Option<DrawMode> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct Renderable {
    mesh: Option<MeshKey>,
    shader: Option<ShaderKey>,
    textures: [Option<TextureKey>; MAX_TEXTURE_SLOTS],
    transform: Transform,
    color: Vec4,
    draw_mode: Option<DrawMode>,
}

impl Default for Renderable {
    fn default() -> Self {
        Self {
            mesh: None,
            shader: None,
            textures: [None; MAX_TEXTURE_SLOTS],
            transform: Transform::default(),
            color: Vec4::ONE,
            draw_mode: None,
        }
    }
}

impl Renderable {
    pub fn new(mesh: Option<MeshKey>, shader: Option<ShaderKey>) -> Self {
        Self { mesh, shader, ..Default::default() }
    }

    pub fn set_mesh(&mut self, mesh: Option<MeshKey>) {
        self.mesh = mesh;
    }

    pub fn set_shader(&mut self, shader: Option<ShaderKey>) {
        self.shader = shader;
    }

    /// Assign `slot`; returns false when the slot is out of range
    pub fn set_texture(&mut self, slot: usize, texture: Option<TextureKey>) -> bool {
        match self.textures.get_mut(slot) {
            Some(entry) => {
                *entry = texture;
                true
            }
            None => false,
        }
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    pub fn set_draw_mode(&mut self, draw_mode: Option<DrawMode>) {
        self.draw_mode = draw_mode;
    }
}

impl Drawable for Renderable {
    fn mesh(&self) -> Option<MeshKey> {
        self.mesh
    }

    fn shader(&self) -> Option<ShaderKey> {
        self.shader
    }

    fn texture(&self, slot: usize) -> Option<TextureKey> {
        self.textures.get(slot).copied().flatten()
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn color(&self) -> Vec4 {
        self.color
    }

    fn draw_mode(&self) -> Option<DrawMode> {
        self.draw_mode
    }
}

#[cfg(test)]
#[path = "renderable_tests.rs"]
mod tests;
