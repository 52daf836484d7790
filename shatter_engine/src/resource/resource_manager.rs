/// Central resource manager for the engine.
///
/// Stores meshes, shaders and textures by case-insensitive name and hands out
/// slotmap keys. Creating a name that already exists returns the existing
/// resource unless a forced reload is requested. Creation failures are logged
/// and reported as `None`, never as a panic.

use slotmap::{new_key_type, Key};
use crate::error::Result;
use crate::{engine_info, engine_warn};
use crate::graphics_device::GraphicsDevice;
use crate::resource::mesh::Mesh;
use crate::resource::primitive::{MeshType, Primitive};
use crate::resource::registry::NamedRegistry;
use crate::resource::shader::{FileShaderSourceLoader, Shader, ShaderSource, ShaderSourceLoader};
use crate::resource::texture::{Texture, TextureData};
use crate::stats::{names, Counters};

new_key_type! {
    /// Stable key of a Mesh in the ResourceManager
    pub struct MeshKey;
    /// Stable key of a Shader in the ResourceManager
    pub struct ShaderKey;
    /// Stable key of a Texture in the ResourceManager
    pub struct TextureKey;
}

const LOG_SOURCE: &str = "shatter::ResourceManager";

pub struct ResourceManager {
    meshes: NamedRegistry<MeshKey, Mesh>,
    shaders: NamedRegistry<ShaderKey, Shader>,
    textures: NamedRegistry<TextureKey, Texture>,
    shader_loader: Box<dyn ShaderSourceLoader>,
    counters: Counters,
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceManager {
    /// Create an empty manager reading shaders from disk
    pub fn new() -> Self {
        Self::with_shader_loader(Box::new(FileShaderSourceLoader))
    }

    pub fn with_shader_loader(shader_loader: Box<dyn ShaderSourceLoader>) -> Self {
        Self {
            meshes: NamedRegistry::new(),
            shaders: NamedRegistry::new(),
            textures: NamedRegistry::new(),
            shader_loader,
            counters: Counters::new(),
        }
    }

    pub fn set_shader_loader(&mut self, shader_loader: Box<dyn ShaderSourceLoader>) {
        self.shader_loader = shader_loader;
    }

    /// Resource counts by kind (`Meshes`, `Shaders`, `Textures`)
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    // ===== MESHES =====

    pub fn create_named_mesh(
        &mut self,
        device: &mut dyn GraphicsDevice,
        name: &str,
        primitive: &Primitive,
        force_reload: bool,
    ) -> Option<MeshKey> {
        create_named(
            &mut self.meshes,
            &mut self.counters,
            ResourceKind::Mesh,
            name,
            force_reload,
            || {
                let mut mesh = Mesh::from_primitive(device, primitive, MeshType::Static)?;
                mesh.set_location(name);
                Ok(mesh)
            },
        )
    }

    /// Unnamed mesh, only reachable through the returned key
    pub fn create_anonymous_mesh(
        &mut self,
        device: &mut dyn GraphicsDevice,
        primitive: &Primitive,
        mesh_type: MeshType,
    ) -> Option<MeshKey> {
        match Mesh::from_primitive(device, primitive, mesh_type) {
            Ok(mesh) => Some(self.meshes.insert_anonymous(mesh)),
            Err(error) => {
                engine_warn!(LOG_SOURCE, "Failed to create anonymous mesh: {}", error);
                None
            }
        }
    }

    pub fn find_mesh(&self, name: &str) -> Option<MeshKey> {
        self.meshes.find(name)
    }

    pub fn mesh(&self, key: MeshKey) -> Option<&Mesh> {
        self.meshes.get(key)
    }

    pub fn mesh_mut(&mut self, key: MeshKey) -> Option<&mut Mesh> {
        self.meshes.get_mut(key)
    }

    /// Remove a mesh, releasing its GPU buffers
    pub fn remove_mesh(&mut self, key: MeshKey) -> bool {
        let named = self.meshes.name(key).is_some();
        match self.meshes.remove(key) {
            Some(mut mesh) => {
                mesh.destroy();
                if named {
                    self.counters.increment(names::MESHES, -1);
                }
                true
            }
            None => false,
        }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // ===== SHADERS =====

    /// Compile a shader from `source` and register it under `name`
    ///
    /// A forced reload of an existing shader keeps its render state.
    pub fn create_named_shader(
        &mut self,
        device: &mut dyn GraphicsDevice,
        name: &str,
        source: impl Into<ShaderSource>,
        force_reload: bool,
    ) -> Option<ShaderKey> {
        let source = source.into();
        let render_state = self
            .shaders
            .find(name)
            .and_then(|key| self.shaders.get(key))
            .map(|shader| shader.render_state())
            .unwrap_or_default();
        let loader = self.shader_loader.as_ref();

        create_named(
            &mut self.shaders,
            &mut self.counters,
            ResourceKind::Shader,
            name,
            force_reload,
            || {
                let mut shader = Shader::new();
                shader.set_render_state(render_state);
                shader.load(device, loader, source)?;
                Ok(shader)
            },
        )
    }

    pub fn find_shader(&self, name: &str) -> Option<ShaderKey> {
        self.shaders.find(name)
    }

    pub fn shader(&self, key: ShaderKey) -> Option<&Shader> {
        self.shaders.get(key)
    }

    pub fn shader_mut(&mut self, key: ShaderKey) -> Option<&mut Shader> {
        self.shaders.get_mut(key)
    }

    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Recompile every shader from its stored source
    ///
    /// Shaders that fail keep their previous program. Returns the number of
    /// shaders that were rebuilt.
    pub fn reload_shaders(&mut self, device: &mut dyn GraphicsDevice) -> usize {
        engine_info!(LOG_SOURCE, "Reloading shaders");

        let loader = self.shader_loader.as_ref();
        let mut reloaded = 0;
        for (_, name, shader) in self.shaders.iter_mut() {
            match shader.reload(device, loader) {
                Ok(()) => reloaded += 1,
                Err(error) => engine_warn!(LOG_SOURCE,
                    "Failed to reload shader \"{}\": {}", name.unwrap_or_default(), error),
            }
        }
        reloaded
    }

    // ===== TEXTURES =====

    pub fn create_named_texture(
        &mut self,
        device: &mut dyn GraphicsDevice,
        name: &str,
        data: &TextureData,
        force_reload: bool,
    ) -> Option<TextureKey> {
        create_named(
            &mut self.textures,
            &mut self.counters,
            ResourceKind::Texture,
            name,
            force_reload,
            || Texture::create(device, data),
        )
    }

    pub fn find_texture(&self, name: &str) -> Option<TextureKey> {
        self.textures.find(name)
    }

    pub fn texture(&self, key: TextureKey) -> Option<&Texture> {
        self.textures.get(key)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

// ===== SHARED CREATION PATH =====

#[derive(Debug, Clone, Copy)]
enum ResourceKind {
    Mesh,
    Shader,
    Texture,
}

impl ResourceKind {
    fn label(self) -> &'static str {
        match self {
            ResourceKind::Mesh => "mesh",
            ResourceKind::Shader => "shader",
            ResourceKind::Texture => "texture",
        }
    }

    fn counter(self) -> &'static str {
        match self {
            ResourceKind::Mesh => names::MESHES,
            ResourceKind::Shader => names::SHADERS,
            ResourceKind::Texture => names::TEXTURES,
        }
    }
}

/// Lookup-or-build shared by every resource kind
///
/// A forced reload builds the replacement before touching the registry, so
/// the existing item (and its key) survives a failed build.
fn create_named<K: Key, T>(
    registry: &mut NamedRegistry<K, T>,
    counters: &mut Counters,
    kind: ResourceKind,
    name: &str,
    force_reload: bool,
    build: impl FnOnce() -> Result<T>,
) -> Option<K> {
    let existing = registry.find(name);
    if let Some(key) = existing {
        if !force_reload {
            engine_info!(LOG_SOURCE, "Found existing {} named \"{}\"", kind.label(), name);
            return Some(key);
        }
    }

    let item = match build() {
        Ok(item) => item,
        Err(error) => {
            engine_warn!(LOG_SOURCE, "Failed to create {} \"{}\": {}", kind.label(), name, error);
            return None;
        }
    };

    match existing {
        Some(key) => {
            registry.replace(key, item);
            engine_info!(LOG_SOURCE, "Reloaded {} \"{}\"", kind.label(), name);
            Some(key)
        }
        None => {
            let key = registry.insert(name, item);
            counters.increment(kind.counter(), 1);
            engine_info!(LOG_SOURCE, "Created {} \"{}\"", kind.label(), name);
            Some(key)
        }
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
