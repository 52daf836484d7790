//! Resource management module
//!
//! GPU-backed meshes, shaders and textures, and the name-keyed manager that
//! owns them.

mod resource_manager;
pub mod registry;
pub mod primitive;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use resource_manager::{ResourceManager, MeshKey, ShaderKey, TextureKey};
pub use registry::NamedRegistry;
pub use primitive::{Vertex, Primitive, MeshType};
pub use mesh::{Mesh, vertex_layout};
pub use shader::{
    Shader, ShaderSource, ShaderSourceLoader,
    FileShaderSourceLoader, InMemoryShaderSources,
};
pub use texture::{Texture, TextureData, ImageFormat, FilteringMode};
