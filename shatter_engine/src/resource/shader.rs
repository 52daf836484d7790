/// Shader resource: a linked GPU program plus the render state it asks for.
///
/// The shader never touches blend or depth state itself; passes read
/// `render_state()` and apply it.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::graphics_device::{CommandList, GraphicsDevice, Program, ProgramDesc, UniformValue};
use crate::render::{BlendMode, DepthMask, DepthTest, RenderState};

// ===== SOURCES =====

/// Paths of the vertex and fragment stages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// `<path>.vs` and `<path>.fs`
    pub fn from_base(path: &str) -> Self {
        Self {
            vertex: format!("{}.vs", path),
            fragment: format!("{}.fs", path),
        }
    }

    pub fn separate(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self { vertex: vertex.into(), fragment: fragment.into() }
    }

    /// Program label: the base path when both stages share one
    pub fn label(&self) -> &str {
        match (self.vertex.strip_suffix(".vs"), self.fragment.strip_suffix(".fs")) {
            (Some(vertex), Some(fragment)) if vertex == fragment => vertex,
            _ => &self.vertex,
        }
    }
}

impl From<&str> for ShaderSource {
    fn from(path: &str) -> Self {
        Self::from_base(path)
    }
}

/// Supplies shader source text by path
pub trait ShaderSourceLoader: Send + Sync {
    fn read(&self, path: &str) -> Result<String>;
}

/// Reads shader sources from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileShaderSourceLoader;

impl ShaderSourceLoader for FileShaderSourceLoader {
    fn read(&self, path: &str) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidResource(format!("{}: {}", path, e)))
    }
}

/// Shader sources embedded in the binary or generated at runtime
#[derive(Debug, Clone, Default)]
pub struct InMemoryShaderSources {
    sources: FxHashMap<String, String>,
}

impl InMemoryShaderSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the source stored under `path`
    pub fn insert(&mut self, path: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(path.into(), source.into());
    }

    pub fn with(mut self, path: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(path, source);
        self
    }
}

impl ShaderSourceLoader for InMemoryShaderSources {
    fn read(&self, path: &str) -> Result<String> {
        self.sources
            .get(path)
            .cloned()
            .ok_or_else(|| Error::InvalidResource(format!("{}: no such shader source", path)))
    }
}

// ===== SHADER =====

#[derive(Default)]
pub struct Shader {
    source: ShaderSource,
    program: Option<Arc<dyn Program>>,
    render_state: RenderState,
}

impl Shader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the program from `source`
    ///
    /// The source is remembered for `reload()` either way. On failure the
    /// previously linked program, if any, stays in use.
    pub fn load(
        &mut self,
        device: &mut dyn GraphicsDevice,
        loader: &dyn ShaderSourceLoader,
        source: impl Into<ShaderSource>,
    ) -> Result<()> {
        self.source = source.into();
        self.reload(device, loader)
    }

    /// Compile from explicitly named vertex and fragment files
    pub fn load_separate(
        &mut self,
        device: &mut dyn GraphicsDevice,
        loader: &dyn ShaderSourceLoader,
        vertex: &str,
        fragment: &str,
    ) -> Result<()> {
        self.load(device, loader, ShaderSource::separate(vertex, fragment))
    }

    /// Compile again from the stored source
    pub fn reload(&mut self, device: &mut dyn GraphicsDevice, loader: &dyn ShaderSourceLoader) -> Result<()> {
        let desc = ProgramDesc {
            label: self.source.label().to_string(),
            vertex_source: loader.read(&self.source.vertex)?,
            fragment_source: loader.read(&self.source.fragment)?,
        };
        self.program = Some(device.create_program(&desc)?);
        Ok(())
    }

    /// Bind the program and return it
    ///
    /// Callers compare the returned handle to skip redundant activations.
    pub fn activate(&self, cmd: &mut dyn CommandList) -> Result<Arc<dyn Program>> {
        let program = self.program.as_ref().ok_or_else(|| {
            Error::InvalidResource(format!("shader \"{}\" has no program", self.source.label()))
        })?;
        cmd.bind_program(program)?;
        Ok(Arc::clone(program))
    }

    /// Upload `value` if the program uses `name`; returns whether it did
    pub fn set_uniform(&self, cmd: &mut dyn CommandList, name: &str, value: UniformValue) -> Result<bool> {
        match self.uniform_location(name) {
            Some(location) => {
                cmd.set_uniform(location, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn uniform_location(&self, name: &str) -> Option<u32> {
        self.program.as_ref().and_then(|program| program.uniform_location(name))
    }

    pub fn is_loaded(&self) -> bool {
        self.program.is_some()
    }

    pub fn program(&self) -> Option<&Arc<dyn Program>> {
        self.program.as_ref()
    }

    pub fn source(&self) -> &ShaderSource {
        &self.source
    }

    // ===== RENDER STATE =====

    pub fn render_state(&self) -> RenderState {
        self.render_state
    }

    pub fn set_render_state(&mut self, render_state: RenderState) {
        self.render_state = render_state;
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.render_state.blend_mode
    }

    pub fn set_blend_mode(&mut self, blend_mode: BlendMode) {
        self.render_state.blend_mode = blend_mode;
    }

    pub fn depth_mask(&self) -> DepthMask {
        self.render_state.depth_mask
    }

    pub fn set_depth_mask(&mut self, depth_mask: DepthMask) {
        self.render_state.depth_mask = depth_mask;
    }

    pub fn depth_test(&self) -> DepthTest {
        self.render_state.depth_test
    }

    pub fn set_depth_test(&mut self, depth_test: DepthTest) {
        self.render_state.depth_test = depth_test;
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
