/// Frame-level renderer: queues, active camera and the default pass.
///
/// The renderer owns the resource manager and a handle to the graphics
/// device. Game code queues drawables every frame, calls `render_frame()`
/// and then `refresh_frame()` before the next frame.

use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::camera::{Camera, CameraSetup};
use crate::error::{Error, Result};
use crate::{engine_err, engine_warn};
use crate::graphics_device::{CommandList, GraphicsDevice, UniformValue, Viewport};
use crate::render::render_pass::uniforms;
use crate::render::{PassContext, RenderPass};
use crate::resource::{MeshKey, MeshType, Primitive, ResourceManager, ShaderSource};
use crate::scene::Drawable;
use crate::stats::{names, Counters};

/// Name of the shader used by drawables that have none
pub const DEFAULT_SHADER: &str = "default";

const LOG_SOURCE: &str = "shatter::Renderer";

// ===== CONFIG =====

/// Renderer startup settings
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Base path of the default shader (`<path>.vs` / `<path>.fs`)
    pub default_shader_path: String,
    /// Initial capacity of the persistent queue
    pub renderable_capacity: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 720,
            default_shader_path: "Shaders/default".to_string(),
            renderable_capacity: 512,
        }
    }
}

impl RendererConfig {
    pub fn validate(&self) -> Result<()> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(Error::InitializationFailed(format!(
                "viewport size {}x{} is empty", self.viewport_width, self.viewport_height
            )));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.viewport_width as f32 / self.viewport_height as f32
    }
}

// ===== RENDERER =====

pub struct Renderer {
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    resources: ResourceManager,
    config: RendererConfig,

    camera: Camera,
    /// Priority of the camera set this frame through `set_active_camera`
    camera_priority: Option<u32>,

    /// Re-populated by the caller every frame
    renderables: Vec<Rc<dyn Drawable>>,
    /// Owned by the renderer, dropped by `refresh_frame`
    dynamic_renderables: Vec<Box<dyn Drawable>>,
    temporary_meshes: Vec<MeshKey>,

    counters: Counters,
}

impl Renderer {
    pub fn new(graphics_device: Arc<Mutex<dyn GraphicsDevice>>, config: RendererConfig) -> Result<Self> {
        Self::with_resources(graphics_device, config, ResourceManager::new())
    }

    /// Use an existing resource manager (custom shader loader, preloaded assets)
    pub fn with_resources(
        graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
        config: RendererConfig,
        resources: ResourceManager,
    ) -> Result<Self> {
        config.validate()?;
        let camera = Camera::new(CameraSetup {
            aspect_ratio: config.aspect_ratio(),
            ..CameraSetup::default()
        });
        Ok(Self {
            graphics_device,
            resources,
            camera,
            camera_priority: None,
            renderables: Vec::with_capacity(config.renderable_capacity),
            dynamic_renderables: Vec::new(),
            temporary_meshes: Vec::new(),
            counters: Counters::new(),
            config,
        })
    }

    /// Create the default shader and the built-in meshes
    ///
    /// `triangle`, `square` and `linesquare` (a line loop around the square).
    /// Failures are logged by the resource manager and do not abort startup.
    pub fn initialize(&mut self) -> Result<()> {
        let mut device = lock(&self.graphics_device)?;
        let device = &mut *device;

        let source = ShaderSource::from_base(&self.config.default_shader_path);
        if self.resources.create_named_shader(device, DEFAULT_SHADER, source, false).is_none() {
            engine_warn!(LOG_SOURCE, "Default shader unavailable, drawables without a shader will be skipped");
        }
        self.resources.create_named_mesh(device, "triangle", &Primitive::triangle(), false);
        self.resources.create_named_mesh(device, "square", &Primitive::square(), false);
        self.resources.create_named_mesh(device, "linesquare", &Primitive::line_square(), false);
        Ok(())
    }

    // ===== QUEUES =====

    pub fn queue_renderable(&mut self, drawable: Rc<dyn Drawable>) {
        self.renderables.push(drawable);
    }

    /// Queue a drawable owned by the renderer until the next `refresh_frame`
    pub fn queue_dynamic_renderable(&mut self, drawable: Box<dyn Drawable>) {
        self.dynamic_renderables.push(drawable);
    }

    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    pub fn dynamic_renderable_count(&self) -> usize {
        self.dynamic_renderables.len()
    }

    /// Start a new frame: empty both queues, release temporary meshes and
    /// forget this frame's camera priority
    pub fn refresh_frame(&mut self) {
        self.renderables.clear();
        self.dynamic_renderables.clear();
        for key in self.temporary_meshes.drain(..) {
            self.resources.remove_mesh(key);
        }
        self.camera_priority = None;
    }

    /// Unnamed mesh released by the next `refresh_frame`
    pub fn create_temporary_mesh(&mut self, primitive: &Primitive) -> Result<Option<MeshKey>> {
        let mut device = lock(&self.graphics_device)?;
        let key = self.resources.create_anonymous_mesh(&mut *device, primitive, MeshType::Dynamic);
        if let Some(key) = key {
            self.temporary_meshes.push(key);
        }
        Ok(key)
    }

    // ===== CAMERA =====

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Replace the camera regardless of priority
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Offer a camera for this frame
    ///
    /// The highest priority wins; on a tie the latest call wins. Returns
    /// whether the camera was taken.
    pub fn set_active_camera(&mut self, camera: Camera, priority: u32) -> bool {
        if self.camera_priority.is_some_and(|current| priority < current) {
            return false;
        }
        self.camera = camera;
        self.camera_priority = Some(priority);
        true
    }

    // ===== RESOURCES =====

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourceManager {
        &mut self.resources
    }

    pub fn mesh_count(&self) -> usize {
        self.resources.mesh_count()
    }

    /// Recompile every shader; returns how many succeeded
    pub fn reload_shaders(&mut self) -> Result<usize> {
        let mut device = lock(&self.graphics_device)?;
        Ok(self.resources.reload_shaders(&mut *device))
    }

    pub fn graphics_device(&self) -> &Arc<Mutex<dyn GraphicsDevice>> {
        &self.graphics_device
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Per-frame counters: `Draw Calls` (whole frame after `render_frame`),
    /// `Renderables`, `Renderables (Dynamic)`
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Follow a window resize: device, viewport and camera aspect
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        lock(&self.graphics_device)?.resize(width, height);
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.camera.set_aspect_ratio(self.config.aspect_ratio());
        Ok(())
    }

    // ===== DRAWING =====

    fn queued(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.renderables
            .iter()
            .map(|drawable| drawable.as_ref())
            .chain(self.dynamic_renderables.iter().map(|drawable| drawable.as_ref()))
    }

    /// Default full-screen opaque pass over both queues
    ///
    /// Every queued drawable is drawn with the `default` shader, blending
    /// off, uploading `ModelViewProjection`, `Model` and `ObjectColor`.
    /// Drawable shaders and their render state only apply in a `RenderPass`.
    pub fn draw_queued_renderables(&mut self, cmd: &mut dyn CommandList) -> Result<u32> {
        self.camera.update();
        self.counters.set(names::RENDERABLES, self.renderables.len() as i64);
        self.counters.set(names::DYNAMIC_RENDERABLES, self.dynamic_renderables.len() as i64);

        cmd.set_viewport(Viewport::from_size(self.config.viewport_width, self.config.viewport_height))?;
        let drawn = PassContext::reset_state(cmd).and_then(|()| self.draw_opaque(cmd));
        let restored = PassContext::reset_state(cmd);
        let draw_calls = drawn?;
        restored?;

        self.counters.set(names::DRAW_CALLS, draw_calls as i64);
        Ok(draw_calls)
    }

    fn draw_opaque(&self, cmd: &mut dyn CommandList) -> Result<u32> {
        let shader = self
            .resources
            .find_shader(DEFAULT_SHADER)
            .and_then(|key| self.resources.shader(key))
            .filter(|shader| shader.is_loaded());
        let Some(shader) = shader else {
            return Ok(0);
        };

        let mut context = PassContext::new();
        context.activate_shader(cmd, shader)?;

        let view_projection = self.camera.view_projection_matrix();
        let mut draw_calls = 0;
        for drawable in self.queued() {
            let model = drawable.transform().matrix();
            shader.set_uniform(cmd, uniforms::MODEL_VIEW_PROJECTION, UniformValue::Mat4(view_projection * model))?;
            shader.set_uniform(cmd, uniforms::MODEL, UniformValue::Mat4(model))?;
            shader.set_uniform(cmd, uniforms::OBJECT_COLOR, UniformValue::Vec4(drawable.color()))?;

            if let Some(mesh) = drawable.mesh().and_then(|key| self.resources.mesh(key)) {
                context.submit_mesh(cmd, mesh, drawable.draw_mode())?;
            }
            draw_calls += 1;
        }
        Ok(draw_calls)
    }

    /// Run `pass` over both queues
    pub fn execute_pass(&self, pass: &mut RenderPass, cmd: &mut dyn CommandList) -> Result<u32> {
        let drawables: Vec<&dyn Drawable> = self.queued().collect();
        let mut device = lock(&self.graphics_device)?;
        pass.render(&mut *device, cmd, &self.resources, &drawables)
    }

    /// Record and submit a whole frame: the default pass, then `passes` in order
    pub fn render_frame(&mut self, passes: &mut [RenderPass]) -> Result<u32> {
        let mut cmd = lock(&self.graphics_device)?.create_command_list()?;
        cmd.begin()?;

        let mut draw_calls = self.draw_queued_renderables(&mut *cmd)?;
        for pass in passes.iter_mut() {
            draw_calls += self.execute_pass(pass, &mut *cmd)?;
        }

        cmd.end()?;
        lock(&self.graphics_device)?.submit(&[&*cmd])?;
        self.counters.set(names::DRAW_CALLS, draw_calls as i64);
        Ok(draw_calls)
    }
}

fn lock<'a>(device: &'a Mutex<dyn GraphicsDevice + 'static>) -> Result<MutexGuard<'a, dyn GraphicsDevice + 'static>> {
    device
        .lock()
        .map_err(|_| engine_err!(LOG_SOURCE, "GraphicsDevice lock poisoned"))
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
