/// Render pass: one traversal of a drawable list with a fixed camera,
/// viewport and target.
///
/// Passes are built once (opaque, transparent, overlay, ...) and run every
/// frame. All state diffing happens in a `PassContext` that only lives for
/// one run, so nothing leaks from one pass into the next.

use std::sync::Arc;
use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::camera::Camera;
use crate::error::Result;
use crate::engine_warn;
use crate::graphics_device::{
    ClearFlags, CommandList, GraphicsDevice, RenderSurface, RenderSurfaceDesc,
    UniformValue, Viewport,
};
use crate::render::PassContext;
use crate::resource::ResourceManager;
use crate::scene::{Drawable, MAX_TEXTURE_SLOTS};

/// Uniform names bound by every pass
pub mod uniforms {
    pub const VIEW: &str = "View";
    pub const PROJECTION: &str = "Projection";
    pub const CAMERA_POSITION: &str = "CameraPosition";
    pub const CAMERA_DIRECTION: &str = "CameraDirection";
    pub const OBJECT_POSITION: &str = "ObjectPosition";
    pub const OBJECT_BOUNDS_MINIMUM: &str = "ObjectBoundsMinimum";
    pub const OBJECT_BOUNDS_MAXIMUM: &str = "ObjectBoundsMaximum";
    pub const VIEWPORT: &str = "Viewport";
    pub const MODEL: &str = "Model";
    pub const OBJECT_COLOR: &str = "ObjectColor";
    pub const MODEL_VIEW_PROJECTION: &str = "ModelViewProjection";

    /// Sampler uniform of a texture slot (`Texture0`, `Texture1`, ...)
    pub fn texture(slot: usize) -> String {
        format!("Texture{}", slot)
    }
}

const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub struct RenderPass {
    name: String,
    width: u32,
    height: u32,
    camera: Camera,
    always_clear: bool,
    /// Off-screen target, created on the first run
    target: Option<RenderSurfaceDesc>,
    surface: Option<Arc<dyn RenderSurface>>,
    draw_calls: u32,
}

impl RenderPass {
    pub fn new(name: &str, width: u32, height: u32, camera: Camera, always_clear: bool) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            camera,
            always_clear,
            target: None,
            surface: None,
            draw_calls: 0,
        }
    }

    /// Render into an off-screen surface instead of the current target
    pub fn with_target(mut self, target: RenderSurfaceDesc) -> Self {
        self.target = Some(target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Draw calls issued by the last run
    pub fn draw_calls(&self) -> u32 {
        self.draw_calls
    }

    /// Off-screen surface, once created
    pub fn surface(&self) -> Option<&Arc<dyn RenderSurface>> {
        self.surface.as_ref()
    }

    // ===== ENTRY POINTS =====

    pub fn render_renderable(
        &mut self,
        device: &mut dyn GraphicsDevice,
        cmd: &mut dyn CommandList,
        resources: &ResourceManager,
        drawable: &dyn Drawable,
    ) -> Result<u32> {
        self.render_with_uniforms(device, cmd, resources, &[drawable], &FxHashMap::default())
    }

    pub fn render_renderable_with_uniforms(
        &mut self,
        device: &mut dyn GraphicsDevice,
        cmd: &mut dyn CommandList,
        resources: &ResourceManager,
        drawable: &dyn Drawable,
        uniforms: &FxHashMap<String, Vec4>,
    ) -> Result<u32> {
        self.render_with_uniforms(device, cmd, resources, &[drawable], uniforms)
    }

    pub fn render(
        &mut self,
        device: &mut dyn GraphicsDevice,
        cmd: &mut dyn CommandList,
        resources: &ResourceManager,
        drawables: &[&dyn Drawable],
    ) -> Result<u32> {
        self.render_with_uniforms(device, cmd, resources, drawables, &FxHashMap::default())
    }

    /// Draw `drawables` in order and return the number of draw calls
    ///
    /// `uniforms` are uploaded to every drawable before the standard ones, so
    /// they cannot replace the camera or model uniforms.
    pub fn render_with_uniforms(
        &mut self,
        device: &mut dyn GraphicsDevice,
        cmd: &mut dyn CommandList,
        resources: &ResourceManager,
        drawables: &[&dyn Drawable],
        uniforms: &FxHashMap<String, Vec4>,
    ) -> Result<u32> {
        let pushed = self.begin(device, cmd)?;
        let mut context = PassContext::new();
        let drawn = self.prepare(cmd).and_then(|()| {
            drawables
                .iter()
                .try_for_each(|drawable| self.draw(&mut context, cmd, resources, *drawable, uniforms))
        });
        // End runs even after a failed command so the target and state are restored
        let ended = self.end(cmd, pushed);
        drawn.and(ended)?;
        Ok(self.draw_calls)
    }

    /// Clear color, depth and stencil of the pass's target
    pub fn clear(&mut self, device: &mut dyn GraphicsDevice, cmd: &mut dyn CommandList) -> Result<()> {
        let pushed = self.begin(device, cmd)?;
        let cleared = self
            .prepare(cmd)
            .and_then(|()| cmd.clear(ClearFlags::all(), CLEAR_COLOR, 1.0, 0));
        let ended = self.end(cmd, pushed);
        cleared.and(ended)
    }

    // ===== STAGES =====

    /// Viewport and target; returns whether the off-screen surface was pushed
    fn begin(&mut self, device: &mut dyn GraphicsDevice, cmd: &mut dyn CommandList) -> Result<bool> {
        self.draw_calls = 0;
        self.camera.update();
        cmd.set_viewport(Viewport::from_size(self.width, self.height))?;

        if self.surface.is_none() {
            if let Some(desc) = self.target {
                match device.create_render_surface(&desc) {
                    Ok(surface) => self.surface = Some(surface),
                    Err(error) => {
                        engine_warn!("shatter::RenderPass",
                            "Pass \"{}\" could not create its render surface, drawing to the current target: {}",
                            self.name, error);
                        self.target = None;
                    }
                }
            }
        }
        match &self.surface {
            Some(surface) => {
                cmd.push_render_surface(surface)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear if requested, then the baseline the context diffs against
    fn prepare(&self, cmd: &mut dyn CommandList) -> Result<()> {
        if self.always_clear {
            cmd.clear(ClearFlags::all(), CLEAR_COLOR, 1.0, 0)?;
        }
        PassContext::reset_state(cmd)
    }

    fn draw(
        &mut self,
        context: &mut PassContext,
        cmd: &mut dyn CommandList,
        resources: &ResourceManager,
        drawable: &dyn Drawable,
        overrides: &FxHashMap<String, Vec4>,
    ) -> Result<()> {
        let Some(shader) = drawable.shader().and_then(|key| resources.shader(key)) else {
            return Ok(());
        };
        if !shader.is_loaded() {
            return Ok(());
        }

        context.activate_shader(cmd, shader)?;
        context.apply_render_state(cmd, shader.render_state())?;

        for (name, value) in overrides {
            shader.set_uniform(cmd, name, UniformValue::Vec4(*value))?;
        }

        let camera = &self.camera;
        let transform = drawable.transform();
        let mesh = drawable.mesh().and_then(|key| resources.mesh(key));

        shader.set_uniform(cmd, uniforms::VIEW, UniformValue::Mat4(*camera.view_matrix()))?;
        shader.set_uniform(cmd, uniforms::PROJECTION, UniformValue::Mat4(*camera.projection_matrix()))?;
        shader.set_uniform(cmd, uniforms::CAMERA_POSITION, UniformValue::Vec3(camera.position()))?;
        shader.set_uniform(cmd, uniforms::CAMERA_DIRECTION, UniformValue::Vec3(camera.direction()))?;
        shader.set_uniform(cmd, uniforms::OBJECT_POSITION, UniformValue::Vec3(transform.position()))?;
        if let Some(mesh) = mesh {
            let bounds = mesh.bounds();
            shader.set_uniform(cmd, uniforms::OBJECT_BOUNDS_MINIMUM, UniformValue::Vec3(bounds.min))?;
            shader.set_uniform(cmd, uniforms::OBJECT_BOUNDS_MAXIMUM, UniformValue::Vec3(bounds.max))?;
        }
        shader.set_uniform(cmd, uniforms::VIEWPORT, UniformValue::Vec4(self.viewport_uniform()))?;

        // Slots are filled from 0; without slot 0 nothing is bound
        if drawable.texture(0).is_some() {
            for slot in 0..MAX_TEXTURE_SLOTS {
                let Some(texture) = drawable.texture(slot).and_then(|key| resources.texture(key)) else {
                    continue;
                };
                shader.set_uniform(cmd, &uniforms::texture(slot), UniformValue::Int(slot as i32))?;
                texture.bind(cmd, slot as u32)?;
            }
        }

        shader.set_uniform(cmd, uniforms::MODEL, UniformValue::Mat4(transform.matrix()))?;
        shader.set_uniform(cmd, uniforms::OBJECT_COLOR, UniformValue::Vec4(drawable.color()))?;

        if let Some(mesh) = mesh {
            context.submit_mesh(cmd, mesh, drawable.draw_mode())?;
        }
        self.draw_calls += 1;
        Ok(())
    }

    fn end(&mut self, cmd: &mut dyn CommandList, pushed: bool) -> Result<()> {
        let restored = PassContext::reset_state(cmd);
        if pushed {
            cmd.pop_render_surface()?;
        }
        restored
    }

    /// (width, height, 1 / width, 1 / height)
    fn viewport_uniform(&self) -> Vec4 {
        let (width, height) = (self.width as f32, self.height as f32);
        Vec4::new(width, height, width.recip(), height.recip())
    }
}

#[cfg(test)]
#[path = "render_pass_tests.rs"]
mod tests;
