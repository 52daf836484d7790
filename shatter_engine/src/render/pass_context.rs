/// Per-pass execution context: the GPU state the pass last applied.
///
/// A context lives from a pass's begin to its end. Every bind goes through it
/// so consecutive draws that share a program, render state or mesh buffers
/// record no redundant commands.

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::graphics_device::{Buffer, ColorBlendState, CommandList, CompareOp, Program};
use crate::render::{DrawMode, RenderState};
use crate::resource::{Mesh, Shader};

#[derive(Default)]
pub struct PassContext {
    active_program: Option<Arc<dyn Program>>,
    render_state: RenderState,
    vertex_buffer: Option<Arc<dyn Buffer>>,
    index_buffer: Option<Arc<dyn Buffer>>,
}

impl PassContext {
    /// Context matching the state a pass sets up in begin: no program, no
    /// buffers, blending off, depth write on, depth test less
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the baseline a fresh context assumes: blending off, depth
    /// write on, depth test less
    pub fn reset_state(cmd: &mut dyn CommandList) -> Result<()> {
        cmd.set_blend_state(ColorBlendState::default())?;
        cmd.set_depth_write(true)?;
        cmd.set_depth_compare(CompareOp::Less)
    }

    /// Bind the shader's program unless it is already active
    ///
    /// Returns true when a bind was recorded.
    pub fn activate_shader(&mut self, cmd: &mut dyn CommandList, shader: &Shader) -> Result<bool> {
        let program = shader.program().ok_or_else(|| {
            Error::InvalidResource(format!("shader \"{}\" has no program", shader.source().label()))
        })?;
        if let Some(active) = &self.active_program {
            if Arc::ptr_eq(active, program) {
                return Ok(false);
            }
        }
        self.active_program = Some(shader.activate(cmd)?);
        Ok(true)
    }

    /// Apply blend mode, depth mask and depth test, each only if it changed
    pub fn apply_render_state(&mut self, cmd: &mut dyn CommandList, state: RenderState) -> Result<()> {
        if state.blend_mode != self.render_state.blend_mode {
            cmd.set_blend_state(state.blend_mode.blend_state())?;
            self.render_state.blend_mode = state.blend_mode;
        }
        if state.depth_mask != self.render_state.depth_mask {
            cmd.set_depth_write(state.depth_mask.depth_write_enabled())?;
            self.render_state.depth_mask = state.depth_mask;
        }
        if state.depth_test != self.render_state.depth_test {
            cmd.set_depth_compare(state.depth_test.compare_op())?;
            self.render_state.depth_test = state.depth_test;
        }
        Ok(())
    }

    /// Bind the mesh's buffers unless the previous mesh used the same ones,
    /// then draw it
    pub fn submit_mesh(&mut self, cmd: &mut dyn CommandList, mesh: &Mesh, draw_mode: Option<DrawMode>) -> Result<()> {
        if mesh.is_ready() {
            let bound = same_buffer(self.vertex_buffer.as_ref(), mesh.vertex_buffer())
                && same_buffer(self.index_buffer.as_ref(), mesh.index_buffer());
            if !bound {
                mesh.prepare(cmd)?;
                self.vertex_buffer = mesh.vertex_buffer().cloned();
                self.index_buffer = mesh.index_buffer().cloned();
            }
        }
        mesh.draw(cmd, draw_mode)
    }

    pub fn active_program(&self) -> Option<&Arc<dyn Program>> {
        self.active_program.as_ref()
    }

    pub fn render_state(&self) -> RenderState {
        self.render_state
    }
}

fn same_buffer(a: Option<&Arc<dyn Buffer>>, b: Option<&Arc<dyn Buffer>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "pass_context_tests.rs"]
mod tests;
