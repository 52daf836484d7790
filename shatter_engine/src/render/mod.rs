//! Rendering: per-shader render state, render passes and the frame renderer.

mod render_state;
mod pass_context;
mod render_pass;
mod renderer;

pub use render_state::{BlendMode, DepthMask, DepthTest, DrawMode, RenderState};
pub use pass_context::PassContext;
pub use render_pass::{RenderPass, uniforms};
pub use renderer::{Renderer, RendererConfig, DEFAULT_SHADER};
