//! Scene-side drawing interface
//!
//! World and game code describe what to draw through `Drawable`; the render
//! module consumes it.

mod renderable;

pub use renderable::{Drawable, Renderable, MAX_TEXTURE_SLOTS};
