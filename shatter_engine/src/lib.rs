/*!
# Shatter Engine

Core of a small real-time 3D renderer.

The crate is backend agnostic: a `GraphicsDevice` implementation (OpenGL,
Vulkan, ...) supplies buffers, textures, programs and command lists, and the
engine drives it through trait objects.

## Architecture

- **Camera / Transform**: view and model matrices, recomputed only when dirty
- **ResourceManager**: named and anonymous meshes, shaders and textures
- **Renderable**: mesh + shader + textures + transform + color
- **RenderPass**: one traversal of a drawable list with its own camera and target
- **Renderer**: frame queues, active camera and the default pass
- **Engine**: process-wide logger
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod stats;
pub mod math;
pub mod camera;
pub mod graphics_device;
pub mod resource;
pub mod scene;
pub mod render;

// Main shatter namespace module
pub mod shatter {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, FileLogger, format_plain};
    }

    pub mod stats {
        pub use crate::stats::*;
    }

    pub mod math {
        pub use crate::math::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    // Backend-facing traits and descriptors
    pub mod graphics_device {
        pub use crate::graphics_device::*;
    }

    pub mod resource {
        pub use crate::resource::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod render {
        pub use crate::render::*;
    }
}

// Re-export math library at crate root
pub use glam;
