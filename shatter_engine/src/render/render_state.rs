/// Per-shader render state and draw modes, with their device mappings
///
/// Every variant maps through an exhaustive `match`, so adding a variant
/// without a device equivalent is a compile error rather than a table miss.

use crate::graphics_device::{BlendFactor, ColorBlendState, CompareOp, PrimitiveTopology};

// ===== BLEND MODE =====

/// How a shader's output is combined with the color already in the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Blending disabled
    #[default]
    Opaque,
    /// src * alpha + dst * (1 - alpha)
    Alpha,
    /// src + dst
    Additive,
}

impl BlendMode {
    pub const ALL: [BlendMode; 3] = [BlendMode::Opaque, BlendMode::Alpha, BlendMode::Additive];

    pub fn blend_state(self) -> ColorBlendState {
        match self {
            BlendMode::Opaque => ColorBlendState::default(),
            BlendMode::Alpha => ColorBlendState::blended(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha),
            BlendMode::Additive => ColorBlendState::blended(BlendFactor::One, BlendFactor::One),
        }
    }
}

// ===== DEPTH MASK =====

/// Whether a shader writes to the depth buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthMask {
    #[default]
    Write,
    ReadOnly,
}

impl DepthMask {
    pub const ALL: [DepthMask; 2] = [DepthMask::Write, DepthMask::ReadOnly];

    pub fn depth_write_enabled(self) -> bool {
        match self {
            DepthMask::Write => true,
            DepthMask::ReadOnly => false,
        }
    }
}

// ===== DEPTH TEST =====

/// Depth comparison function of a shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthTest {
    Never,
    #[default]
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl DepthTest {
    pub const ALL: [DepthTest; 8] = [
        DepthTest::Never,
        DepthTest::Less,
        DepthTest::Equal,
        DepthTest::LessEqual,
        DepthTest::Greater,
        DepthTest::NotEqual,
        DepthTest::GreaterEqual,
        DepthTest::Always,
    ];

    pub fn compare_op(self) -> CompareOp {
        match self {
            DepthTest::Never => CompareOp::Never,
            DepthTest::Less => CompareOp::Less,
            DepthTest::Equal => CompareOp::Equal,
            DepthTest::LessEqual => CompareOp::LessOrEqual,
            DepthTest::Greater => CompareOp::Greater,
            DepthTest::NotEqual => CompareOp::NotEqual,
            DepthTest::GreaterEqual => CompareOp::GreaterOrEqual,
            DepthTest::Always => CompareOp::Always,
        }
    }
}

// ===== RENDER STATE =====

/// Fixed-function state a shader declares and a pass applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    pub blend_mode: BlendMode,
    pub depth_mask: DepthMask,
    pub depth_test: DepthTest,
}

// ===== DRAW MODE =====

/// Primitive assembly of a mesh draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Triangles,
    TriangleStrip,
    Lines,
    LineStrip,
    LineLoop,
}

impl DrawMode {
    pub const ALL: [DrawMode; 5] = [
        DrawMode::Triangles,
        DrawMode::TriangleStrip,
        DrawMode::Lines,
        DrawMode::LineStrip,
        DrawMode::LineLoop,
    ];

    pub fn topology(self) -> PrimitiveTopology {
        match self {
            DrawMode::Triangles => PrimitiveTopology::TriangleList,
            DrawMode::TriangleStrip => PrimitiveTopology::TriangleStrip,
            DrawMode::Lines => PrimitiveTopology::LineList,
            DrawMode::LineStrip => PrimitiveTopology::LineStrip,
            DrawMode::LineLoop => PrimitiveTopology::LineLoop,
        }
    }
}

#[cfg(test)]
#[path = "render_state_tests.rs"]
mod tests;
