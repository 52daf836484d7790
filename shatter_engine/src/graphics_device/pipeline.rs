/// Fixed-function state vocabulary shared by every backend: primitive
/// assembly, vertex fetch, depth comparison and color blending.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
    TriangleStrip,
    LineList,
    LineStrip,
    /// Line strip closed back to its first vertex
    LineLoop,
    PointList,
}

/// Width of one element of an index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U16,
    U32,
}

impl IndexType {
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

// ===== VERTEX FETCH =====

/// Float vector formats a vertex attribute can use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum BufferFormat {
    R32_SFLOAT,
    R32G32_SFLOAT,
    R32G32B32_SFLOAT,
    R32G32B32A32_SFLOAT,
}

impl BufferFormat {
    pub fn size_bytes(&self) -> u32 {
        4 * match self {
            BufferFormat::R32_SFLOAT => 1,
            BufferFormat::R32G32_SFLOAT => 2,
            BufferFormat::R32G32B32_SFLOAT => 3,
            BufferFormat::R32G32B32A32_SFLOAT => 4,
        }
    }
}

/// One shader input read from a bound vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader-side attribute index
    pub location: u32,
    pub binding: u32,
    pub format: BufferFormat,
    /// Byte offset inside one vertex
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBinding {
    pub binding: u32,
    /// Bytes from one vertex to the next
    pub stride: u32,
}

/// How vertex buffer bytes map to shader attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    pub bindings: Vec<VertexBinding>,
    pub attributes: Vec<VertexAttribute>,
}

// ===== DEPTH =====

/// Test applied between an incoming fragment depth and the stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

// ===== COLOR BLEND =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
}

/// How the weighted source and destination are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendOp {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

/// Color and alpha blend equations of the current target
///
/// `out = src * src_factor <op> dst * dst_factor`, evaluated separately for
/// color and alpha when `blend_enable` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBlendState {
    pub blend_enable: bool,
    pub src_color_factor: BlendFactor,
    pub dst_color_factor: BlendFactor,
    pub color_blend_op: BlendOp,
    pub src_alpha_factor: BlendFactor,
    pub dst_alpha_factor: BlendFactor,
    pub alpha_blend_op: BlendOp,
}

impl Default for ColorBlendState {
    /// Blending off: the fragment replaces the target
    fn default() -> Self {
        Self {
            blend_enable: false,
            ..Self::blended(BlendFactor::One, BlendFactor::Zero)
        }
    }
}

impl ColorBlendState {
    /// Additive equation with the same factors for color and alpha
    pub fn blended(src: BlendFactor, dst: BlendFactor) -> Self {
        Self {
            blend_enable: true,
            src_color_factor: src,
            dst_color_factor: dst,
            color_blend_op: BlendOp::Add,
            src_alpha_factor: src,
            dst_alpha_factor: dst,
            alpha_blend_op: BlendOp::Add,
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
