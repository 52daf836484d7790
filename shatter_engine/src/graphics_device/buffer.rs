/// GPU buffers holding vertex, index or uniform data

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    Vertex,
    Index,
    Uniform,
}

#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Capacity in bytes
    pub size: u64,
    pub usage: BufferUsage,
    /// Hint that the contents are rewritten after creation (dynamic meshes)
    pub dynamic: bool,
}

/// Backend buffer, released when the last `Arc` goes away
pub trait Buffer: Send + Sync {
    fn size(&self) -> u64;

    /// Overwrite `data.len()` bytes starting at `offset`
    ///
    /// Fails when the range does not fit in the buffer.
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;
}
