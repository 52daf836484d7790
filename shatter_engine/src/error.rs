//! Error types for the Shatter engine
//!
//! This module defines the error types used throughout the engine,
//! including rendering, resource loading, and initialization.

use std::fmt;

/// Result type for Shatter engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shatter engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Graphics backend error (command recording, submission, device loss)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (empty geometry, bad pixel data, unknown key, etc.)
    InvalidResource(String),

    /// Initialization failed (renderer, configuration, subsystems)
    InitializationFailed(String),

    /// Shader program failed to compile or link
    ShaderCompilation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ShaderCompilation(msg) => write!(f, "Shader compilation failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```ignore
/// let buffer = buffers.get(0)
///     .ok_or_else(|| engine_err!("shatter::Mesh", "Missing vertex buffer"))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::shatter::Engine::log_detailed(
            $crate::shatter::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::shatter::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::BackendError`
///
/// # Example
///
/// ```ignore
/// if lock_poisoned {
///     engine_bail!("shatter::Renderer", "GraphicsDevice lock poisoned");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
