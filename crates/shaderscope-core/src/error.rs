//! Error types for shaderscope.

use thiserror::Error;

/// The main error type for shaderscope operations.
#[derive(Error, Debug)]
pub enum ShaderscopeError {
    /// No program record is registered for the given material uuid.
    #[error("program for material '{0}' not found")]
    ProgramNotFound(String),

    /// A mesh id does not refer to a mesh in the store.
    #[error("mesh #{0} not found")]
    MeshNotFound(u32),

    /// The shared store lock was poisoned by a panicking writer.
    #[error("program store lock poisoned")]
    StorePoisoned,

    /// Rendering error in the viewer host.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for shaderscope operations.
pub type Result<T> = std::result::Result<T, ShaderscopeError>;
