use thiserror::Error;

/// Errors raised by tensors, parameter stores and layer implementations.
///
/// The sequential container never constructs one of these itself; it hands
/// back whatever the failing layer returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("data length {len} does not match shape {shape:?} ({elements} elements)")]
    ShapeDataMismatch {
        shape: Vec<usize>,
        elements: usize,
        len: usize,
    },

    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("parameter `{0}` is already registered")]
    DuplicateParameter(String),

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    /// Failure reported by a user supplied layer.
    #[error(transparent)]
    Layer(Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an arbitrary layer failure.
    pub fn layer<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Layer(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
