/// Result alias that carries the custom [`SortVizError`] type.
pub type Result<T> = std::result::Result<T, SortVizError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SortVizError {
    /// Free-form message for boundary failures such as an unavailable note
    /// device.
    #[error("{0}")]
    Message(String),
    /// An operation referenced a position outside the target array.
    #[error("index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A trace was replayed against an array it was not recorded against.
    #[error("trace was recorded against {expected} elements but the target has {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The requested algorithm name is not one of the registered sorts.
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// A configuration value is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialisation errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl SortVizError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}
