/// Convenience result type used across framesplice.
pub type SpliceResult<T> = Result<T, SpliceError>;

/// Top-level error taxonomy used by splice APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpliceError {
    /// Invalid caller-provided parameters or sequences.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame buffers whose size or shape does not line up.
    #[error("shape error: {0}")]
    Shape(String),

    /// A donor channel layout that cannot be converted to the target layout.
    #[error("unsupported channel conversion: {from} -> {to} channels")]
    UnsupportedChannels {
        /// Channel count of the donor frames.
        from: u32,
        /// Channel count required by the main sequence.
        to: u32,
    },

    /// Errors when serializing or deserializing job files and descriptors.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Image decoding or encoding failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure while reading or writing frames.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpliceError {
    /// Build a [`SpliceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpliceError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`SpliceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SpliceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
