/// Convenience alias for results produced by this crate.
pub type VexelResult<T> = Result<T, VexelError>;

/// Error type for configuration, texture, and serialization failures.
///
/// Per-pixel hot paths never produce a `VexelError`: out-of-range writes are
/// silently dropped and invalid sampler reads answer a sentinel color. This
/// type is reserved for the configuration and I/O boundaries around them.
#[derive(thiserror::Error, Debug)]
pub enum VexelError {
    /// Invalid caller-supplied configuration (dimensions, sample rate, scene).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterizer state errors (target binding, buffer shape).
    #[error("raster error: {0}")]
    Raster(String),

    /// Texture and mip-pyramid errors (level bounds, texel layout).
    #[error("texture error: {0}")]
    Texture(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped external errors (decoding, I/O).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VexelError {
    /// Build a [`VexelError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VexelError::Raster`] from any message.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`VexelError::Texture`] from any message.
    pub fn texture(msg: impl Into<String>) -> Self {
        Self::Texture(msg.into())
    }

    /// Build a [`VexelError::Serde`] from any message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
