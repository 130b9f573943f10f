use std::error::Error;
use thiserror::Error;

/// Represents the possible encoding errors.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Indicates that an [encoding](super::Encoding) failed to encode or decode an envelope.
    #[error(transparent)]
    Failed(#[from] Box<dyn Error + Send + Sync>),

    /// Indicates an encoded body exceeds the configured limit.
    #[error("encoded body of {size} bytes exceeds the limit of {limit} bytes")]
    TooLarge {
        /// Gets the size of the encoded body, in bytes.
        size: usize,

        /// Gets the maximum size of an encoded body, in bytes.
        limit: usize,
    },
}

impl EncodingError {
    pub(crate) fn failed<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Failed(Box::new(error))
    }
}
