use super::{Encoding, EncodingError};
use crate::Envelope;
use std::sync::Arc;

/// Represents an envelope encoding using [MessagePack](https://msgpack.org).
///
/// # Remarks
///
/// Envelopes are encoded as maps with named fields so they can be read by other MessagePack
/// implementations.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessagePack;

impl MessagePack {
    /// Initializes a new [MessagePack] envelope encoding.
    pub fn new() -> Self {
        Self
    }
}

impl From<MessagePack> for Arc<dyn Encoding> {
    fn from(value: MessagePack) -> Self {
        Arc::new(value)
    }
}

impl Encoding for MessagePack {
    fn name(&self) -> &str {
        "message-pack"
    }

    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodingError> {
        rmp_serde::to_vec_named(envelope).map_err(EncodingError::failed)
    }

    fn decode(&self, body: &[u8]) -> Result<Envelope, EncodingError> {
        rmp_serde::from_slice(body).map_err(EncodingError::failed)
    }
}
