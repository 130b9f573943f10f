use super::{Encoding, EncodingError};
use crate::Envelope;
use std::sync::Arc;

/// Represents an envelope encoding using Concise Binary Object Representation (CBOR) as defined in
/// [RFC 7049](https://tools.ietf.org/html/rfc7049).
#[derive(Clone, Copy, Debug, Default)]
pub struct Cbor;

impl Cbor {
    /// Initializes a new [CBOR](Cbor) envelope encoding.
    pub fn new() -> Self {
        Self
    }
}

impl From<Cbor> for Arc<dyn Encoding> {
    fn from(value: Cbor) -> Self {
        Arc::new(value)
    }
}

impl Encoding for Cbor {
    fn name(&self) -> &str {
        "cbor"
    }

    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodingError> {
        let mut bytes = Vec::new();

        ciborium::into_writer(envelope, &mut bytes).map_err(EncodingError::failed)?;

        Ok(bytes)
    }

    fn decode(&self, body: &[u8]) -> Result<Envelope, EncodingError> {
        ciborium::from_reader(body).map_err(EncodingError::failed)
    }
}
