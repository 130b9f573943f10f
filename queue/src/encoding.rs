mod error;
mod format;
mod json;

pub use error::EncodingError;
pub use format::EncodingFormat;
pub use json::Json;

use crate::Envelope;
use cfg_if::cfg_if;

/// Defines the behavior of an [envelope](Envelope) encoding.
pub trait Encoding: Send + Sync {
    /// Gets the name of the encoding.
    fn name(&self) -> &str;

    /// Encodes the specified envelope.
    ///
    /// # Arguments
    ///
    /// * `envelope` - the [envelope](Envelope) to encode
    ///
    /// # Returns
    ///
    /// The encoded envelope as binary.
    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodingError>;

    /// Decodes the specified envelope.
    ///
    /// # Arguments
    ///
    /// * `body` - the binary body to decode
    ///
    /// # Returns
    ///
    /// The decoded [envelope](Envelope) is successful; otherwise, an [error](EncodingError).
    fn decode(&self, body: &[u8]) -> Result<Envelope, EncodingError>;
}

cfg_if! {
    if #[cfg(feature = "cbor")] {
        mod cbor;
        pub use cbor::Cbor;
    }
}

cfg_if! {
    if #[cfg(feature = "message-pack")] {
        mod message_pack;
        pub use message_pack::MessagePack;
    }
}
