use crate::encoding::{Encoding, EncodingError, Json};
use crate::message::{Message, Registry};
use crate::{envelope, OwnerId, QueueError, QueueOptions};
use std::sync::Arc;
use tracing::debug;

/// Represents a message codec.
///
/// # Remarks
///
/// A codec wraps a [message](Message) into an [envelope](crate::Envelope) and encodes it as a
/// message body, and decodes a message body and unwraps it back into the original message.
#[derive(Clone)]
pub struct Codec {
    registry: Arc<Registry>,
    encoding: Arc<dyn Encoding>,
    max_body_size: Option<usize>,
}

impl Codec {
    /// Initializes a new [Codec].
    ///
    /// # Arguments
    ///
    /// * `registry` - the [registry](Registry) used to resolve message types
    /// * `encoding` - the [encoding](Encoding) used for message bodies
    pub fn new<R, E>(registry: R, encoding: E) -> Self
    where
        R: Into<Arc<Registry>>,
        E: Into<Arc<dyn Encoding>>,
    {
        Self {
            registry: registry.into(),
            encoding: encoding.into(),
            max_body_size: None,
        }
    }

    /// Initializes a new [Codec] from the specified options.
    ///
    /// # Arguments
    ///
    /// * `registry` - the [registry](Registry) used to resolve message types
    /// * `options` - the [queue options](QueueOptions) to configure the codec with
    pub fn from_options<R: Into<Arc<Registry>>>(registry: R, options: &QueueOptions) -> Self {
        Self {
            registry: registry.into(),
            encoding: options.encoding.encoding(),
            max_body_size: options.max_body_size,
        }
    }

    /// Gets the associated [registry](Registry).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Gets the associated [encoding](Encoding).
    pub fn encoding(&self) -> &dyn Encoding {
        self.encoding.as_ref()
    }

    /// Encodes the specified message.
    ///
    /// # Arguments
    ///
    /// * `message` - the [message](Message) to encode
    ///
    /// # Returns
    ///
    /// The encoded message body; otherwise, an [error](QueueError).
    pub fn encode(&self, message: &dyn Message) -> Result<Vec<u8>, QueueError> {
        let envelope = envelope::wrap(message)?;
        let body = self.encoding.encode(&envelope)?;

        if let Some(limit) = self.max_body_size {
            if body.len() > limit {
                return Err(EncodingError::TooLarge {
                    size: body.len(),
                    limit,
                }
                .into());
            }
        }

        debug!(
            kind = %envelope.kind(),
            encoding = self.encoding.name(),
            size = body.len(),
            "encoded message"
        );

        Ok(body)
    }

    /// Decodes the specified message body.
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    /// * `body` - the message body to decode
    ///
    /// # Returns
    ///
    /// The decoded [message](Message); otherwise, an [error](QueueError).
    pub fn decode(&self, owner: OwnerId, body: &[u8]) -> Result<Box<dyn Message>, QueueError> {
        let envelope = self.encoding.decode(body)?;
        Ok(self.registry.unwrap(owner, envelope)?)
    }
}

impl From<Registry> for Codec {
    fn from(value: Registry) -> Self {
        Self::new(value, Json)
    }
}
