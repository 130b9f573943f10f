use crate::message::{Kind, Kinded, Message, MessageError, Params, Registry};
use crate::OwnerId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Represents the transport-neutral envelope of a [message](Message).
///
/// # Remarks
///
/// An envelope is serialized as a map with the keys `type` and `payload`. The legacy keys
/// `className` and `message` are accepted when an envelope is deserialized.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Envelope {
    #[serde(rename = "type", alias = "className")]
    kind: Kind,

    #[serde(alias = "message")]
    payload: Params,
}

impl Envelope {
    /// Initializes a new [Envelope].
    ///
    /// # Arguments
    ///
    /// * `kind` - the [kind](Kind) of the enveloped message
    /// * `payload` - the [parameters](Params) of the enveloped message
    pub fn new<K: Into<Kind>>(kind: K, payload: Params) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Gets the [kind](Kind) of the enveloped message.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Gets the [parameters](Params) of the enveloped message.
    pub fn payload(&self) -> &Params {
        &self.payload
    }

    /// Deconstructs the envelope into its [kind](Kind) and [parameters](Params).
    pub fn into_parts(self) -> (Kind, Params) {
        (self.kind, self.payload)
    }

    /// Unwraps the envelope into the original [message](Message).
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    /// * `registry` - the [registry](Registry) used to resolve the message type
    pub fn unwrap(self, owner: OwnerId, registry: &Registry) -> Result<Box<dyn Message>, MessageError> {
        registry.unwrap(owner, self)
    }
}

/// Wraps the specified message into an [envelope](Envelope).
///
/// # Arguments
///
/// * `message` - the [message](Message) to wrap
///
/// # Returns
///
/// A new [envelope](Envelope); otherwise, an [error](MessageError) if the message parameters
/// cannot be represented as an envelope payload.
pub fn wrap(message: &dyn Message) -> Result<Envelope, MessageError> {
    let kind = message.kind();
    let payload = message
        .params()
        .map_err(|error| MessageError::invalid_body(kind.clone(), error))?;

    debug!(kind = %kind, owner = %message.owner(), "wrapped message");

    Ok(Envelope::new(kind, payload))
}
