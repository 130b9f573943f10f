use super::Kind;
use thiserror::Error;

/// Represents an invalid message body.
///
/// # Remarks
///
/// This error is raised by a [factory](super::Create::create) when the provided
/// [parameters](super::Params) do not satisfy the shape the message requires.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{reason}")]
pub struct InvalidMessageBody {
    key: Option<String>,
    reason: String,
}

impl InvalidMessageBody {
    /// Initializes a new [InvalidMessageBody] error.
    ///
    /// # Arguments
    ///
    /// * `reason` - the reason the message body is invalid
    pub fn new<R: Into<String>>(reason: R) -> Self {
        Self {
            key: None,
            reason: reason.into(),
        }
    }

    /// Initializes a new [InvalidMessageBody] error for a missing, required parameter.
    ///
    /// # Arguments
    ///
    /// * `key` - the key of the missing parameter
    pub fn missing<K: AsRef<str>>(key: K) -> Self {
        let key = key.as_ref();

        Self {
            key: Some(key.into()),
            reason: format!("missing required parameter '{key}'"),
        }
    }

    /// Initializes a new [InvalidMessageBody] error for a malformed parameter.
    ///
    /// # Arguments
    ///
    /// * `key` - the key of the malformed parameter
    /// * `reason` - the reason the parameter is malformed
    pub fn invalid<K: AsRef<str>, R: AsRef<str>>(key: K, reason: R) -> Self {
        let key = key.as_ref();

        Self {
            key: Some(key.into()),
            reason: format!("invalid parameter '{key}': {}", reason.as_ref()),
        }
    }

    /// Gets the key of the offending parameter, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Gets the reason the message body is invalid.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<serde_json::Error> for InvalidMessageBody {
    fn from(value: serde_json::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Represents the possible message errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MessageError {
    /// Indicates a message [kind](Kind) has not been registered.
    #[error("message type {0} has not been registered")]
    UnknownType(Kind),

    /// Indicates the body of a message is invalid.
    #[error("message type {kind} has an invalid body: {source}")]
    InvalidBody {
        /// Gets the [kind](Kind) of message with the invalid body.
        kind: Kind,

        /// Gets the [error](InvalidMessageBody) raised for the message body.
        #[source]
        source: InvalidMessageBody,
    },

    /// Indicates a message [kind](Kind) has already been registered.
    #[error("message type {0} has already been registered")]
    DuplicateType(Kind),

    /// Indicates a message is not of the expected [kind](Kind).
    #[error("expected message type {expected}, but found {actual}")]
    UnexpectedType {
        /// Gets the expected message [kind](Kind).
        expected: Kind,

        /// Gets the actual message [kind](Kind).
        actual: Kind,
    },
}

impl MessageError {
    pub(crate) fn invalid_body(kind: Kind, source: InvalidMessageBody) -> Self {
        Self::InvalidBody { kind, source }
    }
}
