use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Formatter, Result as FormatResult};
use uuid::Uuid;

/// Represents the unique identifier of a message sent to a queue.
///
/// # Remarks
///
/// A message identifier is opaque to consumers. Queues backed by a broker typically use the
/// identifier assigned by the broker.
#[derive(Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Initializes a new [MessageId].
    ///
    /// # Arguments
    ///
    /// * `value` - the identifier value
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Initializes a new, random [MessageId].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Gets the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        self.0.fmt(f)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for MessageId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}
