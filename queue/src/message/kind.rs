use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter, Result as FormatResult};

/// Represents the kind of a [message](super::Message).
///
/// # Remarks
///
/// A kind is the type tag carried in an [envelope](crate::Envelope) and is the key used to
/// resolve the [factory](super::Factory) that reconstructs a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Kind(String);

impl Kind {
    /// Initializes a new [Kind].
    ///
    /// # Arguments
    ///
    /// * `kind` - the message type identifier
    pub fn new<K: AsRef<str>>(kind: K) -> Self {
        Self(kind.as_ref().into())
    }

    /// Gets the kind as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Gets a value indicating whether the kind is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Kind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Kind {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Kind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Kind {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Kind> for String {
    fn from(value: Kind) -> Self {
        value.0
    }
}

impl PartialEq<str> for Kind {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Kind {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
