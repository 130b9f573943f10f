use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Formatter, Result as FormatResult};
use std::str::FromStr;

/// Represents the identifier of the user that owns a [message](crate::message::Message).
///
/// # Remarks
///
/// An owner identifier is opaque to consumers. It is supplied when a message is received and is
/// never carried inside an [envelope](crate::Envelope).
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Initializes a new [OwnerId].
    ///
    /// # Arguments
    ///
    /// * `value` - the identifier value
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Gets the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the identifier into another type.
    ///
    /// # Example
    ///
    /// ```
    /// use queue::OwnerId;
    ///
    /// let id = OwnerId::from(42);
    /// assert_eq!(id.parse::<u64>().unwrap(), 42);
    /// ```
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        self.0.parse()
    }
}

impl Debug for OwnerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        self.0.fmt(f)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for OwnerId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for OwnerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! from_integer {
    ($($type:ty),+) => {
        $(
            impl From<$type> for OwnerId {
                fn from(value: $type) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

from_integer!(i32, i64, u32, u64, usize);
