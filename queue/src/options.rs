use crate::encoding::EncodingFormat;
use serde::Deserialize;

/// Represents the options used to configure a message queue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueueOptions {
    /// Gets or sets the [format](EncodingFormat) used to encode message bodies.
    ///
    /// # Remarks
    ///
    /// The default value is [JSON](EncodingFormat::Json).
    #[serde(alias = "Encoding")]
    pub encoding: EncodingFormat,

    /// Gets or sets the maximum size of an encoded message body, in bytes, if any.
    ///
    /// # Remarks
    ///
    /// Brokers typically limit the size of a message. Enforcing the limit before a message is
    /// sent reports an oversized body to the sender rather than the broker.
    #[serde(alias = "MaxBodySize")]
    pub max_body_size: Option<usize>,
}
