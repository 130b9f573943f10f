use super::{Encoding, Json};
use serde::Deserialize;
use std::sync::Arc;

/// Represents the supported [encoding](Encoding) formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingFormat {
    /// Indicates Java Script Object Notation (JSON).
    #[default]
    #[serde(alias = "Json", alias = "JSON")]
    Json,

    /// Indicates Concise Binary Object Representation (CBOR).
    #[cfg(feature = "cbor")]
    #[serde(alias = "Cbor", alias = "CBOR")]
    Cbor,

    /// Indicates MessagePack.
    #[cfg(feature = "message-pack")]
    #[serde(alias = "MessagePack", alias = "message_pack")]
    MessagePack,
}

impl EncodingFormat {
    /// Creates and returns the [encoding](Encoding) for the format.
    pub fn encoding(&self) -> Arc<dyn Encoding> {
        match self {
            Self::Json => Arc::new(Json),
            #[cfg(feature = "cbor")]
            Self::Cbor => Arc::new(super::Cbor),
            #[cfg(feature = "message-pack")]
            Self::MessagePack => Arc::new(super::MessagePack),
        }
    }
}
