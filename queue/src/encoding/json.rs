use super::{Encoding, EncodingError};
use crate::Envelope;
use std::sync::Arc;

/// Represents an envelope encoding using Java Script Object Notion (JSON).
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

impl Json {
    /// Initializes a new [JSON](Json) envelope encoding.
    pub fn new() -> Self {
        Self
    }
}

impl From<Json> for Arc<dyn Encoding> {
    fn from(value: Json) -> Self {
        Arc::new(value)
    }
}

impl Encoding for Json {
    fn name(&self) -> &str {
        "json"
    }

    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodingError> {
        serde_json::to_vec(envelope).map_err(EncodingError::failed)
    }

    fn decode(&self, body: &[u8]) -> Result<Envelope, EncodingError> {
        serde_json::from_slice(body).map_err(EncodingError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Kind, Params};
    use serde_json::json;

    #[test]
    fn json_should_encode_type_and_payload() {
        // arrange
        let mut payload = Params::new();
        payload.insert("template".into(), json!("v1"));
        let envelope = Envelope::new("WelcomeEmail", payload);

        // act
        let body = Json.encode(&envelope).unwrap();

        // assert
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"type":"WelcomeEmail","payload":{"template":"v1"}}"#
        );
    }

    #[test]
    fn json_should_decode_legacy_body() {
        // arrange
        let body = br#"{"className":"App\\Message\\WelcomeEmail","message":{"template":"v1"}}"#;

        // act
        let envelope = Json.decode(body).unwrap();

        // assert
        assert_eq!(envelope.kind(), &Kind::new("App\\Message\\WelcomeEmail"));
    }

    #[test]
    fn json_should_fail_to_decode_malformed_body() {
        // arrange
        let body = b"not json";

        // act
        let result = Json.decode(body);

        // assert
        assert!(matches!(result, Err(EncodingError::Failed(_))));
    }
}
