use super::InvalidMessageBody;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Represents the parameters of a [message](super::Message).
///
/// # Remarks
///
/// Parameters are the payload of an [envelope](crate::Envelope) and are opaque to the codec.
pub type Params = Map<String, Value>;

/// Converts the specified value into message [parameters](Params).
///
/// # Arguments
///
/// * `value` - the value to convert
///
/// # Remarks
///
/// The value must serialize as a map with string keys.
pub fn to_params<T: Serialize + ?Sized>(value: &T) -> Result<Params, InvalidMessageBody> {
    match serde_json::to_value(value)? {
        Value::Object(params) => Ok(params),
        other => Err(InvalidMessageBody::new(format!(
            "message parameters must be a map, but found {}",
            describe(&other)
        ))),
    }
}

/// Converts the specified message [parameters](Params) into a value.
///
/// # Arguments
///
/// * `params` - the parameters to convert
pub fn from_params<T: DeserializeOwned>(params: Params) -> Result<T, InvalidMessageBody> {
    Ok(serde_json::from_value(Value::Object(params))?)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}

/// Provides extension functions to read message [parameters](Params).
pub trait ParamsExt {
    /// Gets a required parameter.
    ///
    /// # Arguments
    ///
    /// * `key` - the key of the parameter to get
    ///
    /// # Returns
    ///
    /// The parameter value; otherwise, an [error](InvalidMessageBody) if the parameter is
    /// missing or cannot be converted into the requested type.
    fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, InvalidMessageBody>;

    /// Gets an optional parameter.
    ///
    /// # Arguments
    ///
    /// * `key` - the key of the parameter to get
    ///
    /// # Remarks
    ///
    /// A parameter with a `null` value is treated the same as a missing parameter.
    fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, InvalidMessageBody>;
}

impl ParamsExt for Params {
    fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, InvalidMessageBody> {
        self.optional(key)?
            .ok_or_else(|| InvalidMessageBody::missing(key))
    }

    fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, InvalidMessageBody> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|error| InvalidMessageBody::invalid(key, error.to_string())),
        }
    }
}
