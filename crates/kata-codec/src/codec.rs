use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CodecError;

/// Encode a value as JSON text.
///
/// Map keys keep the value's own order: struct fields in declaration order,
/// [`Value`] objects in insertion order.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if the value cannot be represented, such as
/// a map whose keys are not strings.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Parse JSON text into a plain structured record.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] if `text` is not well-formed JSON.
pub fn parse(text: &str) -> Result<Value, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Parse)
}

/// Bind a plain record to the type `T`, which supplies its behavior.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] if the record's fields do not fit `T`.
pub fn bind<T: DeserializeOwned>(record: Value) -> Result<T, CodecError> {
    serde_json::from_value(record).map_err(CodecError::Shape)
}

/// Parse JSON text and bind it to the type `T`.
///
/// # Errors
///
/// - [`CodecError::Parse`] if `text` is not well-formed JSON.
/// - [`CodecError::Shape`] if the parsed fields do not fit `T`.
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    bind(parse(text)?)
}
