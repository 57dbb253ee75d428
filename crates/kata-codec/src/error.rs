use thiserror::Error;

/// Errors raised while encoding or decoding values.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be encoded, e.g. a map with non-string keys.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text is not well-formed serialized data.
    #[error("malformed input: {0}")]
    Parse(#[source] serde_json::Error),

    /// The text parsed, but its fields do not fit the requested type.
    #[error("input does not fit the requested type: {0}")]
    Shape(#[source] serde_json::Error),
}
