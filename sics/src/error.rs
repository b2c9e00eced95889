use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The value at `position` (counting values, not bytes) has no code in the mapping,
    /// which happens when the mapping was not built for the text being encoded.
    #[error("value {value} at position {position} has no code in the mapping")]
    UnmappedValue { position: usize, value: String },
    /// Two values share the same `code`, so the mapping cannot be inverted.
    #[error("code {code} is assigned to both {first} and {second}")]
    NonInjective { code: String, first: String, second: String },
    /// The string is not a valid code.
    #[error("malformed code: {0:?}")]
    MalformedCode(String),
    /// The `code` that begins at `position` (counting symbols of the stream) has no value in the mapping.
    /// Reported only by strict decoding.
    #[error("unknown code {code:?} at position {position}")]
    UnknownCode { position: usize, code: String },
}
