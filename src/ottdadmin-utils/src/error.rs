use thiserror::Error;

use crate::text::Encoding;

/// Errors produced by the utilities in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A dynamically typed value was neither text nor bytes.
    #[error("not expecting type '{0}'")]
    UnexpectedType(&'static str),

    /// The requested text encoding is not supported.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The requested error handling policy is not supported.
    #[error("unknown error handler name '{0}'")]
    UnknownErrorPolicy(String),

    /// A character cannot be represented in the target encoding.
    #[error("'{encoding}' codec can't encode character {character:?} in position {position}")]
    Encode {
        encoding: Encoding,
        position: usize,
        character: char,
    },

    /// A byte sequence is invalid in the source encoding.
    #[error("'{encoding}' codec can't decode byte {byte:#04x} in position {position}")]
    Decode {
        encoding: Encoding,
        position: usize,
        byte: u8,
    },

    /// A value could not be assigned to a record field.
    #[error("invalid value for field '{name}': {source}")]
    Field {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A string is neither a game date code nor a calendar date.
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}
