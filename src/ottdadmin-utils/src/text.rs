//! Normalization between text and byte strings.
//!
//! Protocol payloads carry strings as raw bytes, while most callers
//! prefer working with text. [`ensure_binary`] and [`ensure_text`]
//! accept either form and hand back the requested one, encoding or
//! decoding only when needed.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Either a text string or a byte string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrOrBytes<'a> {
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
}

impl<'a> From<&'a str> for StrOrBytes<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for StrOrBytes<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for StrOrBytes<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a [u8]> for StrOrBytes<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(Cow::Borrowed(value))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StrOrBytes<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(Cow::Borrowed(value))
    }
}

impl From<Vec<u8>> for StrOrBytes<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, [u8]>> for StrOrBytes<'a> {
    fn from(value: Cow<'a, [u8]>) -> Self {
        Self::Bytes(value)
    }
}

impl TryFrom<Value> for StrOrBytes<'_> {
    type Error = Error;

    /// Strings become text and arrays of byte values become bytes.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Text(Cow::Owned(s))),
            Value::Array(values) => values
                .iter()
                .map(|v| v.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(|bytes| Self::Bytes(Cow::Owned(bytes)))
                .ok_or(Error::UnexpectedType("array")),

            Value::Null => Err(Error::UnexpectedType("null")),
            Value::Bool(_) => Err(Error::UnexpectedType("bool")),
            Value::Number(_) => Err(Error::UnexpectedType("number")),
            Value::Object(_) => Err(Error::UnexpectedType("object")),
        }
    }
}

/// Supported character encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl Encoding {
    /// Gets the canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin-1",
        }
    }

    /// The highest code point representable by a single-byte encoding.
    fn max_char(self) -> Option<u32> {
        match self {
            Self::Utf8 => None,
            Self::Ascii => Some(0x7F),
            Self::Latin1 => Some(0xFF),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "utf8" | "u8" => Ok(Self::Utf8),
            "ascii" | "usascii" | "646" => Ok(Self::Ascii),
            "latin1" | "latin" | "l1" | "iso88591" | "cp819" => Ok(Self::Latin1),
            _ => Err(Error::UnknownEncoding(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Encoding> for &'static str {
    fn from(value: Encoding) -> Self {
        value.name()
    }
}

/// Policies for handling characters or bytes a codec cannot process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Errors {
    /// Fail on the first offending character or byte.
    #[default]
    Strict,
    /// Drop offending characters or bytes.
    Ignore,
    /// Substitute `?` when encoding and U+FFFD when decoding.
    Replace,
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Ignore => "ignore",
            Self::Replace => "replace",
        })
    }
}

impl FromStr for Errors {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "ignore" => Ok(Self::Ignore),
            "replace" => Ok(Self::Replace),
            _ => Err(Error::UnknownErrorPolicy(s.to_owned())),
        }
    }
}

/// Gets `value` as bytes, encoding text with `encoding`.
///
/// Byte strings are returned unchanged.
pub fn ensure_binary<'a>(
    value: impl Into<StrOrBytes<'a>>,
    encoding: Encoding,
    errors: Errors,
) -> Result<Cow<'a, [u8]>, Error> {
    match value.into() {
        StrOrBytes::Text(text) => encode(text, encoding, errors),
        StrOrBytes::Bytes(bytes) => Ok(bytes),
    }
}

/// Gets `value` as text, decoding bytes with `encoding`.
///
/// Text strings are returned unchanged.
pub fn ensure_text<'a>(
    value: impl Into<StrOrBytes<'a>>,
    encoding: Encoding,
    errors: Errors,
) -> Result<Cow<'a, str>, Error> {
    match value.into() {
        StrOrBytes::Bytes(bytes) => decode(bytes, encoding, errors),
        StrOrBytes::Text(text) => Ok(text),
    }
}

fn encode(text: Cow<'_, str>, encoding: Encoding, errors: Errors) -> Result<Cow<'_, [u8]>, Error> {
    let Some(max) = encoding.max_char() else {
        return Ok(match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        });
    };

    // ASCII text is valid in every supported encoding as-is.
    if text.is_ascii() {
        return Ok(match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        });
    }

    let mut out = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let code = u32::from(character);
        if code <= max {
            out.push(code as u8);
            continue;
        }

        match errors {
            Errors::Strict => {
                return Err(Error::Encode {
                    encoding,
                    position,
                    character,
                })
            }
            Errors::Ignore => {}
            Errors::Replace => out.push(b'?'),
        }
    }

    Ok(Cow::Owned(out))
}

fn decode(bytes: Cow<'_, [u8]>, encoding: Encoding, errors: Errors) -> Result<Cow<'_, str>, Error> {
    match encoding {
        Encoding::Utf8 => decode_utf8(bytes, errors),
        Encoding::Ascii => decode_ascii(bytes, errors),
        Encoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
    }
}

fn decode_utf8(bytes: Cow<'_, [u8]>, errors: Errors) -> Result<Cow<'_, str>, Error> {
    match bytes {
        Cow::Borrowed(b) => match std::str::from_utf8(b) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(e) => recover_utf8(b, e, errors).map(Cow::Owned),
        },
        Cow::Owned(b) => match String::from_utf8(b) {
            Ok(s) => Ok(Cow::Owned(s)),
            Err(e) => {
                let utf8_error = e.utf8_error();
                recover_utf8(e.as_bytes(), utf8_error, errors).map(Cow::Owned)
            }
        },
    }
}

fn recover_utf8(bytes: &[u8], error: std::str::Utf8Error, errors: Errors) -> Result<String, Error> {
    match errors {
        Errors::Strict => {
            let position = error.valid_up_to();
            Err(Error::Decode {
                encoding: Encoding::Utf8,
                position,
                byte: bytes[position],
            })
        }
        Errors::Ignore => Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()),
        Errors::Replace => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn decode_ascii(bytes: Cow<'_, [u8]>, errors: Errors) -> Result<Cow<'_, str>, Error> {
    if bytes.is_ascii() {
        return Ok(match bytes {
            Cow::Borrowed(b) => Cow::Borrowed(ascii_str(b)),
            Cow::Owned(b) => Cow::Owned(ascii_str(&b).to_owned()),
        });
    }

    let mut out = String::with_capacity(bytes.len());
    for (position, &byte) in bytes.iter().enumerate() {
        if byte.is_ascii() {
            out.push(char::from(byte));
            continue;
        }

        match errors {
            Errors::Strict => {
                return Err(Error::Decode {
                    encoding: Encoding::Ascii,
                    position,
                    byte,
                })
            }
            Errors::Ignore => {}
            Errors::Replace => out.push(char::REPLACEMENT_CHARACTER),
        }
    }

    Ok(Cow::Owned(out))
}

fn ascii_str(bytes: &[u8]) -> &str {
    // Every ASCII byte sequence is valid UTF-8.
    std::str::from_utf8(bytes).unwrap_or_default()
}
