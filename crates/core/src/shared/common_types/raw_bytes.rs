use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use bytes::Bytes;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use super::HexDecodeError;

/// Content of a byte-valued envelope field with its JSON quoting removed.
///
/// The bytes are kept exactly as they appeared between the quotes: escape
/// sequences are not interpreted.
#[derive(Debug, Clone, Eq, Default)]
pub struct RawBytes(Bytes);

impl RawBytes {
    pub fn new(data: Bytes) -> Self {
        Self(data)
    }

    pub fn empty() -> Self {
        Self(Bytes::new())
    }

    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(data))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Bytes {
        self.0
    }

    /// The content as text, when it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Decodes the content as a hex string, as nodes send packed bodies.
    pub fn decode_hex(&self) -> Result<Vec<u8>, HexDecodeError> {
        if self.0.is_empty() {
            return Ok(Vec::new());
        }

        hex::decode(&self.0).map_err(HexDecodeError::from)
    }
}

impl Hash for RawBytes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq for RawBytes {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<[u8]> for RawBytes {
    fn eq(&self, other: &[u8]) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RawBytes {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl Display for RawBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl FromStr for RawBytes {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<Bytes> for RawBytes {
    fn from(data: Bytes) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for RawBytes {
    fn from(data: &[u8]) -> Self {
        Self::copy_from_slice(data)
    }
}

impl From<RawBytes> for Bytes {
    fn from(data: RawBytes) -> Self {
        data.0
    }
}

impl Serialize for RawBytes {
    /// Writes the content back between quotes as-is; it is still JSON string
    /// text, so escaping it again would change it.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = std::str::from_utf8(&self.0).map_err(serde::ser::Error::custom)?;
        let token = RawValue::from_string(format!("\"{}\"", text))
            .map_err(serde::ser::Error::custom)?;
        token.serialize(serializer)
    }
}
