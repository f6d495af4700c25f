use std::fmt::Display;

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::shared::common_types::RawBytes;

/// A transaction identifier as the node sent it.
///
/// Most endpoints send a quoted hex string; some node versions send a
/// structured object instead. The object is kept verbatim and never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrxId {
    /// The unquoted content of a JSON string token.
    Hex(RawBytes),
    /// The exact input bytes of a non-string JSON value.
    Structured(RawBytes),
}

impl TrxId {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            TrxId::Hex(raw) | TrxId::Structured(raw) => raw.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, TrxId::Structured(_))
    }

    pub fn raw(&self) -> &RawBytes {
        match self {
            TrxId::Hex(raw) | TrxId::Structured(raw) => raw,
        }
    }
}

impl Default for TrxId {
    fn default() -> Self {
        TrxId::Hex(RawBytes::empty())
    }
}

impl Display for TrxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl Serialize for TrxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TrxId::Hex(raw) => raw.serialize(serializer),
            TrxId::Structured(raw) => {
                let text = std::str::from_utf8(raw.as_bytes()).map_err(serde::ser::Error::custom)?;
                let value =
                    RawValue::from_string(text.to_string()).map_err(serde::ser::Error::custom)?;
                value.serialize(serializer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_id_serializes_verbatim() {
        let id = TrxId::Structured(r#"{ "block_num": 5812,  "trx_id": "abc" }"#.parse().unwrap());
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, r#"{ "block_num": 5812,  "trx_id": "abc" }"#);
    }

    #[test]
    fn test_hex_id_serializes_as_string() {
        let id = TrxId::Hex("abc123".parse().unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }
}
