use std::fmt::Display;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use super::{Transaction, TrxId};
use crate::{
    shared::common_types::{HexDecodeError, RawBytes},
    transaction::normalizer::Normalizer,
};

pub const DEFAULT_COMPRESSION: &str = "none";

/// The canonical form of a transaction envelope's `trx` payload.
///
/// `id`, `packed_context_free_data` and `packed_trx` hold the field content
/// without its JSON quotes, however the node sent them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trx {
    pub id: TrxId,

    pub signatures: Vec<String>,

    pub compression: String,

    pub packed_context_free_data: RawBytes,

    pub packed_trx: RawBytes,

    pub transaction: Transaction,
}

impl Trx {
    /// Decodes the packed body hex into bytes.
    pub fn packed_trx_bytes(&self) -> Result<Vec<u8>, HexDecodeError> {
        self.packed_trx.decode_hex()
    }

    /// Decodes the packed context-free data hex into bytes.
    pub fn packed_context_free_data_bytes(&self) -> Result<Vec<u8>, HexDecodeError> {
        self.packed_context_free_data.decode_hex()
    }
}

impl Default for Trx {
    fn default() -> Self {
        Self {
            id: TrxId::default(),
            signatures: Vec::new(),
            compression: DEFAULT_COMPRESSION.to_string(),
            packed_context_free_data: RawBytes::empty(),
            packed_trx: RawBytes::empty(),
            transaction: Transaction::default(),
        }
    }
}

impl Display for Trx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trx {}", self.id)
    }
}

impl<'de> Deserialize<'de> for Trx {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Normalizer::default().decode_trx(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}
