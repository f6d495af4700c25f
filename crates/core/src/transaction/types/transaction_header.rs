use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use super::{TransactionStatus, Trx};
use crate::transaction::normalizer::Normalizer;

/// A node's receipt for a submitted or fetched transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TransactionHeader {
    pub status: TransactionStatus,

    pub cpu_usage_us: u64,

    pub net_usage_words: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trx: Option<Trx>,
}

impl<'de> Deserialize<'de> for TransactionHeader {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Normalizer::default().decode_header(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}
