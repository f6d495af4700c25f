use serde::{Deserialize, Serialize};

use super::RawAction;
use crate::shared::common_types::Time;

/// A transaction being built for submission: actions are already serialized
/// but the body is not yet packed.
///
/// Field order matches the node's JSON schema and is kept on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawTransaction {
    #[serde(default)]
    pub expiration: Time,

    #[serde(default)]
    pub ref_block_num: u16,

    #[serde(default)]
    pub ref_block_prefix: u32,

    #[serde(default)]
    pub max_net_usage_words: u32,

    #[serde(default)]
    pub max_cpu_usage_ms: u32,

    #[serde(default)]
    pub delay_sec: u32,

    #[serde(default)]
    pub context_free_actions: Vec<RawAction>,

    #[serde(default)]
    pub actions: Vec<RawAction>,

    #[serde(default)]
    pub context_free_data: Vec<serde_json::Value>,

    #[serde(default)]
    pub transaction_extensions: Vec<serde_json::Value>,

    #[serde(default)]
    pub signatures: Vec<String>,
}
