use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Action;
use crate::shared::common_types::Time;

/// The structured transaction body, with actions in their decoded form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Transaction {
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
    pub context_free_actions: Vec<Action>,

    #[serde(default)]
    pub actions: Vec<Action>,

    #[serde(default)]
    pub context_free_data: Vec<serde_json::Value>,

    #[serde(default)]
    pub transaction_extensions: Vec<serde_json::Value>,
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transaction ref_block {}/{} expires {} ({} actions)",
            self.ref_block_num,
            self.ref_block_prefix,
            self.expiration,
            self.actions.len()
        )
    }
}
