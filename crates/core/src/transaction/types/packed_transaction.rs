use serde::Serialize;

use super::RawAction;
use crate::shared::common_types::Time;

/// A transaction body ready for signature attachment and broadcast.
///
/// Only obtainable by projecting a [`super::RawTransaction`]; signatures
/// travel alongside it, never inside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedTransaction {
    pub(crate) expiration: Time,
    pub(crate) ref_block_num: u16,
    pub(crate) ref_block_prefix: u32,
    pub(crate) max_net_usage_words: u32,
    pub(crate) max_cpu_usage_ms: u32,
    pub(crate) delay_sec: u32,
    pub(crate) context_free_actions: Vec<RawAction>,
    pub(crate) actions: Vec<RawAction>,
    pub(crate) context_free_data: Vec<serde_json::Value>,
    pub(crate) transaction_extensions: Vec<serde_json::Value>,
}

impl PackedTransaction {
    pub fn expiration(&self) -> Time {
        self.expiration
    }

    pub fn ref_block_num(&self) -> u16 {
        self.ref_block_num
    }

    pub fn ref_block_prefix(&self) -> u32 {
        self.ref_block_prefix
    }

    pub fn max_net_usage_words(&self) -> u32 {
        self.max_net_usage_words
    }

    pub fn max_cpu_usage_ms(&self) -> u32 {
        self.max_cpu_usage_ms
    }

    pub fn delay_sec(&self) -> u32 {
        self.delay_sec
    }

    pub fn context_free_actions(&self) -> &[RawAction] {
        &self.context_free_actions
    }

    pub fn actions(&self) -> &[RawAction] {
        &self.actions
    }

    pub fn context_free_data(&self) -> &[serde_json::Value] {
        &self.context_free_data
    }

    pub fn transaction_extensions(&self) -> &[serde_json::Value] {
        &self.transaction_extensions
    }
}
