use serde::Deserialize;
use serde_json::value::RawValue;

// Each field is captured undecoded so it can be decoded on its own and any
// failure attributed to it by name. A JSON `null` reads as absent.

#[derive(Deserialize)]
pub(super) struct HeaderShadow<'a> {
    #[serde(borrow)]
    pub status: Option<&'a RawValue>,
    #[serde(borrow)]
    pub cpu_usage_us: Option<&'a RawValue>,
    #[serde(borrow)]
    pub net_usage_words: Option<&'a RawValue>,
    #[serde(borrow)]
    pub trx: Option<&'a RawValue>,
}

#[derive(Deserialize)]
pub(super) struct TrxShadow<'a> {
    #[serde(borrow)]
    pub id: Option<&'a RawValue>,
    #[serde(borrow)]
    pub signatures: Option<&'a RawValue>,
    #[serde(borrow)]
    pub compression: Option<&'a RawValue>,
    #[serde(borrow)]
    pub packed_context_free_data: Option<&'a RawValue>,
    #[serde(borrow)]
    pub packed_trx: Option<&'a RawValue>,
    #[serde(borrow)]
    pub transaction: Option<&'a RawValue>,
}

#[derive(Deserialize)]
pub(super) struct TransactionShadow<'a> {
    #[serde(borrow)]
    pub expiration: Option<&'a RawValue>,
    #[serde(borrow)]
    pub ref_block_num: Option<&'a RawValue>,
    #[serde(borrow)]
    pub ref_block_prefix: Option<&'a RawValue>,
    #[serde(borrow)]
    pub max_net_usage_words: Option<&'a RawValue>,
    #[serde(borrow)]
    pub max_cpu_usage_ms: Option<&'a RawValue>,
    #[serde(borrow)]
    pub delay_sec: Option<&'a RawValue>,
    #[serde(borrow)]
    pub context_free_actions: Option<&'a RawValue>,
    #[serde(borrow)]
    pub actions: Option<&'a RawValue>,
    #[serde(borrow)]
    pub context_free_data: Option<&'a RawValue>,
    #[serde(borrow)]
    pub transaction_extensions: Option<&'a RawValue>,
}
