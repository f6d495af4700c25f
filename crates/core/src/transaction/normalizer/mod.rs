mod error;
pub use error::{DecodeError, FieldPath};

mod shadow;
use shadow::{HeaderShadow, TransactionShadow, TrxShadow};

mod strip;
pub use strip::strip_quotes;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::value::RawValue;
use tracing::{debug, warn};

use super::types::{
    Transaction, TransactionHeader, TransactionStatus, Trx, TrxId, DEFAULT_COMPRESSION,
};
use crate::{shared::common_types::RawBytes, yaml::NormalizerConfig};

/// Decodes node JSON into the canonical envelope types.
///
/// Stateless apart from its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Decodes a `trx` object.
    ///
    /// # Returns
    /// * `Ok(Trx)` - With byte fields unquoted and a string or object `id`
    /// * `Err(DecodeError)` - Naming the first field that failed to decode
    pub fn decode_trx(&self, payload: &[u8]) -> Result<Trx, DecodeError> {
        self.normalize_trx(payload, &FieldPath::root()).map_err(|error| {
            warn!("Rejected trx payload: {}", error);
            error
        })
    }

    /// Decodes a transaction receipt including its embedded `trx`.
    ///
    /// Field paths in errors are relative to the receipt, so a bad action
    /// list is reported at `trx.transaction.actions`.
    pub fn decode_header(&self, payload: &[u8]) -> Result<TransactionHeader, DecodeError> {
        self.normalize_header(payload, &FieldPath::root()).map_err(|error| {
            warn!("Rejected transaction header payload: {}", error);
            error
        })
    }

    fn normalize_header(
        &self,
        payload: &[u8],
        path: &FieldPath,
    ) -> Result<TransactionHeader, DecodeError> {
        let shadow: HeaderShadow<'_> = shadow_of(payload, path)?;

        let status: TransactionStatus = decode_field(shadow.status, &path.join("status"))?;
        let cpu_usage_us = decode_field(shadow.cpu_usage_us, &path.join("cpu_usage_us"))?;
        let net_usage_words = decode_field(shadow.net_usage_words, &path.join("net_usage_words"))?;

        let trx_path = path.join("trx");
        let trx = match shadow.trx {
            Some(raw) => Some(self.normalize_trx(raw.get().as_bytes(), &trx_path)?),
            None if self.config.require_trx_on_success && status.is_success() => {
                return Err(DecodeError::MissingField { field: trx_path });
            }
            None => None,
        };

        Ok(TransactionHeader { status, cpu_usage_us, net_usage_words, trx })
    }

    fn normalize_trx(&self, payload: &[u8], path: &FieldPath) -> Result<Trx, DecodeError> {
        let shadow: TrxShadow<'_> = shadow_of(payload, path)?;

        let id = self.normalize_id(shadow.id, &path.join("id"))?;
        let signatures = decode_field(shadow.signatures, &path.join("signatures"))?;
        let compression: Option<String> =
            decode_field(shadow.compression, &path.join("compression"))?;
        let packed_context_free_data = self.normalize_bytes(
            shadow.packed_context_free_data,
            &path.join("packed_context_free_data"),
        )?;
        let packed_trx = self.normalize_bytes(shadow.packed_trx, &path.join("packed_trx"))?;

        let transaction_path = path.join("transaction");
        let transaction = match shadow.transaction {
            Some(raw) => normalize_transaction(raw.get().as_bytes(), &transaction_path)?,
            None => Transaction::default(),
        };

        Ok(Trx {
            id,
            signatures,
            compression: compression.unwrap_or_else(|| DEFAULT_COMPRESSION.to_string()),
            packed_context_free_data,
            packed_trx,
            transaction,
        })
    }

    /// Strictly decodes `id` as a string; a type mismatch on this field alone
    /// falls back to keeping its raw bytes.
    fn normalize_id(
        &self,
        raw: Option<&RawValue>,
        path: &FieldPath,
    ) -> Result<TrxId, DecodeError> {
        let Some(raw) = raw else {
            return Ok(TrxId::default());
        };

        match serde_json::from_str::<String>(raw.get()) {
            Ok(_) => Ok(TrxId::Hex(self.unquote(raw, path))),
            Err(error) if error.is_data() && self.config.tolerate_structured_id => {
                debug!("{} is not a string, keeping its raw bytes: {}", path, error);
                Ok(TrxId::Structured(RawBytes::copy_from_slice(raw.get().as_bytes())))
            }
            Err(error) => Err(DecodeError::malformed(path, error)),
        }
    }

    fn normalize_bytes(
        &self,
        raw: Option<&RawValue>,
        path: &FieldPath,
    ) -> Result<RawBytes, DecodeError> {
        let Some(raw) = raw else {
            return Ok(RawBytes::empty());
        };

        serde_json::from_str::<String>(raw.get())
            .map_err(|error| DecodeError::malformed(path, error))?;

        Ok(self.unquote(raw, path))
    }

    fn unquote(&self, raw: &RawValue, path: &FieldPath) -> RawBytes {
        let bytes = raw.get().as_bytes();
        let stripped = strip_quotes(bytes, self.config.quote_stripping);

        if bytes.len() >= 2 && stripped.len() == bytes.len() {
            debug!("{} is not quoted, keeping it as is", path);
        }

        RawBytes::copy_from_slice(stripped)
    }
}

fn normalize_transaction(payload: &[u8], path: &FieldPath) -> Result<Transaction, DecodeError> {
    let shadow: TransactionShadow<'_> = shadow_of(payload, path)?;

    Ok(Transaction {
        expiration: decode_field(shadow.expiration, &path.join("expiration"))?,
        ref_block_num: decode_field(shadow.ref_block_num, &path.join("ref_block_num"))?,
        ref_block_prefix: decode_field(shadow.ref_block_prefix, &path.join("ref_block_prefix"))?,
        max_net_usage_words: decode_field(
            shadow.max_net_usage_words,
            &path.join("max_net_usage_words"),
        )?,
        max_cpu_usage_ms: decode_field(shadow.max_cpu_usage_ms, &path.join("max_cpu_usage_ms"))?,
        delay_sec: decode_field(shadow.delay_sec, &path.join("delay_sec"))?,
        context_free_actions: decode_field(
            shadow.context_free_actions,
            &path.join("context_free_actions"),
        )?,
        actions: decode_field(shadow.actions, &path.join("actions"))?,
        context_free_data: decode_field(shadow.context_free_data, &path.join("context_free_data"))?,
        transaction_extensions: decode_field(
            shadow.transaction_extensions,
            &path.join("transaction_extensions"),
        )?,
    })
}

fn shadow_of<'a, T>(payload: &'a [u8], path: &FieldPath) -> Result<T, DecodeError>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(payload).map_err(|error| DecodeError::malformed(path, error))
}

fn decode_field<T>(raw: Option<&RawValue>, path: &FieldPath) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    match raw {
        Some(raw) => {
            serde_json::from_str(raw.get()).map_err(|error| DecodeError::malformed(path, error))
        }
        None => Ok(T::default()),
    }
}
