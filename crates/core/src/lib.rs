//! Tolerant decoding of node transaction envelopes.
//!
//! [`Normalizer`] turns node JSON into [`Trx`] and [`TransactionHeader`]
//! values whose byte fields are unquoted and whose `id` may be a string or
//! an object. [`project`] turns a [`RawTransaction`] into the
//! [`PackedTransaction`] sent for broadcast.

mod logger;
pub use logger::{setup_info_logger, setup_logger};
mod shared;
pub use shared::common_types;
pub mod transaction;
pub use transaction::{
    project,
    types::{
        Action, PackedTransaction, RawAction, RawTransaction, Transaction, TransactionHeader,
        TransactionStatus, Trx, TrxId,
    },
    DecodeError, FieldPath, Normalizer,
};
mod yaml;
pub use yaml::{from_yaml_str, read, NormalizerConfig, QuoteStripping, ReadConfigError};

/// Decodes a `trx` object with the default [`NormalizerConfig`].
pub fn decode_trx(payload: &[u8]) -> Result<Trx, DecodeError> {
    Normalizer::default().decode_trx(payload)
}

/// Decodes a transaction receipt with the default [`NormalizerConfig`].
pub fn decode_header(payload: &[u8]) -> Result<TransactionHeader, DecodeError> {
    Normalizer::default().decode_header(payload)
}
