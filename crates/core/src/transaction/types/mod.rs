mod action;
pub use action::{Action, RawAction};

mod transaction;
pub use transaction::Transaction;

mod raw_transaction;
pub use raw_transaction::RawTransaction;

mod packed_transaction;
pub use packed_transaction::PackedTransaction;

mod trx_id;
pub use trx_id::TrxId;

mod trx;
pub use trx::{Trx, DEFAULT_COMPRESSION};

mod transaction_status;
pub use transaction_status::TransactionStatus;

mod transaction_header;
pub use transaction_header::TransactionHeader;
