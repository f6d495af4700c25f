mod hex_decode_error;
pub use hex_decode_error::HexDecodeError;

mod permission_level;
pub use permission_level::PermissionLevel;

mod raw_bytes;
pub use raw_bytes::RawBytes;

mod time;
pub use time::{ParseTimeError, Time};
