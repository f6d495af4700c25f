#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HexDecodeError {
    #[error("Hex content has an odd number of digits")]
    OddLength,

    #[error("Invalid hex character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },
}

impl From<hex::FromHexError> for HexDecodeError {
    fn from(error: hex::FromHexError) -> Self {
        match error {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                HexDecodeError::InvalidCharacter { c, index }
            }
            // decode into Vec never reports a length mismatch
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                HexDecodeError::OddLength
            }
        }
    }
}
