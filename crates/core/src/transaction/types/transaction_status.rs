use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Execution status reported in a transaction receipt.
///
/// Statuses this crate does not know are kept as `Unknown` rather than
/// rejected, so newer nodes do not break decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Executed,
    SoftFail,
    HardFail,
    Delayed,
    Expired,
    Unknown(String),
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Executed => "executed",
            TransactionStatus::SoftFail => "soft_fail",
            TransactionStatus::HardFail => "hard_fail",
            TransactionStatus::Delayed => "delayed",
            TransactionStatus::Expired => "expired",
            TransactionStatus::Unknown(status) => status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionStatus::Executed)
    }
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Unknown(String::new())
    }
}

impl From<&str> for TransactionStatus {
    fn from(status: &str) -> Self {
        match status {
            "executed" => TransactionStatus::Executed,
            "soft_fail" => TransactionStatus::SoftFail,
            "hard_fail" => TransactionStatus::HardFail,
            "delayed" => TransactionStatus::Delayed,
            "expired" => TransactionStatus::Expired,
            other => TransactionStatus::Unknown(other.to_string()),
        }
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let status = String::deserialize(deserializer)?;
        Ok(TransactionStatus::from(status.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        let status: TransactionStatus = serde_json::from_str("\"hard_fail\"").unwrap();
        assert_eq!(status, TransactionStatus::HardFail);
        assert!(!status.is_success());
        assert!(TransactionStatus::from("executed").is_success());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: TransactionStatus = serde_json::from_str("\"pending_review\"").unwrap();
        assert_eq!(status, TransactionStatus::Unknown("pending_review".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"pending_review\"");
    }
}
