use super::types::{PackedTransaction, RawTransaction};

/// Projects a raw transaction onto its packed form, dropping signatures.
///
/// Total: every other field is moved across as-is, actions included.
pub fn project(raw: RawTransaction) -> PackedTransaction {
    raw.into()
}

impl RawTransaction {
    /// Splits off the signatures so they can be attached next to the packed
    /// body when broadcasting.
    pub fn into_packed(mut self) -> (PackedTransaction, Vec<String>) {
        let signatures = std::mem::take(&mut self.signatures);
        (self.into(), signatures)
    }
}

impl From<RawTransaction> for PackedTransaction {
    fn from(raw: RawTransaction) -> Self {
        let RawTransaction {
            expiration,
            ref_block_num,
            ref_block_prefix,
            max_net_usage_words,
            max_cpu_usage_ms,
            delay_sec,
            context_free_actions,
            actions,
            context_free_data,
            transaction_extensions,
            signatures: _,
        } = raw;

        PackedTransaction {
            expiration,
            ref_block_num,
            ref_block_prefix,
            max_net_usage_words,
            max_cpu_usage_ms,
            delay_sec,
            context_free_actions,
            actions,
            context_free_data,
            transaction_extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{
        shared::common_types::{PermissionLevel, Time},
        transaction::types::RawAction,
    };

    fn raw_transaction() -> RawTransaction {
        RawTransaction {
            expiration: Time::from_str("2019-03-01T12:00:00").unwrap(),
            ref_block_num: 4242,
            ref_block_prefix: 1_234_567_890,
            max_net_usage_words: 0,
            max_cpu_usage_ms: 0,
            delay_sec: 0,
            context_free_actions: vec![RawAction::new("eosio.null", "nonce", vec![], b"\x01")],
            actions: vec![
                RawAction::new(
                    "eosio.token",
                    "transfer",
                    vec![PermissionLevel::new("alice", "active")],
                    &[0x00, 0x00, 0x00, 0x00, 0x00, 0x85, 0x5c, 0x34],
                ),
                RawAction::new(
                    "eosio",
                    "buyram",
                    vec![PermissionLevel::new("alice", "owner")],
                    &[0x10, 0x20],
                ),
            ],
            context_free_data: vec![serde_json::json!("00ff")],
            transaction_extensions: vec![serde_json::json!([1, "ab"])],
            signatures: vec![
                "SIG_K1_KfQ57wLFFmvUpGAscmYZ5cp7w6ejeLZ3dBFSNkZjvzXz1b6m".to_string(),
                "SIG_K1_Jxs3PQq2xMspwJ5z7bGJk7xXy2pX1V1FSoUh1m9E7FgUu8Zk".to_string(),
            ],
        }
    }

    #[test]
    fn test_project_keeps_actions_in_order() {
        let raw = raw_transaction();
        let packed = project(raw.clone());

        assert_eq!(packed.actions(), raw.actions.as_slice());
        assert_eq!(packed.context_free_actions(), raw.context_free_actions.as_slice());
        assert_eq!(packed.actions()[0].name, "transfer");
        assert_eq!(packed.actions()[1].name, "buyram");
    }

    #[test]
    fn test_project_copies_header_fields() {
        let raw = raw_transaction();
        let packed = project(raw.clone());

        assert_eq!(packed.expiration(), raw.expiration);
        assert_eq!(packed.ref_block_num(), 4242);
        assert_eq!(packed.ref_block_prefix(), 1_234_567_890);
        assert_eq!(packed.context_free_data(), raw.context_free_data.as_slice());
        assert_eq!(packed.transaction_extensions(), raw.transaction_extensions.as_slice());
    }

    #[test]
    fn test_project_drops_signatures() {
        let packed = project(raw_transaction());
        let json = serde_json::to_value(&packed).unwrap();

        assert!(json.get("signatures").is_none());
    }

    #[test]
    fn test_into_packed_returns_signatures() {
        let raw = raw_transaction();
        let (packed, signatures) = raw.clone().into_packed();

        assert_eq!(signatures, raw.signatures);
        assert_eq!(packed, project(raw));
    }

    #[test]
    fn test_packed_reencodes_as_raw_transaction() {
        let raw = raw_transaction();
        let packed = project(raw.clone());

        let json = serde_json::to_string(&packed).unwrap();
        let decoded: RawTransaction = serde_json::from_str(&json).unwrap();

        assert!(decoded.signatures.is_empty());
        assert_eq!(decoded, RawTransaction { signatures: vec![], ..raw });
    }

    #[test]
    fn test_packed_reencode_keeps_sub_millisecond_expiration() {
        let raw = RawTransaction {
            expiration: Time::from_str("2019-04-05T10:22:30.0005").unwrap(),
            ..raw_transaction()
        };

        let json = serde_json::to_string(&project(raw.clone())).unwrap();
        let decoded: RawTransaction = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.expiration, raw.expiration);
    }

    #[test]
    fn test_packed_field_order() {
        let json = serde_json::to_string(&project(raw_transaction())).unwrap();
        let keys = [
            "\"expiration\"",
            "\"ref_block_num\"",
            "\"ref_block_prefix\"",
            "\"max_net_usage_words\"",
            "\"max_cpu_usage_ms\"",
            "\"delay_sec\"",
            "\"context_free_actions\"",
            "\"actions\"",
            "\"context_free_data\"",
            "\"transaction_extensions\"",
        ];

        let positions: Vec<usize> = keys.iter().map(|key| json.find(key).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
