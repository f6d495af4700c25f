use serde::{Deserialize, Serialize};

use crate::shared::common_types::{HexDecodeError, PermissionLevel};

/// An action as the node renders it, with `data` already ABI-decoded.
///
/// `data` is opaque here: it is handed on to ABI-aware callers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub account: String,

    pub name: String,

    #[serde(default)]
    pub authorization: Vec<PermissionLevel>,

    #[serde(default)]
    pub data: serde_json::Value,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hex_data: Option<String>,
}

/// An action in its serializable form: `data` is the hex of the packed
/// action payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    pub account: String,

    pub name: String,

    #[serde(default)]
    pub authorization: Vec<PermissionLevel>,

    #[serde(default)]
    pub data: String,
}

impl RawAction {
    pub fn new(
        account: impl Into<String>,
        name: impl Into<String>,
        authorization: Vec<PermissionLevel>,
        data: &[u8],
    ) -> Self {
        Self { account: account.into(), name: name.into(), authorization, data: hex::encode(data) }
    }

    pub fn data_bytes(&self) -> Result<Vec<u8>, HexDecodeError> {
        hex::decode(&self.data).map_err(HexDecodeError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_action_hex_data() {
        let action = RawAction::new(
            "eosio.token",
            "transfer",
            vec![PermissionLevel::new("alice", "active")],
            &[0xde, 0xad, 0xbe, 0xef],
        );

        assert_eq!(action.data, "deadbeef");
        assert_eq!(action.data_bytes().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_action_keeps_opaque_data() {
        let json = r#"{
            "account": "eosio.token",
            "name": "transfer",
            "authorization": [{"actor": "alice", "permission": "active"}],
            "data": {"from": "alice", "to": "bob", "quantity": "1.0000 EOS", "memo": ""},
            "hex_data": "0000000000855c34"
        }"#;

        let action: Action = serde_json::from_str(json).unwrap();

        assert_eq!(action.authorization[0].to_string(), "alice@active");
        assert_eq!(action.data["quantity"], "1.0000 EOS");
        assert_eq!(action.hex_data.as_deref(), Some("0000000000855c34"));
    }
}
