use serde::{Deserialize, Deserializer};

/// One multisig transaction as returned by the Safe Transaction Service.
/// Only the fields this tool consumes are modeled; the rest are ignored.
#[derive(Debug, Deserialize)]
pub struct MultisigTransaction {
    #[serde(deserialize_with = "deserialize_nonce")]
    pub nonce: u64,
    pub data: Option<String>,
}

/// Response envelope of the multisig-transactions listing endpoint.
#[derive(Debug, Deserialize)]
pub struct TransactionPage {
    pub results: Vec<MultisigTransaction>,
}

/// The service emits nonces as JSON numbers on some endpoints and as decimal
/// strings on others; accept both.
fn deserialize_nonce<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid nonce: {}", n))),
        serde_json::Value::String(s) => s.parse::<u64>().map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "invalid nonce: {}",
            other
        ))),
    }
}
