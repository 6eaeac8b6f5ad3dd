/// Gov owner Safe address, the same across all supported networks.
pub const SAFE_ADDRESS: &str = "0x06a858185b3B2ABB246128Bb9415D57e5C09aEB6";

/// Environment variable holding the optional Safe Transaction Service API key.
pub const API_KEY_ENV: &str = "SAFE_API_KEY";

/// Map canonical network name to the Safe Transaction Service short code
/// used in the API base URL (e.g. https://api.safe.global/tx-service/eth).
pub fn safe_network_code(network: &str) -> Result<&'static str, Box<dyn std::error::Error>> {
    match network {
        "eth-mainnet" => Ok("eth"),
        "base-mainnet" => Ok("base"),
        "polygon-mainnet" => Ok("pol"),
        "avalanche-c" => Ok("avax"),
        "optimism-mainnet" => Ok("oeth"),
        "arbitrum-one" => Ok("arb1"),
        "xdai-mainnet" => Ok("gno"),
        "bsc-mainnet" => Ok("bnb"),
        "celo-mainnet" => Ok("celo"),
        "scroll-mainnet" => Ok("scr"),
        _ => Err(format!("No config available for this network: {}", network).into()),
    }
}

/// Base URL of the Safe Transaction Service for a network short code.
pub fn service_base_url(network_code: &str) -> String {
    format!("https://api.safe.global/tx-service/{}", network_code)
}

/// Parse the optional offset argument. Returns the effective offset and
/// whether the caller passed one explicitly (an explicit 0 skips the
/// nonce consistency check, an omitted offset does not).
pub fn parse_offset(arg: Option<&str>) -> Result<(usize, bool), Box<dyn std::error::Error>> {
    match arg {
        None => Ok((0, false)),
        Some(s) => {
            let value: i64 = s.parse().map_err(|_| "Offset must be an integer")?;
            if value < 0 {
                return Err("Offset must be non-negative".into());
            }
            Ok((value as usize, true))
        }
    }
}

/// Read the optional API credential from the environment, once at startup.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok()
}
