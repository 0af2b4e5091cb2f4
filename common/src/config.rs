// common/src/config.rs

use std::{env, fmt, time::Duration};

use dotenv::dotenv;

use crate::error::ConfigError;

pub const CONTRACT_ADDRESS: &str = "CONTRACT_ADDRESS";
pub const PROVIDER_URL: &str = "PROVIDER_URL";
pub const WORKING_WALLET_PRIVATE_KEY: &str = "WORKING_WALLET_PRIVATE_KEY";
pub const WORKING_WALLET_ADDRESS: &str = "WORKING_WALLET_ADDRESS";
pub const RECIPIENT_ADDRESS: &str = "RECIPIENT_ADDRESS";
pub const RPC_TIMEOUT_SECS: &str = "RPC_TIMEOUT_SECS";

const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

// ─────────────────── Configuration ───────────────────

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub contract_address: String,
    pub provider_url: String,
    /// Always `0x` + 64 hex digits.
    pub private_key: String,
    /// Only identifies the working wallet; signing uses `private_key`.
    pub wallet_address: Option<String>,
    pub recipient_address: Option<String>,
    pub rpc_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("contract_address", &self.contract_address)
            .field("provider_url", &self.provider_url)
            .field("private_key", &"<redacted>")
            .field("wallet_address", &self.wallet_address)
            .field("recipient_address", &self.recipient_address)
            .field("rpc_timeout", &self.rpc_timeout)
            .finish()
    }
}

impl Config {
    /// Build a config from any variable lookup. Values are trimmed and blank
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let contract_address = get(CONTRACT_ADDRESS);
        let provider_url = get(PROVIDER_URL);
        let private_key = get(WORKING_WALLET_PRIVATE_KEY);

        let (contract_address, provider_url, private_key) =
            match (contract_address, provider_url, private_key) {
                (Some(c), Some(p), Some(k)) => (c, p, k),
                (c, p, k) => {
                    let missing = [
                        (CONTRACT_ADDRESS, c.is_none()),
                        (PROVIDER_URL, p.is_none()),
                        (WORKING_WALLET_PRIVATE_KEY, k.is_none()),
                    ]
                    .into_iter()
                    .filter_map(|(name, absent)| absent.then_some(name))
                    .collect();
                    return Err(ConfigError::MissingEnv(missing));
                }
            };

        let private_key = normalize_private_key(&private_key);
        if !is_valid_private_key(&private_key) {
            return Err(ConfigError::InvalidPrivateKey);
        }

        let rpc_timeout = match get(RPC_TIMEOUT_SECS) {
            None => DEFAULT_RPC_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Config {
            contract_address,
            provider_url,
            private_key,
            wallet_address: get(WORKING_WALLET_ADDRESS),
            recipient_address: get(RECIPIENT_ADDRESS),
            rpc_timeout,
        })
    }
}

/// Load `.env` (if any) and read the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    dotenv().ok();
    Config::from_lookup(|key| env::var(key).ok())
}

/// Prefix the key with `0x` unless it already carries it.
pub fn normalize_private_key(key: &str) -> String {
    if key.starts_with("0x") {
        key.to_string()
    } else {
        format!("0x{key}")
    }
}

/// `0x` followed by exactly 64 hex digits.
pub fn is_valid_private_key(key: &str) -> bool {
    key.strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
