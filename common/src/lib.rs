// common/src/lib.rs
//! Shared pieces of the ELX realties flows: environment config, the signing
//! contract client and one flow per contract operation.

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod flows;
pub mod types;

pub use alloy::primitives::U256;
pub use client::ElxClient;
pub use config::{load_config, Config};
pub use error::{ClientError, ConfigError};
pub use flows::{
    create_listing_flow, my_realties_flow, name_and_symbol_flow, token_uri_flow, Operation,
};
pub use types::{ListingReceipt, NewListing, Realty};

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ─────────────────── Logging ───────────────────

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

/// Parse a decimal or `0x` hex integer argument.
pub fn parse_u256(raw: &str) -> std::result::Result<U256, String> {
    raw.trim()
        .parse::<U256>()
        .map_err(|e| format!("invalid integer `{raw}`: {e}"))
}
