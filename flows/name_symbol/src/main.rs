// flows/name_symbol/src/main.rs

use anyhow::Result;
use elx_common::{init_tracing, load_config, name_and_symbol_flow, ElxClient};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    // load .env (CONTRACT_ADDRESS, PROVIDER_URL, WORKING_WALLET_PRIVATE_KEY)
    let cfg = load_config()?;
    let client = ElxClient::connect(&cfg)?;
    name_and_symbol_flow(&client).await;
    Ok(())
}
