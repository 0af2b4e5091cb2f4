// flows/my_realties/src/main.rs

use anyhow::Result;
use elx_common::{init_tracing, load_config, my_realties_flow, ElxClient};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    // load .env (CONTRACT_ADDRESS, PROVIDER_URL, WORKING_WALLET_PRIVATE_KEY)
    let cfg = load_config()?;
    let client = ElxClient::connect(&cfg)?;
    // realties owned by the signing wallet
    my_realties_flow(&client).await;
    Ok(())
}
