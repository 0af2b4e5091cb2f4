// flows/token_uri/src/main.rs

use anyhow::Result;
use clap::Parser;
use elx_common::{init_tracing, load_config, parse_u256, token_uri_flow, ElxClient, U256};

/// Print the metadata URI of a realty token.
#[derive(Parser, Debug)]
struct Args {
    /// Token id, decimal or 0x-hex
    #[arg(default_value = "1", value_parser = parse_u256)]
    token_id: U256,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;
    let cfg = load_config()?;
    let client = ElxClient::connect(&cfg)?;
    token_uri_flow(&client, args.token_id).await;
    Ok(())
}
