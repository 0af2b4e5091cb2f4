// flows/create_listing/src/main.rs

use anyhow::Result;
use clap::Parser;
use elx_common::{
    create_listing_flow, init_tracing, load_config, parse_u256, ElxClient, NewListing, U256,
};

/// Mint a realty listing signed by the working wallet.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "Califonia, US")]
    location: String,

    #[arg(
        long,
        default_value = "white and brown concrete building under blue sky during daytime"
    )]
    description: String,

    /// Raw integer in the chain's native unit
    #[arg(long, default_value = "3", value_parser = parse_u256)]
    price: U256,

    #[arg(
        long,
        default_value = "ipfs://bafybeihq27jrbhh4kmaeruqej7nld267p6ojayw7f5z5m7qrx65glxzkqq"
    )]
    image: String,

    /// CID of the metadata document
    #[arg(long, default_value = "bafkreif67z5t3wwrtyr2b4ice7o5qzxdcaa3apgxwnfeui43qembigmdua")]
    token_cid: String,
}

impl From<Args> for NewListing {
    fn from(a: Args) -> Self {
        NewListing {
            location: a.location,
            description: a.description,
            price: a.price,
            image: a.image,
            token_cid: a.token_cid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let listing = NewListing::from(Args::parse());
    init_tracing()?;
    // load .env (CONTRACT_ADDRESS, PROVIDER_URL, WORKING_WALLET_PRIVATE_KEY)
    let cfg = load_config()?;
    let client = ElxClient::connect(&cfg)?;
    create_listing_flow(&client, &listing).await;
    Ok(())
}
