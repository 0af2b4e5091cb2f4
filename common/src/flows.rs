// common/src/flows.rs
//
// One flow per contract operation. A flow logs the outcome and swallows
// remote failures so the calling binary still exits normally.

use alloy::primitives::U256;
use tracing::{error, info, warn};

use crate::{
    client::ElxClient,
    error::Result,
    types::{ListingReceipt, NewListing, Realty},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    NameAndSymbol,
    CreateListing,
    MyRealties,
    TokenUri,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::NameAndSymbol => "name_and_symbol",
            Operation::CreateListing => "create_listing",
            Operation::MyRealties => "my_realties",
            Operation::TokenUri => "token_uri",
        }
    }

    /// Message logged when the remote call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::NameAndSymbol => "Failed to fetch token name/symbol",
            Operation::CreateListing => "Failed to create realty listing",
            Operation::MyRealties => "Error fetching realties token",
            Operation::TokenUri => "Error fetching uri",
        }
    }
}

fn report<T>(op: Operation, outcome: Result<T>) -> Option<T> {
    outcome
        .map_err(|e| error!(operation = op.name(), error = %e, "{}", op.failure_message()))
        .ok()
}

// ─────────────────── Name / Symbol ───────────────────

pub async fn name_and_symbol_flow(client: &ElxClient) -> Option<(String, String)> {
    let (name, symbol) = report(Operation::NameAndSymbol, client.name_and_symbol().await)?;
    info!("Token name: {name}, Symbol: {symbol}");
    Some((name, symbol))
}

// ─────────────────── Create Listing ───────────────────

pub async fn create_listing_flow(client: &ElxClient, listing: &NewListing) -> Option<ListingReceipt> {
    let receipt = report(Operation::CreateListing, client.create_listing(listing).await)?;
    match receipt.token_id {
        Some(token_id) => info!(tx_hash = %receipt.tx_hash, %token_id, "Listing minted"),
        None => info!(tx_hash = %receipt.tx_hash, "Listing minted (no mint event in receipt)"),
    }
    Some(receipt)
}

// ─────────────────── My Realties ───────────────────

pub async fn my_realties_flow(client: &ElxClient) -> Option<Vec<Realty>> {
    let realties = report(Operation::MyRealties, client.my_realties().await)?;
    match serde_json::to_string_pretty(&realties) {
        Ok(rendered) => info!(count = realties.len(), "Realties tokens: {rendered}"),
        Err(e) => {
            warn!(error = %e, "could not render realties as JSON");
            info!(count = realties.len(), "Realties tokens: {realties:?}");
        }
    }
    Some(realties)
}

// ─────────────────── Token URI ───────────────────

pub async fn token_uri_flow(client: &ElxClient, token_id: U256) -> Option<String> {
    let uri = report(Operation::TokenUri, client.token_uri(token_id).await)?;
    info!(%token_id, "Token metadata URI: {uri}");
    Some(uri)
}
