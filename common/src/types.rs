// common/src/types.rs

use alloy::primitives::{Address, TxHash, U256};
use serde::Serialize;

use crate::contract::ElxRealties;

/// Input for `createListing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub location: String,
    pub description: String,
    /// Passed to the contract as-is, in the chain's native unit.
    pub price: U256,
    /// Content-addressed image URI, e.g. `ipfs://...`
    pub image: String,
    /// CID of the token metadata document
    pub token_cid: String,
}

/// A realty token as returned by `getMyRealties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Realty {
    pub token_id: U256,
    pub owner: Address,
    pub location: String,
    pub description: String,
    pub price: U256,
    pub image: String,
    pub token_cid: String,
}

impl From<ElxRealties::Realty> for Realty {
    fn from(r: ElxRealties::Realty) -> Self {
        Self {
            token_id: r.tokenId,
            owner: r.owner,
            location: r.location,
            description: r.description,
            price: r.price,
            image: r.image,
            token_cid: r.tokenCid,
        }
    }
}

/// Outcome of a mined `createListing` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// Id of the token minted by the call, if the receipt carries the mint event
    pub token_id: Option<U256>,
}
