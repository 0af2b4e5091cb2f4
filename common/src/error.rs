//! Error types for configuration loading and contract calls.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Configuration errors. Always fatal, raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are unset or blank
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),

    /// Key is not `0x` followed by 64 hex digits
    #[error("Invalid private key format")]
    InvalidPrivateKey,

    /// RPC_TIMEOUT_SECS is not a positive integer
    #[error("Invalid RPC timeout: {0}")]
    InvalidTimeout(String),
}

/// Client result type.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while building the client or talking to the contract.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid RPC URL `{url}`: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Invalid contract address `{address}`: {reason}")]
    InvalidContractAddress { address: String, reason: String },

    #[error("Signer error: {0}")]
    Signer(#[from] alloy::signers::local::LocalSignerError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Contract error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("Transaction not confirmed: {0}")]
    Pending(#[from] alloy::providers::PendingTransactionError),

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}
