// common/src/client.rs

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::{client::RpcClient, types::Log},
    signers::local::PrivateKeySigner,
    transports::http::Http,
};
use reqwest::Url;
use tracing::{debug, info};

use crate::{
    config::Config,
    contract::ElxRealties::{self, ElxRealtiesInstance},
    error::{ClientError, Result},
    types::{ListingReceipt, NewListing, Realty},
};

// ─────────────────── Client ───────────────────

/// Signing provider bound to the ELX realties contract.
///
/// Built once from [`Config`] and never mutated; every method is an
/// independent request against the bound contract.
#[derive(Clone)]
pub struct ElxClient {
    signer_address: Address,
    contract: ElxRealtiesInstance<DynProvider>,
}

impl ElxClient {
    /// Wire up transport, signer and contract binding. No request is sent.
    pub fn connect(cfg: &Config) -> Result<Self> {
        let url = Url::parse(&cfg.provider_url).map_err(|e| ClientError::InvalidRpcUrl {
            url: cfg.provider_url.clone(),
            reason: e.to_string(),
        })?;
        let is_local = is_local_url(&url);

        let http = reqwest::Client::builder().timeout(cfg.rpc_timeout).build()?;
        let rpc = RpcClient::new(Http::with_client(http, url), is_local);

        let signer: PrivateKeySigner = cfg.private_key.parse()?;
        let signer_address = signer.address();

        let contract_address = parse_address(&cfg.contract_address)?;

        debug!(
            signer = %signer_address,
            wallet = cfg.wallet_address.as_deref().unwrap_or("-"),
            recipient = cfg.recipient_address.as_deref().unwrap_or("-"),
            contract = %contract_address,
            "client configured"
        );

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(rpc)
            .erased();

        Ok(Self::from_provider(provider, contract_address, signer_address))
    }

    /// Bind an already built provider. `signer_address` is used as the
    /// caller for queries scoped to the sender.
    pub fn from_provider(
        provider: DynProvider,
        contract_address: Address,
        signer_address: Address,
    ) -> Self {
        Self {
            signer_address,
            contract: ElxRealties::new(contract_address, provider),
        }
    }

    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    pub async fn name_and_symbol(&self) -> Result<(String, String)> {
        let name = self.contract.name().call().await?;
        let symbol = self.contract.symbol().call().await?;
        Ok((name, symbol))
    }

    /// Submit `createListing` and wait for the receipt.
    pub async fn create_listing(&self, listing: &NewListing) -> Result<ListingReceipt> {
        let pending = self
            .contract
            .createListing(
                listing.location.clone(),
                listing.description.clone(),
                listing.price,
                listing.image.clone(),
                listing.token_cid.clone(),
            )
            .send()
            .await?;

        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, "createListing submitted, waiting for receipt");

        let receipt = pending.get_receipt().await?;
        ensure_success(tx_hash, receipt.status())?;

        Ok(ListingReceipt {
            tx_hash,
            block_number: receipt.block_number,
            token_id: minted_token_id(self.contract_address(), receipt.inner.logs()),
        })
    }

    /// Realties owned by the signer.
    pub async fn my_realties(&self) -> Result<Vec<Realty>> {
        let realties = self
            .contract
            .getMyRealties()
            .from(self.signer_address)
            .call()
            .await?;
        Ok(realties.into_iter().map(Realty::from).collect())
    }

    pub async fn token_uri(&self, token_id: U256) -> Result<String> {
        Ok(self.contract.getTokenUri(token_id).call().await?)
    }
}

fn parse_address(raw: &str) -> Result<Address> {
    raw.parse::<Address>()
        .map_err(|e| ClientError::InvalidContractAddress {
            address: raw.to_string(),
            reason: e.to_string(),
        })
}

// IPv6 hosts come back bracketed from `host_str`.
fn is_local_url(url: &Url) -> bool {
    matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
}

/// A mined receipt with a failed status is an error.
fn ensure_success(tx_hash: TxHash, status: bool) -> Result<()> {
    if status {
        Ok(())
    } else {
        Err(ClientError::Reverted(tx_hash))
    }
}

/// Token id of the first mint (`Transfer` from the zero address) emitted by
/// `contract` in `logs`.
pub fn minted_token_id(contract: Address, logs: &[Log]) -> Option<U256> {
    logs.iter()
        .filter(|log| log.address() == contract)
        .filter_map(|log| log.log_decode::<ElxRealties::Transfer>().ok())
        .map(|log| log.inner.data)
        .find(|transfer| transfer.from == Address::ZERO)
        .map(|transfer| transfer.tokenId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, Bytes, LogData},
        sol_types::{SolEvent, SolValue},
        transports::mock::Asserter,
    };
    use std::time::Duration;

    const CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
    const SIGNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn config() -> Config {
        Config {
            contract_address: CONTRACT.to_string(),
            provider_url: "http://localhost:8545".into(),
            private_key: "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .into(),
            wallet_address: None,
            recipient_address: None,
            rpc_timeout: Duration::from_secs(5),
        }
    }

    fn mocked_client(asserter: &Asserter) -> ElxClient {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone())
            .erased();
        ElxClient::from_provider(provider, CONTRACT, SIGNER)
    }

    fn sample_realty(id: u64) -> ElxRealties::Realty {
        ElxRealties::Realty {
            tokenId: U256::from(id),
            owner: SIGNER,
            location: "Califonia, US".into(),
            description: "white and brown concrete building under blue sky during daytime".into(),
            price: U256::from(3),
            image: "ipfs://bafybeihq27jrbhh4kmaeruqej7nld267p6ojayw7f5z5m7qrx65glxzkqq".into(),
            tokenCid: "bafkreif67z5t3wwrtyr2b4ice7o5qzxdcaa3apgxwnfeui43qembigmdua".into(),
        }
    }

    fn transfer_log(emitter: Address, from: Address, token_id: u64) -> Log {
        let event = ElxRealties::Transfer {
            from,
            to: SIGNER,
            tokenId: U256::from(token_id),
        };
        let data: LogData = event.encode_log_data();
        Log {
            inner: alloy::primitives::Log { address: emitter, data },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_connect_derives_signer_without_network() {
        let client = ElxClient::connect(&config()).unwrap();
        assert_eq!(client.signer_address(), SIGNER);
        assert_eq!(client.contract_address(), CONTRACT);
    }

    #[tokio::test]
    async fn test_connect_from_unprefixed_env_key() {
        let cfg = Config::from_lookup(|key| {
            let value = match key {
                "CONTRACT_ADDRESS" => "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "PROVIDER_URL" => " http://localhost:8545 ",
                "WORKING_WALLET_PRIVATE_KEY" => {
                    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                }
                _ => return None,
            };
            Some(value.to_string())
        })
        .unwrap();
        assert!(cfg.private_key.starts_with("0x"));

        let client = ElxClient::connect(&cfg).unwrap();
        assert_eq!(client.signer_address(), SIGNER);
        assert_eq!(client.contract_address(), CONTRACT);
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_contract_address() {
        let mut cfg = config();
        cfg.contract_address = "0x1234".into();
        let err = ElxClient::connect(&cfg).err().unwrap();
        assert!(matches!(err, ClientError::InvalidContractAddress { .. }));
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_rpc_url() {
        let mut cfg = config();
        cfg.provider_url = "not a url".into();
        let err = ElxClient::connect(&cfg).err().unwrap();
        assert!(matches!(err, ClientError::InvalidRpcUrl { .. }));
    }

    #[tokio::test]
    async fn test_name_and_symbol() {
        let asserter = Asserter::new();
        asserter.push_success(&Bytes::from(("ELX Realties".to_string(),).abi_encode_params()));
        asserter.push_success(&Bytes::from(("ELX".to_string(),).abi_encode_params()));

        let client = mocked_client(&asserter);
        let (name, symbol) = client.name_and_symbol().await.unwrap();
        assert_eq!(name, "ELX Realties");
        assert_eq!(symbol, "ELX");
    }

    #[tokio::test]
    async fn test_my_realties_decodes_records() {
        let asserter = Asserter::new();
        let records = vec![sample_realty(1), sample_realty(2)];
        asserter.push_success(&Bytes::from((records.clone(),).abi_encode_params()));

        let client = mocked_client(&asserter);
        let realties = client.my_realties().await.unwrap();
        let expected: Vec<Realty> = records.into_iter().map(Realty::from).collect();
        assert_eq!(realties, expected);
        assert_eq!(realties[1].token_id, U256::from(2));
    }

    #[tokio::test]
    async fn test_token_uri() {
        let asserter = Asserter::new();
        let uri = "ipfs://bafkreif67z5t3wwrtyr2b4ice7o5qzxdcaa3apgxwnfeui43qembigmdua";
        asserter.push_success(&Bytes::from((uri.to_string(),).abi_encode_params()));

        let client = mocked_client(&asserter);
        assert_eq!(client.token_uri(U256::from(1)).await.unwrap(), uri);
    }

    #[tokio::test]
    async fn test_rpc_failure_surfaces_as_contract_error() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("connection refused");

        let client = mocked_client(&asserter);
        let err = client.token_uri(U256::from(1)).await.unwrap_err();
        assert!(matches!(err, ClientError::Contract(_)));
    }

    #[tokio::test]
    async fn test_create_listing_send_failure() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("insufficient funds");

        let listing = NewListing {
            location: "Califonia, US".into(),
            description: "white and brown concrete building".into(),
            price: U256::from(3),
            image: "ipfs://bafybeihq27jrbhh4kmaeruqej7nld267p6ojayw7f5z5m7qrx65glxzkqq".into(),
            token_cid: "bafkreif67z5t3wwrtyr2b4ice7o5qzxdcaa3apgxwnfeui43qembigmdua".into(),
        };
        let err = mocked_client(&asserter)
            .create_listing(&listing)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Contract(_)));
    }

    #[test]
    fn test_ensure_success() {
        let tx_hash = TxHash::repeat_byte(0xab);
        assert!(ensure_success(tx_hash, true).is_ok());

        let err = ensure_success(tx_hash, false).unwrap_err();
        assert!(matches!(err, ClientError::Reverted(h) if h == tx_hash));
        assert!(err.to_string().ends_with("reverted"));
    }

    #[test]
    fn test_is_local_url() {
        for local in ["http://localhost:8545", "http://127.0.0.1:8545", "http://[::1]:8545"] {
            assert!(is_local_url(&Url::parse(local).unwrap()), "{local}");
        }
        assert!(!is_local_url(&Url::parse("https://rpc.sepolia.org").unwrap()));
    }

    #[test]
    fn test_minted_token_id_picks_mint_from_contract() {
        let other = address!("0000000000000000000000000000000000000001");
        let logs = vec![
            transfer_log(other, Address::ZERO, 99),
            transfer_log(CONTRACT, other, 5),
            transfer_log(CONTRACT, Address::ZERO, 6),
        ];
        assert_eq!(minted_token_id(CONTRACT, &logs), Some(U256::from(6)));
        assert_eq!(minted_token_id(CONTRACT, &logs[..2]), None);
    }
}
