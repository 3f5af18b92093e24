use crate::{
    address::{self, ChainAddress},
    config::{Config, ConfigError, SOLANA_PROVIDER_URL, WEB3_PROVIDER_URL},
    errors::ChainError,
    types::{BalanceResult, Chain},
    units, Address, BalanceQuerier, ProviderError, Pubkey, U256,
};
use providers::{EvmProvider, SolanaProvider};

pub type EvmQuerier = dyn BalanceQuerier<Address = Address, Balance = U256, Error = ProviderError>;
pub type SolanaQuerier = dyn BalanceQuerier<Address = Pubkey, Balance = u64, Error = ProviderError>;

/// Balance and chain head lookups for every supported chain.
///
/// Created once at startup and shared read-only between requests.
pub struct Gate {
    ethereum: Box<EvmQuerier>,
    solana: Box<SolanaQuerier>,
}

impl Gate {
    pub fn new(ethereum: Box<EvmQuerier>, solana: Box<SolanaQuerier>) -> Self {
        Self { ethereum, solana }
    }

    pub fn connect(config: &Config) -> Result<Self, ConfigError> {
        let ethereum = EvmProvider::new(&config.web3_provider_url).map_err(|e| {
            ConfigError::InvalidUrl {
                var: WEB3_PROVIDER_URL,
                reason: e.to_string(),
            }
        })?;
        let solana = SolanaProvider::new(&config.solana_provider_url).map_err(|e| {
            ConfigError::InvalidUrl {
                var: SOLANA_PROVIDER_URL,
                reason: e.to_string(),
            }
        })?;

        Ok(Self::new(Box::new(ethereum), Box::new(solana)))
    }

    /// Latest block number on Ethereum, latest slot on Solana.
    pub async fn chain_head(&self, chain: Chain) -> Result<u64, ChainError> {
        let head = match chain {
            Chain::Ethereum => self.ethereum.get_chain_head().await?,
            Chain::Solana => self.solana.get_chain_head().await?,
        };

        Ok(head)
    }

    pub async fn is_connected(&self, chain: Chain) -> bool {
        match chain {
            Chain::Ethereum => self.ethereum.is_connected().await,
            Chain::Solana => self.solana.is_connected().await,
        }
    }

    pub async fn balance(&self, chain: Chain, raw: &str) -> Result<BalanceResult, ChainError> {
        let address = address::normalize(chain, raw)?;

        let amount = match &address {
            ChainAddress::Ethereum(a) => self.ethereum.get_native_balance(a).await?,
            ChainAddress::Solana(p) => U256::from(self.solana.get_native_balance(p).await?),
        };

        log::debug!("{chain} balance of {address}: {amount}");

        Ok(BalanceResult {
            chain,
            address: address.to_string(),
            amount: units::to_display(chain, amount),
        })
    }
}

#[cfg(test)]
mod test {
    use super::Gate;
    use crate::{
        config::{Config, ConfigError},
        errors::ChainError,
        mock::{MockEvm, MockSolana, MOCK_HEAD},
        types::Chain,
        U256,
    };

    const SOL_ADDRESS: &str = "So11111111111111111111111111111111111111112";

    fn gate(eth: MockEvm, sol: MockSolana) -> Gate {
        Gate::new(Box::new(eth), Box::new(sol))
    }

    fn healthy() -> Gate {
        gate(
            MockEvm::with_balance(U256::exp10(18)),
            MockSolana::with_balance(500_000_000),
        )
    }

    fn unreachable() -> Gate {
        gate(MockEvm::unreachable(), MockSolana::unreachable())
    }

    #[tokio::test]
    async fn one_ether() {
        let res = healthy()
            .balance(Chain::Ethereum, "0x0000000000000000000000000000000000000000")
            .await
            .unwrap();

        assert_eq!(res.chain, Chain::Ethereum);
        assert_eq!(res.address, "0x0000000000000000000000000000000000000000");
        assert_eq!(res.amount, 1.0);
    }

    #[tokio::test]
    async fn half_a_sol() {
        let res = healthy().balance(Chain::Solana, SOL_ADDRESS).await.unwrap();

        assert_eq!(res.chain, Chain::Solana);
        assert_eq!(res.address, SOL_ADDRESS);
        assert_eq!(res.amount, 0.5);
    }

    #[tokio::test]
    async fn address_is_checksummed() {
        let res = healthy()
            .balance(Chain::Ethereum, "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .await
            .unwrap();

        assert_eq!(res.address, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[tokio::test]
    async fn invalid_address_never_reaches_the_node() {
        // an unreachable node would turn any network call into RpcFailure
        let res = unreachable().balance(Chain::Ethereum, "not-an-address").await;
        assert!(matches!(res, Err(ChainError::InvalidAddress(_))));

        let res = unreachable().balance(Chain::Solana, "not-an-address").await;
        assert!(matches!(res, Err(ChainError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn transport_errors() {
        let gate = unreachable();

        let res = gate
            .balance(Chain::Ethereum, "0x0000000000000000000000000000000000000000")
            .await;
        assert_eq!(
            res,
            Err(ChainError::RpcFailure(
                "RPC error -32000: connection refused".into()
            ))
        );

        let res = gate.balance(Chain::Solana, SOL_ADDRESS).await;
        assert!(matches!(res, Err(ChainError::RpcFailure(_))));

        assert!(matches!(
            gate.chain_head(Chain::Ethereum).await,
            Err(ChainError::RpcFailure(_))
        ));
        assert!(!gate.is_connected(Chain::Solana).await);
    }

    #[tokio::test]
    async fn chain_head() {
        let gate = healthy();

        assert_eq!(gate.chain_head(Chain::Ethereum).await, Ok(MOCK_HEAD));
        assert_eq!(gate.chain_head(Chain::Solana).await, Ok(MOCK_HEAD));
        assert!(gate.is_connected(Chain::Ethereum).await);
    }

    #[test]
    fn connect_rejects_bad_urls() {
        let config = Config {
            web3_provider_url: "http://localhost:8545".into(),
            solana_provider_url: "devnet".into(),
        };

        assert!(matches!(
            Gate::connect(&config),
            Err(ConfigError::InvalidUrl {
                var: "SOLANA_PROVIDER_URL",
                ..
            })
        ));
    }
}
