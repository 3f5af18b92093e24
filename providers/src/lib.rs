pub mod evm;
pub mod solana;

use async_trait::async_trait;
use thiserror::Error;

pub use evm::EvmProvider;
pub use solana::{ParsePubkeyError, Pubkey, SolanaProvider};
pub use web3::types::{Address, U256};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Web3(#[from] web3::Error),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("RPC endpoint answered with HTTP status {0}")]
    Status(u16),
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("RPC response carried neither a result nor an error")]
    MissingResult,
    #[error("Invalid RPC url `{0}`")]
    InvalidUrl(String),
}

/// Read-only access to a single chain's RPC node.
///
/// Implementations are shared between concurrently handled requests, so
/// every call has to be possible through `&self`.
#[async_trait]
pub trait BalanceQuerier: Send + Sync {
    type Address;
    type Balance;
    type Error;

    /// Native balance of `address` in the chain's smallest unit.
    async fn get_native_balance(&self, address: &Self::Address)
        -> Result<Self::Balance, Self::Error>;

    /// Latest block number (EVM) or slot (Solana).
    async fn get_chain_head(&self) -> Result<u64, Self::Error>;

    async fn is_connected(&self) -> bool {
        self.get_chain_head().await.is_ok()
    }
}
