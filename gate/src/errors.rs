use providers::ProviderError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The input never reached the network.
    #[error("{0}")]
    InvalidAddress(String),
    #[error("{0}")]
    RpcFailure(String),
}

impl From<ProviderError> for ChainError {
    fn from(e: ProviderError) -> Self {
        ChainError::RpcFailure(e.to_string())
    }
}
