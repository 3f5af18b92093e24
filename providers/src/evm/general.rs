use crate::{BalanceQuerier, ProviderError};
use async_trait::async_trait;
use web3::{
    transports::Http,
    types::{Address, BlockNumber, U256},
    Web3,
};

pub struct EvmProvider {
    web3: Web3<Http>,
}

impl EvmProvider {
    pub fn new(rpc_url: &str) -> Result<Self, ProviderError> {
        let transport = Http::new(rpc_url)?;

        Ok(Self {
            web3: Web3::new(transport),
        })
    }
}

#[async_trait]
impl BalanceQuerier for EvmProvider {
    type Address = Address;
    type Balance = U256;
    type Error = ProviderError;

    async fn get_native_balance(&self, address: &Self::Address) -> Result<U256, ProviderError> {
        log::debug!("eth_getBalance {:#x}", address);

        self.web3
            .eth()
            .balance(*address, Some(BlockNumber::Latest))
            .await
            .map_err(ProviderError::Web3)
    }

    async fn get_chain_head(&self) -> Result<u64, ProviderError> {
        self.web3
            .eth()
            .block_number()
            .await
            .map(|n| n.as_u64())
            .map_err(ProviderError::Web3)
    }
}
