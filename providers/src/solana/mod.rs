pub mod types;

use crate::{
    solana::types::{RpcRequest, RpcResponse, WithContext},
    BalanceQuerier, ProviderError,
};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

pub use solana_pubkey::{ParsePubkeyError, Pubkey};

pub struct SolanaProvider {
    client: reqwest::Client,
    rpc_url: Url,
}

impl SolanaProvider {
    pub fn new(rpc_url: &str) -> Result<Self, ProviderError> {
        let rpc_url =
            Url::parse(rpc_url).map_err(|e| ProviderError::InvalidUrl(format!("{rpc_url}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            rpc_url,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[String],
    ) -> Result<T, ProviderError> {
        log::debug!("solana {method} {params:?}");

        let res = self
            .client
            .post(self.rpc_url.clone())
            .json(&RpcRequest::new(method, params))
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => res.json::<RpcResponse<T>>().await?.into_result(),
            status => Err(ProviderError::Status(status.as_u16())),
        }
    }
}

#[async_trait]
impl BalanceQuerier for SolanaProvider {
    type Address = Pubkey;
    type Balance = u64;
    type Error = ProviderError;

    async fn get_native_balance(&self, address: &Self::Address) -> Result<u64, ProviderError> {
        let res: WithContext<u64> = self.call("getBalance", &[address.to_string()]).await?;

        Ok(res.value)
    }

    async fn get_chain_head(&self) -> Result<u64, ProviderError> {
        self.call("getSlot", &[]).await
    }
}
