use crate::{Address, BalanceQuerier, ProviderError, Pubkey, U256};
use async_trait::async_trait;
use std::marker::PhantomData;

pub const MOCK_HEAD: u64 = 19_000_000;

/// A node that answers every call with a fixed value, or fails them all.
pub struct MockNode<A, B> {
    balance: Option<B>,
    _address: PhantomData<fn(&A)>,
}

pub type MockEvm = MockNode<Address, U256>;
pub type MockSolana = MockNode<Pubkey, u64>;

impl<A, B> MockNode<A, B> {
    pub fn with_balance(balance: B) -> Self {
        Self {
            balance: Some(balance),
            _address: PhantomData,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            balance: None,
            _address: PhantomData,
        }
    }
}

fn transport_error() -> ProviderError {
    ProviderError::Rpc {
        code: -32000,
        message: "connection refused".into(),
    }
}

#[async_trait]
impl<A, B> BalanceQuerier for MockNode<A, B>
where
    A: Send + Sync,
    B: Copy + Send + Sync,
{
    type Address = A;
    type Balance = B;
    type Error = ProviderError;

    async fn get_native_balance(&self, _address: &A) -> Result<B, ProviderError> {
        self.balance.ok_or_else(transport_error)
    }

    async fn get_chain_head(&self) -> Result<u64, ProviderError> {
        self.balance.map(|_| MOCK_HEAD).ok_or_else(transport_error)
    }
}
