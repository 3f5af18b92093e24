#![deny(clippy::dbg_macro)]

pub mod address;
pub mod config;
pub mod errors;
pub mod handler;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;
pub mod units;

pub use handler::Gate;
pub use providers::{Address, BalanceQuerier, ProviderError, Pubkey, U256};
