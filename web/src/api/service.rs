use balance_gate::types::{BalanceResult, DisplayAmount};
use serde::Serialize;

pub const WELCOME: &str = "Welcome to the Web3 Balance API!";

#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct BlockNumber {
    pub block_number: u64,
}

#[derive(Serialize, Debug)]
pub struct Slot {
    pub slot: u64,
}

#[derive(Serialize, Debug)]
pub struct EthBalance {
    pub address: String,
    pub balance_eth: DisplayAmount,
}

impl From<BalanceResult> for EthBalance {
    fn from(res: BalanceResult) -> Self {
        Self {
            address: res.address,
            balance_eth: res.amount,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SolBalance {
    pub address: String,
    pub balance_sol: DisplayAmount,
}

impl From<BalanceResult> for SolBalance {
    fn from(res: BalanceResult) -> Self {
        Self {
            address: res.address,
            balance_sol: res.amount,
        }
    }
}
