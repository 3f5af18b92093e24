use std::fmt;

pub type SubunitAmount = crate::U256;
pub type DisplayAmount = f64;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    /// Number of decimal places between the subunit (wei, lamport) and the
    /// display unit (ether, SOL).
    pub const fn decimals(self) -> u32 {
        match self {
            Chain::Ethereum => 18,
            Chain::Solana => 9,
        }
    }

    pub const fn ticker(self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Solana => "SOL",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Ethereum => f.write_str("Ethereum"),
            Chain::Solana => f.write_str("Solana"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    pub chain: Chain,
    /// Canonical text form of the queried address.
    pub address: String,
    pub amount: DisplayAmount,
}
