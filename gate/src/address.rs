//! Validation and canonical text form of user supplied addresses.

use crate::{errors::ChainError, types::Chain, Address, Pubkey};
use std::{fmt, str::FromStr};

const HEX_DIGITS: usize = 40;

/// An address that is known to be valid for its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainAddress {
    Ethereum(Address),
    Solana(Pubkey),
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainAddress::Ethereum(address) => f.write_str(&to_checksum(address)),
            ChainAddress::Solana(pubkey) => write!(f, "{pubkey}"),
        }
    }
}

pub fn normalize(chain: Chain, raw: &str) -> Result<ChainAddress, ChainError> {
    match chain {
        Chain::Ethereum => parse_ethereum(raw).map(ChainAddress::Ethereum),
        Chain::Solana => Pubkey::from_str(raw)
            .map(ChainAddress::Solana)
            .map_err(|e| ChainError::InvalidAddress(e.to_string())),
    }
}

fn parse_ethereum(raw: &str) -> Result<Address, ChainError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    let len = digits.chars().count();
    if len != HEX_DIGITS {
        return Err(ChainError::InvalidAddress(format!(
            "expected {HEX_DIGITS} hex digits, got {len} characters"
        )));
    }

    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ChainError::InvalidAddress(format!(
            "`{c}` is not a hex digit"
        )));
    }

    Address::from_str(digits).map_err(|e| ChainError::InvalidAddress(e.to_string()))
}

/// EIP-55 mixed-case encoding, `0x` prefixed.
pub fn to_checksum(address: &Address) -> String {
    alloy_primitives::Address::from_slice(address.as_bytes()).to_checksum(None)
}
