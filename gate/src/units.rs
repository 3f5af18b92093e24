use crate::types::{Chain, DisplayAmount, SubunitAmount};

const LIMB: DisplayAmount = 18_446_744_073_709_551_616.0; // 2^64

/// Converts wei or lamports into ether or SOL.
pub fn to_display(chain: Chain, amount: SubunitAmount) -> DisplayAmount {
    let divisor = 10_u128.pow(chain.decimals()) as DisplayAmount;

    // most significant limb first
    let value = amount
        .0
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * LIMB + *limb as DisplayAmount);

    value / divisor
}
