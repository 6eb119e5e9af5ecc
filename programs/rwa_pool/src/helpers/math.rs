use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn mul_bps(value: u64, bps: u16) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// `value * numerator / denominator`, rounded down.
pub fn mul_div(value: u128, numerator: u128, denominator: u128) -> Result<u128> {
    value
        .checked_mul(numerator)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(denominator)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}

pub fn to_fixed_bytes<const N: usize>(value: &str) -> Result<[u8; N]> {
    let bytes = value.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= N,
        ErrorCode::InvalidMetadataLength
    );

    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}
