use anchor_lang::prelude::*;
use rwa_pool::PoolLedger;

use crate::error::ErrorCode;

/// Wrapped units minted for `amount` of the rebasing token. One unit is one pool share.
pub fn wrapped_for_amount(ledger: &PoolLedger, amount: u64) -> Result<u64> {
    require!(amount > 0, ErrorCode::WrapZero);
    let shares = ledger.shares_by_underlying(amount)?;
    require!(shares > 0, ErrorCode::WrapZero);
    u64::try_from(shares).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Rebasing-token value released by unwrapping `wrapped` units.
pub fn amount_for_wrapped(ledger: &PoolLedger, wrapped: u64) -> Result<u64> {
    ledger.underlying_by_shares(wrapped as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rwa_pool::{move_shares, ShareAccount};

    fn rebased_ledger() -> PoolLedger {
        PoolLedger {
            total_shares: 111_888_000,
            total_supply: 121_888_000,
            buffered_fund: 61_888_000,
            reserved_fund: 60_000_000,
            ..PoolLedger::default()
        }
    }

    #[test]
    fn wrapped_value_tracks_rebase() {
        let mut ledger = rebased_ledger();
        let wrapped = wrapped_for_amount(&ledger, 1_000_000).unwrap();
        assert_eq!(wrapped, 917_957);
        assert_eq!(amount_for_wrapped(&ledger, wrapped).unwrap(), 999_999);

        ledger.total_supply += 11_188_800;
        assert_eq!(wrapped_for_amount(&ledger, 1_000_000).unwrap(), 840_777);
        assert!(amount_for_wrapped(&ledger, wrapped).unwrap() > 1_000_000);
    }

    #[test]
    fn round_trip_restores_holder_balance() {
        let ledger = rebased_ledger();
        let mut holder = ShareAccount {
            shares: 50_000_000,
            ..ShareAccount::default()
        };
        let mut wrapper = ShareAccount::default();
        let before = ledger.balance_of(&holder).unwrap();

        for amount in [7, 999_999, 1_000_000, 12_345_678] {
            let wrapped = wrapped_for_amount(&ledger, amount).unwrap();
            move_shares(&mut holder, &mut wrapper, wrapped as u128).unwrap();
            let after_wrap = ledger.balance_of(&holder).unwrap();
            assert!(before - after_wrap <= amount);

            move_shares(&mut wrapper, &mut holder, wrapped as u128).unwrap();
            assert!(before - ledger.balance_of(&holder).unwrap() <= 1);
        }
        assert_eq!(wrapper.shares, 0);
    }

    #[test]
    fn zero_and_dust_are_rejected() {
        let ledger = rebased_ledger();
        assert_eq!(
            wrapped_for_amount(&ledger, 0).unwrap_err(),
            ErrorCode::WrapZero.into()
        );
        assert_eq!(
            wrapped_for_amount(&ledger, 1).unwrap_err(),
            ErrorCode::WrapZero.into()
        );
    }
}
