use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Underlying-denominated spending allowance granted by `owner` to `spender`.
#[account]
#[derive(InitSpace, Default)]
pub struct Allowance {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    /// `u64::MAX` is treated as unlimited and never decremented.
    pub fn spend(&mut self, amount: u64) -> Result<()> {
        if self.amount == u64::MAX {
            return Ok(());
        }
        require!(amount <= self.amount, ErrorCode::ExceedAllowance);
        self.amount -= amount;
        Ok(())
    }

    pub fn increase(&mut self, added: u64) -> Result<u64> {
        self.amount = self
            .amount
            .checked_add(added)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(self.amount)
    }

    pub fn decrease(&mut self, subtracted: u64) -> Result<u64> {
        self.amount = self
            .amount
            .checked_sub(subtracted)
            .ok_or_else(|| error!(ErrorCode::DecreasedAllowanceBelowZero))?;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_and_adjust() {
        let mut allowance = Allowance {
            amount: 100,
            ..Allowance::default()
        };

        allowance.spend(40).unwrap();
        assert_eq!(allowance.amount, 60);
        assert_eq!(allowance.spend(61).unwrap_err(), ErrorCode::ExceedAllowance.into());

        assert_eq!(allowance.increase(15).unwrap(), 75);
        assert_eq!(
            allowance.decrease(76).unwrap_err(),
            ErrorCode::DecreasedAllowanceBelowZero.into()
        );
        assert_eq!(allowance.decrease(75).unwrap(), 0);
    }

    #[test]
    fn unlimited_allowance_is_not_consumed() {
        let mut allowance = Allowance {
            amount: u64::MAX,
            ..Allowance::default()
        };
        allowance.spend(1_000).unwrap();
        assert_eq!(allowance.amount, u64::MAX);
    }
}
