use anchor_lang::prelude::*;

use crate::{constants::MAX_REDEEM_QUEUE_CAP, error::ErrorCode, state::PoolConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, PartialEq, Eq)]
pub struct RedeemRequest {
    pub shares_amount: u128,
    pub requested_at: i64,
}

impl RedeemRequest {
    pub fn is_mature(&self, now: i64, interval: i64) -> bool {
        now.saturating_sub(self.requested_at) >= interval
    }
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ShareAccount {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub shares: u128,
    pub unconfirmed_fund: u64,
    #[max_len(MAX_REDEEM_QUEUE_CAP)]
    pub redeem_queue: Vec<RedeemRequest>,
    pub permit_nonce: u64,
    pub bump: u8,
}

impl ShareAccount {
    pub fn pending_redeem_shares(&self) -> u128 {
        self.redeem_queue.iter().map(|r| r.shares_amount).sum()
    }

    /// Shares not locked by a queued redemption.
    pub fn available_shares(&self) -> u128 {
        self.shares.saturating_sub(self.pending_redeem_shares())
    }

    pub fn credit_shares(&mut self, shares: u128) -> Result<()> {
        self.shares = self
            .shares
            .checked_add(shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn debit_available(&mut self, shares: u128) -> Result<()> {
        require!(shares <= self.available_shares(), ErrorCode::ExceedBalance);
        self.shares -= shares;
        Ok(())
    }

    pub fn request_redeem(&mut self, config: &PoolConfig, shares: u128, now: i64) -> Result<()> {
        require!(
            shares > 0 && shares >= config.minimum_redeem_amount,
            ErrorCode::RedeemTooSmall
        );
        require!(shares <= self.available_shares(), ErrorCode::ExceedBalance);
        require!(
            self.redeem_queue.len() < config.max_redeem_queue_size as usize
                && self.redeem_queue.len() < MAX_REDEEM_QUEUE_CAP,
            ErrorCode::OverMaxRedeemSize
        );

        self.redeem_queue.push(RedeemRequest {
            shares_amount: shares,
            requested_at: now,
        });
        Ok(())
    }

    /// Total shares of matured requests and how many requests that covers.
    pub fn matured_shares(&self, now: i64, interval: i64) -> (u128, usize) {
        self.redeem_queue
            .iter()
            .filter(|r| r.is_mature(now, interval))
            .fold((0, 0), |(shares, count), r| (shares + r.shares_amount, count + 1))
    }

    pub fn drop_matured(&mut self, now: i64, interval: i64) {
        self.redeem_queue.retain(|r| !r.is_mature(now, interval));
    }

    pub fn consume_permit_nonce(&mut self) -> Result<u64> {
        let nonce = self.permit_nonce;
        self.permit_nonce = nonce
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(nonce)
    }
}

pub fn move_shares(from: &mut ShareAccount, to: &mut ShareAccount, shares: u128) -> Result<()> {
    from.debit_available(shares)?;
    to.credit_shares(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(shares: u128) -> ShareAccount {
        ShareAccount {
            owner: Pubkey::new_unique(),
            shares,
            ..ShareAccount::default()
        }
    }

    #[test]
    fn queued_shares_are_locked() {
        let config = PoolConfig::default();
        let mut account = holder(100);

        account.request_redeem(&config, 60, 0).unwrap();
        assert_eq!(account.shares, 100);
        assert_eq!(account.pending_redeem_shares(), 60);
        assert_eq!(account.available_shares(), 40);

        let mut other = holder(0);
        assert_eq!(
            move_shares(&mut account, &mut other, 41).unwrap_err(),
            ErrorCode::ExceedBalance.into()
        );
        move_shares(&mut account, &mut other, 40).unwrap();
        assert_eq!(account.shares, 60);
        assert_eq!(other.shares, 40);
    }

    #[test]
    fn redeem_checks_minimum_before_balance() {
        let config = PoolConfig {
            minimum_redeem_amount: 10,
            ..PoolConfig::default()
        };
        let mut account = holder(5);

        assert_eq!(
            account.request_redeem(&config, 0, 0).unwrap_err(),
            ErrorCode::RedeemTooSmall.into()
        );
        assert_eq!(
            account.request_redeem(&config, 9, 0).unwrap_err(),
            ErrorCode::RedeemTooSmall.into()
        );
        assert_eq!(
            account.request_redeem(&config, 10, 0).unwrap_err(),
            ErrorCode::ExceedBalance.into()
        );
    }

    #[test]
    fn maturity_is_inclusive() {
        let interval = 518_400;
        let mut account = holder(10);
        account.request_redeem(&PoolConfig::default(), 4, 100).unwrap();
        account
            .request_redeem(&PoolConfig::default(), 6, 100 + interval)
            .unwrap();

        assert_eq!(account.matured_shares(100 + interval - 1, interval), (0, 0));
        assert_eq!(account.matured_shares(100 + interval, interval), (4, 1));

        account.drop_matured(100 + interval, interval);
        assert_eq!(account.redeem_queue.len(), 1);
        assert_eq!(account.pending_redeem_shares(), 6);
    }

    #[test]
    fn permit_nonce_advances() {
        let mut account = holder(0);
        assert_eq!(account.consume_permit_nonce().unwrap(), 0);
        assert_eq!(account.consume_permit_nonce().unwrap(), 1);
        assert_eq!(account.permit_nonce, 2);
    }
}
