use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    helpers::{mul_bps, mul_div, to_u64},
    state::{PoolConfig, ShareAccount},
};

/// Global share and fund accounting of a pool.
///
/// `total_supply` is the underlying-denominated size of the pool and is the
/// numerator every holder balance scales with; `total_shares` only moves on
/// mint and burn.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Default, Debug, PartialEq, Eq)]
pub struct PoolLedger {
    pub total_shares: u128,
    pub total_supply: u64,
    pub buffered_fund: u64,
    pub reserved_fund: u64,
    pub transient_in_fund: u64,
    pub transient_out_fund: u64,
    pub protocol_fee: u64,
    pub total_unconfirmed_fund: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Immediate { shares: u128 },
    Deferred,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionReceipt {
    pub fee: u64,
    pub net_amount: u64,
    pub settlement: Settlement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub amount: u64,
    pub shares: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurnReceipt {
    pub shares: u128,
    pub amount: u64,
    pub fee: u64,
    pub payout: u64,
    pub requests: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebaseReceipt {
    pub prior_reserve: i128,
    pub delta: i128,
    pub total_supply: u64,
}

fn add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or_else(|| error!(ErrorCode::MathOverflow))
}

fn sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or_else(|| error!(ErrorCode::MathOverflow))
}

impl PoolLedger {
    pub fn total_locked_fund(&self) -> Result<u64> {
        add(self.buffered_fund, self.reserved_fund)
    }

    pub fn shares_by_underlying(&self, amount: u64) -> Result<u128> {
        if self.total_shares == 0 {
            return Ok(amount as u128);
        }
        require!(self.total_supply > 0, ErrorCode::InvalidPoolState);
        mul_div(amount as u128, self.total_shares, self.total_supply as u128)
    }

    pub fn underlying_by_shares(&self, shares: u128) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(0);
        }
        to_u64(mul_div(shares, self.total_supply as u128, self.total_shares)?)
    }

    pub fn balance_of(&self, account: &ShareAccount) -> Result<u64> {
        self.underlying_by_shares(account.shares)
    }

    fn settle(&mut self, net: u64, shares: u128) -> Result<()> {
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.total_supply = add(self.total_supply, net)?;
        self.buffered_fund = add(self.buffered_fund, net)?;
        Ok(())
    }

    pub fn subscribe(
        &mut self,
        config: &PoolConfig,
        recipient: &mut ShareAccount,
        amount: u64,
        now: i64,
    ) -> Result<SubscriptionReceipt> {
        require!(
            amount > 0 && amount >= config.minimum_subscribe_amount,
            ErrorCode::SubscribeTooSmall
        );

        let fee = mul_bps(amount, config.subscribe_fee_bps)?;
        let net_amount = sub(amount, fee)?;

        let projected = self.total_supply as u128
            + self.total_unconfirmed_fund as u128
            + net_amount as u128;
        require!(
            projected <= config.maximum_total_staking_limit as u128,
            ErrorCode::ExceedStakingLimit
        );

        let settlement = if config.settlement_window.contains(now) {
            let shares = self.shares_by_underlying(net_amount)?;
            require!(shares > 0, ErrorCode::ZeroSharesMinted);
            self.settle(net_amount, shares)?;
            recipient.credit_shares(shares)?;
            Settlement::Immediate { shares }
        } else {
            recipient.unconfirmed_fund = add(recipient.unconfirmed_fund, net_amount)?;
            self.total_unconfirmed_fund = add(self.total_unconfirmed_fund, net_amount)?;
            Settlement::Deferred
        };

        self.protocol_fee = add(self.protocol_fee, fee)?;

        Ok(SubscriptionReceipt {
            fee,
            net_amount,
            settlement,
        })
    }

    /// Converts an account's staged subscription into shares at the current ratio.
    ///
    /// The staged amount is always cleared. A dust amount that floors to zero
    /// shares still lands in `total_supply`, accruing to existing holders.
    pub fn mint_unconfirmed(&mut self, account: &mut ShareAccount) -> Result<Option<MintReceipt>> {
        let amount = account.unconfirmed_fund;
        if amount == 0 {
            return Ok(None);
        }

        let shares = self.shares_by_underlying(amount)?;
        self.settle(amount, shares)?;
        self.total_unconfirmed_fund = sub(self.total_unconfirmed_fund, amount)?;
        account.unconfirmed_fund = 0;
        account.credit_shares(shares)?;

        Ok(Some(MintReceipt { amount, shares }))
    }

    /// Burns every matured redeem request of `account`. Immature requests stay queued.
    pub fn burn_matured(
        &mut self,
        config: &PoolConfig,
        account: &mut ShareAccount,
        now: i64,
    ) -> Result<Option<BurnReceipt>> {
        let interval = config.minimum_redeem_interval;
        let (shares, requests) = account.matured_shares(now, interval);
        if requests == 0 {
            return Ok(None);
        }

        require!(shares <= account.shares, ErrorCode::InvalidPoolState);
        let amount = self.underlying_by_shares(shares)?;
        require!(amount <= self.buffered_fund, ErrorCode::ExceedBufferedFund);

        let fee = mul_bps(amount, config.redeem_fee_bps)?;
        let payout = sub(amount, fee)?;

        account.drop_matured(now, interval);
        account.shares -= shares;
        self.total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or_else(|| error!(ErrorCode::InvalidPoolState))?;
        self.total_supply = sub(self.total_supply, amount)?;
        self.buffered_fund -= amount;
        self.protocol_fee = add(self.protocol_fee, fee)?;

        Ok(Some(BurnReceipt {
            shares,
            amount,
            fee,
            payout,
            requests: requests as u32,
        }))
    }

    /// Reconciles `total_supply` with the reserve's reported net value.
    pub fn rebase(&mut self, config: &PoolConfig, new_net_value: u64) -> Result<RebaseReceipt> {
        let prior_reserve = self.reserved_fund as i128 + self.transient_out_fund as i128
            - self.transient_in_fund as i128;
        let delta = new_net_value as i128 - prior_reserve;

        let next_supply = self.total_supply as i128 + delta;
        require!(next_supply >= 0, ErrorCode::RebaseUnderflow);

        if self.total_supply > 0 && delta != 0 {
            let bps = if delta > 0 {
                config.max_rebase_up_bps
            } else {
                config.max_rebase_down_bps
            };
            require!(
                delta.unsigned_abs() * BPS_DENOM as u128
                    <= self.total_supply as u128 * bps as u128,
                ErrorCode::RebaseRateExceeded
            );
        }

        self.total_supply =
            u64::try_from(next_supply).map_err(|_| error!(ErrorCode::MathOverflow))?;
        self.reserved_fund = new_net_value;
        self.transient_in_fund = 0;
        self.transient_out_fund = 0;

        Ok(RebaseReceipt {
            prior_reserve,
            delta,
            total_supply: self.total_supply,
        })
    }

    pub fn withdraw_to_reserve(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(amount <= self.buffered_fund, ErrorCode::ExceedBufferedFund);

        self.buffered_fund -= amount;
        self.transient_out_fund = add(self.transient_out_fund, amount)?;
        Ok(())
    }

    pub fn funding_from_reserve(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        self.buffered_fund = add(self.buffered_fund, amount)?;
        self.transient_in_fund = add(self.transient_in_fund, amount)?;
        Ok(())
    }

    pub fn collect_fee(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(amount <= self.protocol_fee, ErrorCode::ExceedProtocolFee);

        self.protocol_fee -= amount;
        Ok(())
    }
}
