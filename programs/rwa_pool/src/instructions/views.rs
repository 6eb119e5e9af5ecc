use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    error::ErrorCode,
    state::{Pool, ShareAccount},
};

/// Read-only quotes, returned through transaction return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub total_shares: u128,
    pub total_supply: u64,
    pub total_locked_fund: u64,
    pub buffered_fund: u64,
    pub reserved_fund: u64,
    pub protocol_fee: u64,
    pub total_unconfirmed_fund: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolderSnapshot {
    pub shares: u128,
    pub balance: u64,
    pub available_shares: u128,
    pub pending_redeem_shares: u128,
    pub unconfirmed_fund: u64,
}

pub fn pool_snapshot_handler(ctx: Context<ViewPool>) -> Result<PoolSnapshot> {
    let ledger = &ctx.accounts.pool.ledger;
    Ok(PoolSnapshot {
        total_shares: ledger.total_shares,
        total_supply: ledger.total_supply,
        total_locked_fund: ledger.total_locked_fund()?,
        buffered_fund: ledger.buffered_fund,
        reserved_fund: ledger.reserved_fund,
        protocol_fee: ledger.protocol_fee,
        total_unconfirmed_fund: ledger.total_unconfirmed_fund,
    })
}

pub fn shares_by_underlying_handler(ctx: Context<ViewPool>, amount: u64) -> Result<u128> {
    ctx.accounts.pool.ledger.shares_by_underlying(amount)
}

pub fn underlying_by_shares_handler(ctx: Context<ViewPool>, shares: u128) -> Result<u64> {
    ctx.accounts.pool.ledger.underlying_by_shares(shares)
}

pub fn holder_snapshot_handler(ctx: Context<ViewShareAccount>) -> Result<HolderSnapshot> {
    let ledger = &ctx.accounts.pool.ledger;
    let account = &ctx.accounts.share_account;
    Ok(HolderSnapshot {
        shares: account.shares,
        balance: ledger.balance_of(account)?,
        available_shares: account.available_shares(),
        pending_redeem_shares: account.pending_redeem_shares(),
        unconfirmed_fund: account.unconfirmed_fund,
    })
}

#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

#[derive(Accounts)]
pub struct ViewShareAccount<'info> {
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(constraint = share_account.pool == pool.key() @ ErrorCode::InvalidShareAccount)]
    pub share_account: Account<'info, ShareAccount>,
}
