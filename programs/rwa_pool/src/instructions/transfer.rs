use anchor_lang::prelude::*;
use deny_list::BlockList;

use crate::{
    constants::{POOL_SEED, SHARE_ACCOUNT_SEED},
    error::ErrorCode,
    events::SharesTransferred,
    helpers::{deny_policy, require_valid_recipient},
    state::{move_shares, Pool, ShareAccount},
};

/// Moves an underlying-denominated `amount`, converted to shares at the current ratio.
pub fn handler(ctx: Context<TransferShares>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    let shares = ctx.accounts.pool.ledger.shares_by_underlying(amount)?;
    ctx.accounts.transfer(shares)
}

pub fn transfer_shares_handler(ctx: Context<TransferShares>, shares: u128) -> Result<()> {
    require!(shares > 0, ErrorCode::InvalidAmount);
    ctx.accounts.transfer(shares)
}

#[derive(Accounts)]
pub struct TransferShares<'info> {
    pub owner: Signer<'info>,
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [SHARE_ACCOUNT_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = from_share_account.bump,
    )]
    pub from_share_account: Account<'info, ShareAccount>,
    #[account(
        mut,
        seeds = [
            SHARE_ACCOUNT_SEED,
            pool.key().as_ref(),
            to_share_account.owner.as_ref(),
        ],
        bump = to_share_account.bump,
    )]
    pub to_share_account: Account<'info, ShareAccount>,
    pub block_list: Option<Account<'info, BlockList>>,
}

impl<'info> TransferShares<'info> {
    fn transfer(&mut self, shares: u128) -> Result<()> {
        let from = self.from_share_account.owner;
        let to = self.to_share_account.owner;
        require_valid_recipient(&self.pool.key(), &from, &to)?;
        deny_policy(&self.pool, &self.block_list)?.ensure_all_allowed(&[from, to])?;

        move_shares(&mut self.from_share_account, &mut self.to_share_account, shares)?;

        emit!(SharesTransferred {
            pool: self.pool.key(),
            from,
            to,
            shares,
            amount: self.pool.ledger.underlying_by_shares(shares)?,
        });
        Ok(())
    }
}
