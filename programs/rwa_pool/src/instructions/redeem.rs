use anchor_lang::prelude::*;
use deny_list::BlockList;

use crate::{
    constants::{POOL_SEED, SHARE_ACCOUNT_SEED},
    events::RedeemRequested,
    helpers::deny_policy,
    state::{Feature, Pool, ShareAccount},
};

pub fn handler(ctx: Context<Redeem>, shares_amount: u128) -> Result<()> {
    let pool = &ctx.accounts.pool;
    pool.require_active(Feature::Redemption)?;

    let owner = ctx.accounts.owner.key();
    deny_policy(pool, &ctx.accounts.block_list)?.ensure_allowed(&owner)?;

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .share_account
        .request_redeem(&pool.config, shares_amount, now)?;

    emit!(RedeemRequested {
        pool: pool.key(),
        owner,
        shares: shares_amount,
        requested_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Redeem<'info> {
    pub owner: Signer<'info>,
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [SHARE_ACCOUNT_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = share_account.bump,
    )]
    pub share_account: Account<'info, ShareAccount>,
    pub block_list: Option<Account<'info, BlockList>>,
}
