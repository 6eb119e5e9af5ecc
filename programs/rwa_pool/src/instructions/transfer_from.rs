use anchor_lang::prelude::*;
use deny_list::BlockList;

use crate::{
    constants::{ALLOWANCE_SEED, POOL_SEED, SHARE_ACCOUNT_SEED},
    error::ErrorCode,
    events::SharesTransferred,
    helpers::{deny_policy, require_valid_recipient},
    state::{move_shares, Allowance, Pool, ShareAccount},
};

pub fn handler(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let pool = &ctx.accounts.pool;
    let spender = ctx.accounts.spender.key();
    let from = ctx.accounts.from_share_account.owner;
    let to = ctx.accounts.to_share_account.owner;
    require_valid_recipient(&pool.key(), &from, &to)?;
    deny_policy(pool, &ctx.accounts.block_list)?.ensure_all_allowed(&[spender, from, to])?;

    ctx.accounts.allowance.spend(amount)?;
    let shares = pool.ledger.shares_by_underlying(amount)?;
    move_shares(
        &mut ctx.accounts.from_share_account,
        &mut ctx.accounts.to_share_account,
        shares,
    )?;

    emit!(SharesTransferred {
        pool: pool.key(),
        from,
        to,
        shares,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    pub spender: Signer<'info>,
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [
            ALLOWANCE_SEED,
            pool.key().as_ref(),
            from_share_account.owner.as_ref(),
            spender.key().as_ref(),
        ],
        bump = allowance.bump,
    )]
    pub allowance: Account<'info, Allowance>,
    #[account(
        mut,
        seeds = [
            SHARE_ACCOUNT_SEED,
            pool.key().as_ref(),
            from_share_account.owner.as_ref(),
        ],
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
