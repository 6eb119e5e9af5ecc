use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{POOL_AUTH_SEED, POOL_SEED},
    error::ErrorCode,
    events::{ReserveFunded, ReserveWithdrawn},
    helpers::{require_role, transfer_from_vault, transfer_to_vault},
    state::{Pool, Role},
};

/// Moves custody out to the reserve. Supply and shares are untouched until the
/// next rebase.
pub fn withdraw_handler(ctx: Context<ReserveFlow>, amount: u64) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Reserve, &ctx.accounts.reserve)?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.ledger.withdraw_to_reserve(amount)?;
    let (authority_bump, buffered_fund) = (pool.authority_bump, pool.ledger.buffered_fund);

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.buffer_vault,
        ctx.accounts.reserve_token_account.to_account_info(),
        &ctx.accounts.pool_authority,
        &pool_key,
        authority_bump,
        amount,
    )?;

    emit!(ReserveWithdrawn {
        pool: pool_key,
        amount,
        buffered_fund,
    });

    Ok(())
}

pub fn funding_handler(ctx: Context<ReserveFlow>, amount: u64) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Reserve, &ctx.accounts.reserve)?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.ledger.funding_from_reserve(amount)?;
    let buffered_fund = pool.ledger.buffered_fund;

    transfer_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.reserve_token_account,
        &ctx.accounts.buffer_vault,
        ctx.accounts.reserve.to_account_info(),
        amount,
    )?;

    emit!(ReserveFunded {
        pool: pool_key,
        amount,
        buffered_fund,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReserveFlow<'info> {
    pub reserve: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA authority for buffer vault transfer signing.
    #[account(seeds = [POOL_AUTH_SEED, pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(mut, address = pool.buffer_vault)]
    pub buffer_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = reserve_token_account.mint == pool.underlying_mint @ ErrorCode::InvalidTokenAccount,
        constraint = reserve_token_account.owner == reserve.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub reserve_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
