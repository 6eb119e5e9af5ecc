use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{POOL_AUTH_SEED, POOL_SEED},
    error::ErrorCode,
    events::FeeCollected,
    helpers::{require_role, transfer_from_vault},
    state::{Pool, Role},
};

pub fn handler(ctx: Context<CollectFee>, amount: u64) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::FeeRecipient, &ctx.accounts.fee_recipient)?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.ledger.collect_fee(amount)?;
    let (authority_bump, remaining) = (pool.authority_bump, pool.ledger.protocol_fee);

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.buffer_vault,
        ctx.accounts.recipient_token_account.to_account_info(),
        &ctx.accounts.pool_authority,
        &pool_key,
        authority_bump,
        amount,
    )?;

    emit!(FeeCollected {
        pool: pool_key,
        recipient: ctx.accounts.fee_recipient.key(),
        amount,
        remaining,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CollectFee<'info> {
    pub fee_recipient: Signer<'info>,
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
        constraint = recipient_token_account.mint == pool.underlying_mint @ ErrorCode::InvalidTokenAccount,
        constraint = recipient_token_account.owner == fee_recipient.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
