use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{BUFFER_VAULT_SEED, POOL_AUTH_SEED, POOL_SEED, POOL_VERSION},
    events::PoolInitialized,
    helpers::to_fixed_bytes,
    state::{Pool, PoolConfig, PoolLedger, PoolRoles},
};

pub fn handler(
    ctx: Context<InitializePool>,
    pool_id: u64,
    name: String,
    symbol: String,
    roles: PoolRoles,
) -> Result<()> {
    roles.validate()?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.version = POOL_VERSION;
    pool.factory = ctx.accounts.factory.key();
    pool.pool_id = pool_id;
    pool.name = to_fixed_bytes(&name)?;
    pool.symbol = to_fixed_bytes(&symbol)?;
    pool.decimals = ctx.accounts.underlying_mint.decimals;
    pool.underlying_mint = ctx.accounts.underlying_mint.key();
    pool.buffer_vault = ctx.accounts.buffer_vault.key();
    pool.roles = roles;
    pool.block_list = Pubkey::default();
    pool.subscription_paused = false;
    pool.redemption_paused = false;
    pool.config = PoolConfig::default();
    pool.ledger = PoolLedger::default();
    pool.bump = ctx.bumps.pool;
    pool.authority_bump = ctx.bumps.pool_authority;
    pool._reserved = [0; 64];

    emit!(PoolInitialized {
        pool: pool_key,
        factory: pool.factory,
        pool_id,
        underlying_mint: pool.underlying_mint,
        roles,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitializePool<'info> {
    /// Registry authority that owns the pool's upgrade path.
    pub factory: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub underlying_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = payer,
        seeds = [POOL_SEED, factory.key().as_ref(), &pool_id.to_le_bytes()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA authority for buffer vault transfer signing.
    #[account(seeds = [POOL_AUTH_SEED, pool.key().as_ref()], bump)]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [BUFFER_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = underlying_mint,
        token::authority = pool_authority,
    )]
    pub buffer_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
