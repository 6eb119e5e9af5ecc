use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use rwa_pool::{program::RwaPool, PoolRoles};

use crate::{
    constants::{REGISTRY_AUTH_SEED, REGISTRY_SEED},
    error::ErrorCode,
    events::PoolCreated,
    state::Registry,
};

pub fn handler(
    ctx: Context<CreatePool>,
    name: String,
    symbol: String,
    roles: PoolRoles,
) -> Result<()> {
    let pool_id = ctx.accounts.registry.next_pool_id();
    let seeds: &[&[u8]] = &[REGISTRY_AUTH_SEED, &[ctx.accounts.registry.authority_bump]];
    let signer_seeds = &[seeds];

    let cpi_accounts = rwa_pool::cpi::accounts::InitializePool {
        factory: ctx.accounts.registry_authority.to_account_info(),
        payer: ctx.accounts.owner.to_account_info(),
        underlying_mint: ctx.accounts.underlying_mint.to_account_info(),
        pool: ctx.accounts.pool.to_account_info(),
        pool_authority: ctx.accounts.pool_authority.to_account_info(),
        buffer_vault: ctx.accounts.buffer_vault.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    rwa_pool::cpi::initialize_pool(
        CpiContext::new_with_signer(
            ctx.accounts.rwa_pool_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        pool_id,
        name,
        symbol,
        roles,
    )?;

    let registry_key = ctx.accounts.registry.key();
    let pool_key = ctx.accounts.pool.key();
    ctx.accounts.registry.register(pool_key)?;

    emit!(PoolCreated {
        registry: registry_key,
        pool: pool_key,
        pool_id,
        underlying_mint: ctx.accounts.underlying_mint.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = owner @ ErrorCode::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
    /// CHECK: registry PDA that signs pool initialization as its factory.
    #[account(seeds = [REGISTRY_AUTH_SEED], bump = registry.authority_bump)]
    pub registry_authority: UncheckedAccount<'info>,
    pub underlying_mint: Account<'info, Mint>,
    /// CHECK: created and seed-checked by the pool program.
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,
    /// CHECK: seed-checked by the pool program.
    pub pool_authority: UncheckedAccount<'info>,
    /// CHECK: created and seed-checked by the pool program.
    #[account(mut)]
    pub buffer_vault: UncheckedAccount<'info>,
    pub rwa_pool_program: Program<'info, RwaPool>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
