use anchor_lang::prelude::*;
use rwa_pool::program::RwaPool;

use crate::{
    constants::{REGISTRY_AUTH_SEED, REGISTRY_SEED},
    error::ErrorCode,
    events::PoolsUpgraded,
    state::Registry,
};

/// Migrates every pool passed in `remaining_accounts` to the current layout.
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, UpgradePools<'info>>) -> Result<()> {
    require!(
        !ctx.remaining_accounts.is_empty(),
        ErrorCode::InvalidRemainingAccounts
    );

    let registry = &ctx.accounts.registry;
    let seeds: &[&[u8]] = &[REGISTRY_AUTH_SEED, &[registry.authority_bump]];
    let signer_seeds = &[seeds];

    let mut pools = Vec::with_capacity(ctx.remaining_accounts.len());
    for pool in ctx.remaining_accounts.iter() {
        require!(registry.contains(pool.key), ErrorCode::PoolNotListed);

        let cpi_accounts = rwa_pool::cpi::accounts::MigratePool {
            factory: ctx.accounts.registry_authority.to_account_info(),
            pool: pool.clone(),
        };
        rwa_pool::cpi::migrate_pool(CpiContext::new_with_signer(
            ctx.accounts.rwa_pool_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ))?;
        pools.push(*pool.key);
    }

    msg!("upgrade_pools: migrated {} pools", pools.len());
    emit!(PoolsUpgraded {
        registry: registry.key(),
        pools,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpgradePools<'info> {
    pub owner: Signer<'info>,
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = owner @ ErrorCode::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
    /// CHECK: registry PDA that signs as the pools' factory.
    #[account(seeds = [REGISTRY_AUTH_SEED], bump = registry.authority_bump)]
    pub registry_authority: UncheckedAccount<'info>,
    pub rwa_pool_program: Program<'info, RwaPool>,
}
