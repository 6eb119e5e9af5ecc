use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_POOLS, REGISTRY_AUTH_SEED, REGISTRY_SEED},
    state::Registry,
};

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.pools = Vec::with_capacity(MAX_POOLS);
    registry.authority_bump = ctx.bumps.registry_authority;
    registry.bump = ctx.bumps.registry;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [REGISTRY_SEED],
        bump,
        space = 8 + Registry::INIT_SPACE,
    )]
    pub registry: Account<'info, Registry>,
    /// CHECK: PDA recorded as the factory of every pool this registry creates.
    #[account(seeds = [REGISTRY_AUTH_SEED], bump)]
    pub registry_authority: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}
