use anchor_lang::prelude::*;

use crate::{
    constants::REGISTRY_SEED, error::ErrorCode, events::RegistryOwnershipTransferred,
    state::Registry,
};

pub fn handler(ctx: Context<TransferRegistryOwnership>, new_owner: Pubkey) -> Result<()> {
    require_keys_neq!(new_owner, Pubkey::default(), ErrorCode::ZeroAddress);

    let registry = &mut ctx.accounts.registry;
    let previous_owner = registry.owner;
    registry.owner = new_owner;

    emit!(RegistryOwnershipTransferred {
        registry: registry.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferRegistryOwnership<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = owner @ ErrorCode::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
}
