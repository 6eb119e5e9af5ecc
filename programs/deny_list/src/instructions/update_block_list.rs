use anchor_lang::prelude::*;

use crate::{
    constants::BLOCK_LIST_SEED,
    error::ErrorCode,
    events::{BlockListOwnershipTransferred, BlockListUpdated},
    state::BlockList,
};

pub fn add_handler(ctx: Context<UpdateBlockList>, addresses: Vec<Pubkey>) -> Result<()> {
    let block_list_key = ctx.accounts.block_list.key();
    let added = ctx.accounts.block_list.add(&addresses)?;
    msg!("blocked {} new addresses", added);

    emit!(BlockListUpdated {
        block_list: block_list_key,
        blocked: true,
        addresses,
    });
    Ok(())
}

pub fn remove_handler(ctx: Context<UpdateBlockList>, addresses: Vec<Pubkey>) -> Result<()> {
    let block_list_key = ctx.accounts.block_list.key();
    let removed = ctx.accounts.block_list.remove(&addresses);
    msg!("unblocked {} addresses", removed);

    emit!(BlockListUpdated {
        block_list: block_list_key,
        blocked: false,
        addresses,
    });
    Ok(())
}

pub fn transfer_ownership_handler(ctx: Context<UpdateBlockList>, new_owner: Pubkey) -> Result<()> {
    require_keys_neq!(new_owner, Pubkey::default(), ErrorCode::ZeroAddress);

    let block_list_key = ctx.accounts.block_list.key();
    let list = &mut ctx.accounts.block_list;
    let previous_owner = list.owner;
    list.owner = new_owner;

    emit!(BlockListOwnershipTransferred {
        block_list: block_list_key,
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateBlockList<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [BLOCK_LIST_SEED, block_list.creator.as_ref()],
        bump = block_list.bump,
        constraint = block_list.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub block_list: Account<'info, BlockList>,
}
