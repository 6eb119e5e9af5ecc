use anchor_lang::prelude::*;

use crate::{constants::BLOCK_LIST_SEED, state::BlockList};

pub fn handler(ctx: Context<InitializeBlockList>) -> Result<()> {
    let list = &mut ctx.accounts.block_list;
    list.owner = ctx.accounts.owner.key();
    list.creator = ctx.accounts.owner.key();
    list.blocked = Vec::new();
    list.bump = ctx.bumps.block_list;
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeBlockList<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [BLOCK_LIST_SEED, owner.key().as_ref()],
        bump,
        space = 8 + BlockList::INIT_SPACE,
    )]
    pub block_list: Account<'info, BlockList>,
    pub system_program: Program<'info, System>,
}
