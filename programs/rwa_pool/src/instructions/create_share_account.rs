use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, SHARE_ACCOUNT_SEED},
    error::ErrorCode,
    state::{Pool, ShareAccount},
};

pub fn handler(ctx: Context<CreateShareAccount>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    require_keys_neq!(owner, Pubkey::default(), ErrorCode::ZeroAddress);
    require_keys_neq!(owner, ctx.accounts.pool.key(), ErrorCode::InvalidRecipient);

    let share_account = &mut ctx.accounts.share_account;
    share_account.owner = owner;
    share_account.pool = ctx.accounts.pool.key();
    share_account.shares = 0;
    share_account.unconfirmed_fund = 0;
    share_account.redeem_queue = Vec::new();
    share_account.permit_nonce = 0;
    share_account.bump = ctx.bumps.share_account;

    Ok(())
}

#[derive(Accounts)]
pub struct CreateShareAccount<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: any address may hold shares, including program PDAs.
    pub owner: UncheckedAccount<'info>,
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init,
        payer = payer,
        seeds = [SHARE_ACCOUNT_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump,
        space = 8 + ShareAccount::INIT_SPACE,
    )]
    pub share_account: Account<'info, ShareAccount>,
    pub system_program: Program<'info, System>,
}
