use anchor_lang::prelude::*;
use deny_list::BlockList;

use crate::{
    constants::{ALLOWANCE_SEED, POOL_SEED},
    error::ErrorCode,
    events::Approval,
    helpers::deny_policy,
    state::{Allowance, Pool},
};

enum AllowanceChange {
    Set(u64),
    Increase(u64),
    Decrease(u64),
}

fn apply(ctx: Context<Approve>, spender: Pubkey, change: AllowanceChange) -> Result<()> {
    require_keys_neq!(spender, Pubkey::default(), ErrorCode::ZeroAddress);

    let owner = ctx.accounts.owner.key();
    deny_policy(&ctx.accounts.pool, &ctx.accounts.block_list)?
        .ensure_all_allowed(&[owner, spender])?;

    let pool_key = ctx.accounts.pool.key();
    let allowance = &mut ctx.accounts.allowance;
    allowance.pool = pool_key;
    allowance.owner = owner;
    allowance.spender = spender;
    allowance.bump = ctx.bumps.allowance;

    let amount = match change {
        AllowanceChange::Set(amount) => {
            allowance.amount = amount;
            amount
        }
        AllowanceChange::Increase(added) => allowance.increase(added)?,
        AllowanceChange::Decrease(subtracted) => allowance.decrease(subtracted)?,
    };

    emit!(Approval {
        pool: pool_key,
        owner,
        spender,
        amount,
    });

    Ok(())
}

pub fn handler(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
    apply(ctx, spender, AllowanceChange::Set(amount))
}

pub fn increase_handler(ctx: Context<Approve>, spender: Pubkey, added: u64) -> Result<()> {
    apply(ctx, spender, AllowanceChange::Increase(added))
}

pub fn decrease_handler(ctx: Context<Approve>, spender: Pubkey, subtracted: u64) -> Result<()> {
    apply(ctx, spender, AllowanceChange::Decrease(subtracted))
}

#[derive(Accounts)]
#[instruction(spender: Pubkey)]
pub struct Approve<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [ALLOWANCE_SEED, pool.key().as_ref(), owner.key().as_ref(), spender.as_ref()],
        bump,
        space = 8 + Allowance::INIT_SPACE,
    )]
    pub allowance: Account<'info, Allowance>,
    pub block_list: Option<Account<'info, BlockList>>,
    pub system_program: Program<'info, System>,
}
