use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    events::Rebased,
    helpers::require_role,
    state::{Pool, Role},
};

pub fn handler(ctx: Context<Rebase>, new_net_value: u64) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::RebaseAdmin, &ctx.accounts.rebase_admin)?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    let config = pool.config;
    let receipt = pool.ledger.rebase(&config, new_net_value)?;

    msg!(
        "rebase: prior_reserve={} delta={} total_supply={}",
        receipt.prior_reserve,
        receipt.delta,
        receipt.total_supply
    );
    emit!(Rebased {
        pool: pool_key,
        new_net_value,
        delta: receipt.delta,
        total_supply: receipt.total_supply,
        total_shares: pool.ledger.total_shares,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Rebase<'info> {
    pub rebase_admin: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
