use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, POOL_VERSION},
    error::ErrorCode,
    events::PoolMigrated,
    state::Pool,
};

pub fn handler(ctx: Context<MigratePool>) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    if let Some(from_version) = ctx.accounts.pool.migrate()? {
        emit!(PoolMigrated {
            pool: pool_key,
            from_version,
            to_version: POOL_VERSION,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct MigratePool<'info> {
    pub factory: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.factory == factory.key() @ ErrorCode::OnlyFactory,
    )]
    pub pool: Account<'info, Pool>,
}
