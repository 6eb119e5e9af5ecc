use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    events::PauseUpdated,
    helpers::require_role,
    state::{Feature, Pool, Role},
};

pub fn handler(ctx: Context<SetPause>, feature: Feature, paused: bool) -> Result<()> {
    let role = match feature {
        Feature::Subscription => Role::Minter,
        Feature::Redemption => Role::Burner,
    };
    require_role(&ctx.accounts.pool, role, &ctx.accounts.authority)?;

    let pool = &mut ctx.accounts.pool;
    pool.set_paused(feature, paused);
    emit!(PauseUpdated {
        pool: pool.key(),
        feature,
        paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
