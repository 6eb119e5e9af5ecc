use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    events::{ConfigUpdated, RoleUpdated},
    helpers::require_role,
    state::{Pool, PoolConfig, Role, SettlementWindow},
};

fn update_config(ctx: Context<ConfigurePool>, update: impl FnOnce(&mut PoolConfig)) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Admin, &ctx.accounts.admin)?;

    let mut config = ctx.accounts.pool.config;
    update(&mut config);
    config.validate()?;

    let pool = &mut ctx.accounts.pool;
    pool.config = config;
    emit!(ConfigUpdated {
        pool: pool.key(),
        config,
        block_list: pool.block_list,
    });

    Ok(())
}

pub fn set_protocol_fee_handler(
    ctx: Context<ConfigurePool>,
    subscribe_fee_bps: u16,
    redeem_fee_bps: u16,
) -> Result<()> {
    update_config(ctx, |config| {
        config.subscribe_fee_bps = subscribe_fee_bps;
        config.redeem_fee_bps = redeem_fee_bps;
    })
}

pub fn set_rebase_rate_limit_handler(
    ctx: Context<ConfigurePool>,
    max_rebase_up_bps: u16,
    max_rebase_down_bps: u16,
) -> Result<()> {
    update_config(ctx, |config| {
        config.max_rebase_up_bps = max_rebase_up_bps;
        config.max_rebase_down_bps = max_rebase_down_bps;
    })
}

pub fn set_max_redeem_queue_size_handler(ctx: Context<ConfigurePool>, size: u8) -> Result<()> {
    update_config(ctx, |config| config.max_redeem_queue_size = size)
}

pub fn set_minimum_subscribe_amount_handler(ctx: Context<ConfigurePool>, amount: u64) -> Result<()> {
    update_config(ctx, |config| config.minimum_subscribe_amount = amount)
}

pub fn set_minimum_redeem_amount_handler(ctx: Context<ConfigurePool>, shares: u128) -> Result<()> {
    update_config(ctx, |config| config.minimum_redeem_amount = shares)
}

pub fn set_maximum_total_staking_limit_handler(
    ctx: Context<ConfigurePool>,
    limit: u64,
) -> Result<()> {
    update_config(ctx, |config| config.maximum_total_staking_limit = limit)
}

pub fn set_minimum_redeem_interval_handler(
    ctx: Context<ConfigurePool>,
    interval_secs: i64,
) -> Result<()> {
    update_config(ctx, |config| config.minimum_redeem_interval = interval_secs)
}

pub fn set_settlement_window_handler(
    ctx: Context<ConfigurePool>,
    start_offset_secs: i64,
    duration_secs: i64,
) -> Result<()> {
    update_config(ctx, |config| {
        config.settlement_window = SettlementWindow {
            start_offset_secs,
            duration_secs,
        }
    })
}

/// `Pubkey::default()` disables denylist screening.
pub fn set_block_list_handler(ctx: Context<ConfigurePool>, block_list: Pubkey) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Admin, &ctx.accounts.admin)?;

    let pool = &mut ctx.accounts.pool;
    pool.block_list = block_list;
    emit!(ConfigUpdated {
        pool: pool.key(),
        config: pool.config,
        block_list,
    });

    Ok(())
}

pub fn set_role_handler(ctx: Context<ConfigurePool>, role: Role, address: Pubkey) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Admin, &ctx.accounts.admin)?;

    let pool = &mut ctx.accounts.pool;
    let previous = pool.roles.set(role, address)?;
    emit!(RoleUpdated {
        pool: pool.key(),
        role,
        previous,
        current: address,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigurePool<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
