use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use rwa_pool::{program::RwaPool, Pool};

use crate::{
    constants::{WRAPPED_MINT_SEED, WRAPPER_AUTH_SEED, WRAPPER_SEED},
    state::Wrapper,
};

pub fn handler(ctx: Context<InitializeWrapper>) -> Result<()> {
    let cpi_accounts = rwa_pool::cpi::accounts::CreateShareAccount {
        payer: ctx.accounts.payer.to_account_info(),
        owner: ctx.accounts.wrapper_authority.to_account_info(),
        pool: ctx.accounts.pool.to_account_info(),
        share_account: ctx.accounts.wrapper_share_account.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    rwa_pool::cpi::create_share_account(CpiContext::new(
        ctx.accounts.rwa_pool_program.to_account_info(),
        cpi_accounts,
    ))?;

    let wrapper = &mut ctx.accounts.wrapper;
    wrapper.pool = ctx.accounts.pool.key();
    wrapper.mint = ctx.accounts.wrapped_mint.key();
    wrapper.share_account = ctx.accounts.wrapper_share_account.key();
    wrapper.authority_bump = ctx.bumps.wrapper_authority;
    wrapper.bump = ctx.bumps.wrapper;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeWrapper<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub pool: Account<'info, Pool>,
    #[account(
        init,
        payer = payer,
        seeds = [WRAPPER_SEED, pool.key().as_ref()],
        bump,
        space = 8 + Wrapper::INIT_SPACE,
    )]
    pub wrapper: Account<'info, Wrapper>,
    /// CHECK: PDA that holds the wrapper's pool shares and mints wrapped units.
    #[account(seeds = [WRAPPER_AUTH_SEED, pool.key().as_ref()], bump)]
    pub wrapper_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [WRAPPED_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = pool.decimals,
        mint::authority = wrapper_authority,
    )]
    pub wrapped_mint: Account<'info, Mint>,
    /// CHECK: created and seed-checked by the pool program.
    #[account(mut)]
    pub wrapper_share_account: UncheckedAccount<'info>,
    pub rwa_pool_program: Program<'info, RwaPool>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
