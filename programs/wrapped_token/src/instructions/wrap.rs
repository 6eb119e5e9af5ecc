use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use rwa_pool::{program::RwaPool, Pool, ShareAccount};

use crate::{
    constants::{WRAPPER_AUTH_SEED, WRAPPER_SEED},
    error::ErrorCode,
    events::Wrapped,
    helpers::wrapped_for_amount,
    state::Wrapper,
};

pub fn handler(ctx: Context<Wrap>, amount: u64) -> Result<()> {
    let wrapped = wrapped_for_amount(&ctx.accounts.pool.ledger, amount)?;

    let cpi_accounts = rwa_pool::cpi::accounts::TransferShares {
        owner: ctx.accounts.user.to_account_info(),
        pool: ctx.accounts.pool.to_account_info(),
        from_share_account: ctx.accounts.user_share_account.to_account_info(),
        to_share_account: ctx.accounts.wrapper_share_account.to_account_info(),
        block_list: ctx.accounts.block_list.as_ref().map(|a| a.to_account_info()),
    };
    rwa_pool::cpi::transfer_shares(
        CpiContext::new(ctx.accounts.rwa_pool_program.to_account_info(), cpi_accounts),
        wrapped as u128,
    )?;

    let pool_key = ctx.accounts.pool.key();
    let seeds: &[&[u8]] = &[
        WRAPPER_AUTH_SEED,
        pool_key.as_ref(),
        &[ctx.accounts.wrapper.authority_bump],
    ];
    let signer_seeds = &[seeds];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.wrapped_mint.to_account_info(),
                to: ctx.accounts.user_wrapped_account.to_account_info(),
                authority: ctx.accounts.wrapper_authority.to_account_info(),
            },
            signer_seeds,
        ),
        wrapped,
    )?;

    emit!(Wrapped {
        wrapper: ctx.accounts.wrapper.key(),
        owner: ctx.accounts.user.key(),
        amount,
        wrapped,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Wrap<'info> {
    pub user: Signer<'info>,
    #[account(
        seeds = [WRAPPER_SEED, pool.key().as_ref()],
        bump = wrapper.bump,
        has_one = pool,
    )]
    pub wrapper: Account<'info, Wrapper>,
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA mint authority of the wrapped token.
    #[account(seeds = [WRAPPER_AUTH_SEED, pool.key().as_ref()], bump = wrapper.authority_bump)]
    pub wrapper_authority: UncheckedAccount<'info>,
    #[account(mut, address = wrapper.mint)]
    pub wrapped_mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = user_wrapped_account.mint == wrapped_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = user_wrapped_account.owner == user.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub user_wrapped_account: Account<'info, TokenAccount>,
    #[account(mut)]
    pub user_share_account: Account<'info, ShareAccount>,
    #[account(mut, address = wrapper.share_account)]
    pub wrapper_share_account: Account<'info, ShareAccount>,
    /// CHECK: validated by the pool program against its configured denylist.
    pub block_list: Option<UncheckedAccount<'info>>,
    pub rwa_pool_program: Program<'info, RwaPool>,
    pub token_program: Program<'info, Token>,
}
