use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use deny_list::BlockList;

use crate::{
    constants::{POOL_SEED, SHARE_ACCOUNT_SEED},
    error::ErrorCode,
    events::Subscribed,
    helpers::{deny_policy, transfer_to_vault},
    state::{Feature, Pool, Settlement, ShareAccount},
};

pub fn handler(ctx: Context<Subscribe>, amount: u64) -> Result<()> {
    ctx.accounts.pool.require_active(Feature::Subscription)?;

    let payer = ctx.accounts.payer.key();
    let recipient = ctx.accounts.recipient_share_account.owner;
    deny_policy(&ctx.accounts.pool, &ctx.accounts.block_list)?
        .ensure_all_allowed(&[payer, recipient])?;

    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    let config = pool.config;
    let receipt = pool.ledger.subscribe(
        &config,
        &mut ctx.accounts.recipient_share_account,
        amount,
        now,
    )?;

    transfer_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.payer_token_account,
        &ctx.accounts.buffer_vault,
        ctx.accounts.payer.to_account_info(),
        amount,
    )?;

    let (shares, deferred) = match receipt.settlement {
        Settlement::Immediate { shares } => (shares, false),
        Settlement::Deferred => (0, true),
    };
    emit!(Subscribed {
        pool: pool_key,
        payer,
        recipient,
        amount,
        fee: receipt.fee,
        net_amount: receipt.net_amount,
        shares,
        deferred,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Subscribe<'info> {
    pub payer: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [
            SHARE_ACCOUNT_SEED,
            pool.key().as_ref(),
            recipient_share_account.owner.as_ref(),
        ],
        bump = recipient_share_account.bump,
    )]
    pub recipient_share_account: Account<'info, ShareAccount>,
    #[account(
        mut,
        constraint = payer_token_account.mint == pool.underlying_mint @ ErrorCode::InvalidTokenAccount,
        constraint = payer_token_account.owner == payer.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.buffer_vault)]
    pub buffer_vault: Account<'info, TokenAccount>,
    pub block_list: Option<Account<'info, BlockList>>,
    pub token_program: Program<'info, Token>,
}
