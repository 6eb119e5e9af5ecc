use anchor_lang::prelude::*;
use deny_list::BlockList;

use crate::{
    constants::POOL_SEED,
    error::ErrorCode,
    events::SharesMinted,
    helpers::{deny_policy, require_role},
    state::{Feature, Pool, Role, ShareAccount},
};

/// Settles staged subscriptions of every share account passed in
/// `remaining_accounts`, in the order given.
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, MintShares<'info>>) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Minter, &ctx.accounts.minter)?;
    ctx.accounts.pool.require_active(Feature::Subscription)?;
    require!(
        !ctx.remaining_accounts.is_empty(),
        ErrorCode::InvalidRemainingAccounts
    );

    let deny = deny_policy(&ctx.accounts.pool, &ctx.accounts.block_list)?;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    let mut minted = 0u32;
    for info in ctx.remaining_accounts.iter() {
        require!(info.is_writable, ErrorCode::InvalidRemainingAccounts);
        let mut share_account: Account<'info, ShareAccount> = Account::try_from(info)?;
        require_keys_eq!(share_account.pool, pool_key, ErrorCode::InvalidShareAccount);
        deny.ensure_allowed(&share_account.owner)?;

        if let Some(receipt) = pool.ledger.mint_unconfirmed(&mut share_account)? {
            share_account.exit(&crate::ID)?;
            minted += 1;
            emit!(SharesMinted {
                pool: pool_key,
                owner: share_account.owner,
                amount: receipt.amount,
                shares: receipt.shares,
            });
        }
    }

    msg!(
        "mint_shares: {} of {} accounts settled, total_shares={}",
        minted,
        ctx.remaining_accounts.len(),
        pool.ledger.total_shares
    );

    Ok(())
}

#[derive(Accounts)]
pub struct MintShares<'info> {
    pub minter: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    pub block_list: Option<Account<'info, BlockList>>,
}
