use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use deny_list::BlockList;

use crate::{
    constants::{POOL_AUTH_SEED, POOL_SEED},
    error::ErrorCode,
    events::SharesBurned,
    helpers::{deny_policy, require_role, transfer_from_vault, DenyPolicy},
    state::{BurnReceipt, Feature, Pool, PoolConfig, PoolLedger, Role, ShareAccount},
};

fn settle_holder(
    ledger: &mut PoolLedger,
    config: &PoolConfig,
    deny: &DenyPolicy<'_>,
    account: &mut ShareAccount,
    now: i64,
) -> Result<Option<BurnReceipt>> {
    deny.ensure_allowed(&account.owner)?;
    ledger.burn_matured(config, account, now)
}

/// `remaining_accounts` holds `(share_account, owner_token_account)` pairs.
/// Only matured redeem requests are burned; accounts without any are skipped.
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, BurnShares<'info>>) -> Result<()> {
    require_role(&ctx.accounts.pool, Role::Burner, &ctx.accounts.burner)?;
    ctx.accounts.pool.require_active(Feature::Redemption)?;

    let remaining = ctx.remaining_accounts;
    require!(
        !remaining.is_empty() && remaining.len() % 2 == 0,
        ErrorCode::InvalidRemainingAccounts
    );

    let deny = deny_policy(&ctx.accounts.pool, &ctx.accounts.block_list)?;
    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();
    let authority_bump = ctx.accounts.pool.authority_bump;
    let underlying_mint = ctx.accounts.pool.underlying_mint;
    let config = ctx.accounts.pool.config;

    let mut burned = 0u32;
    for pair in remaining.chunks(2) {
        let (share_info, token_info) = (&pair[0], &pair[1]);
        require!(share_info.is_writable, ErrorCode::InvalidRemainingAccounts);

        let mut share_account: Account<'info, ShareAccount> = Account::try_from(share_info)?;
        require_keys_eq!(share_account.pool, pool_key, ErrorCode::InvalidShareAccount);
        let owner_token_account: Account<'info, TokenAccount> = Account::try_from(token_info)?;
        require_keys_eq!(
            owner_token_account.owner,
            share_account.owner,
            ErrorCode::InvalidTokenAccount
        );
        require_keys_eq!(
            owner_token_account.mint,
            underlying_mint,
            ErrorCode::InvalidTokenAccount
        );

        let Some(receipt) = settle_holder(
            &mut ctx.accounts.pool.ledger,
            &config,
            &deny,
            &mut share_account,
            now,
        )?
        else {
            continue;
        };
        share_account.exit(&crate::ID)?;

        transfer_from_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.buffer_vault,
            token_info.clone(),
            &ctx.accounts.pool_authority,
            &pool_key,
            authority_bump,
            receipt.payout,
        )?;
        burned += 1;

        emit!(SharesBurned {
            pool: pool_key,
            owner: share_account.owner,
            shares: receipt.shares,
            amount: receipt.amount,
            fee: receipt.fee,
            payout: receipt.payout,
            requests: receipt.requests,
        });
    }

    msg!(
        "burn_shares: {} of {} accounts settled, buffered_fund={}",
        burned,
        remaining.len() / 2,
        ctx.accounts.pool.ledger.buffered_fund
    );

    Ok(())
}

#[derive(Accounts)]
pub struct BurnShares<'info> {
    pub burner: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA authority for buffer vault transfer signing.
    #[account(seeds = [POOL_AUTH_SEED, pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(mut, address = pool.buffer_vault)]
    pub buffer_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub block_list: Option<Account<'info, BlockList>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIDNIGHT: i64 = 1_700_006_400;

    fn funded(owner: Pubkey, config: &PoolConfig) -> (PoolLedger, ShareAccount) {
        let mut ledger = PoolLedger::default();
        let mut account = ShareAccount {
            owner,
            ..ShareAccount::default()
        };
        ledger.subscribe(config, &mut account, 1_000, MIDNIGHT).unwrap();
        account.request_redeem(config, 400, MIDNIGHT).unwrap();
        (ledger, account)
    }

    #[test]
    fn blocked_holder_is_not_paid_out() {
        let config = PoolConfig::default();
        let owner = Pubkey::new_unique();
        let list_key = Pubkey::new_unique();
        let list = BlockList {
            owner: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            blocked: vec![owner],
            bump: 255,
        };
        let deny = DenyPolicy::resolve(list_key, Some((list_key, &list))).unwrap();
        let (mut ledger, mut account) = funded(owner, &config);
        let before = ledger;
        let matured = MIDNIGHT + config.minimum_redeem_interval;

        assert_eq!(
            settle_holder(&mut ledger, &config, &deny, &mut account, matured).unwrap_err(),
            ErrorCode::AddressBlocked.into()
        );
        assert_eq!(ledger, before);
        assert_eq!(account.shares, 1_000);
        assert_eq!(account.redeem_queue.len(), 1);
    }

    #[test]
    fn clean_holder_settles_matured_requests() {
        let config = PoolConfig::default();
        let (mut ledger, mut account) = funded(Pubkey::new_unique(), &config);
        let matured = MIDNIGHT + config.minimum_redeem_interval;

        let deny = DenyPolicy::Disabled;
        let receipt = settle_holder(&mut ledger, &config, &deny, &mut account, matured)
            .unwrap()
            .unwrap();
        assert_eq!(receipt.payout, 400);
        assert_eq!(receipt.requests, 1);
        assert_eq!(account.shares, 600);
        assert_eq!(ledger.buffered_fund, 600);
    }
}
