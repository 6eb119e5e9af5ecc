use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as ix_sysvar;
use deny_list::BlockList;

use crate::{
    constants::{ALLOWANCE_SEED, POOL_SEED, SHARE_ACCOUNT_SEED},
    error::ErrorCode,
    events::Approval,
    helpers::{
        deny_policy, domain_separator, load_preceding_instruction, permit_message,
        verify_ed25519_instruction, DenyPolicy, PermitPayload,
    },
    state::{Allowance, Pool, ShareAccount},
};

fn authorize(deny: &DenyPolicy<'_>, payload: &PermitPayload, now: i64) -> Result<()> {
    deny.ensure_all_allowed(&[payload.owner, payload.spender])?;
    require!(now <= payload.deadline, ErrorCode::PermitExpired);
    require_keys_neq!(payload.spender, Pubkey::default(), ErrorCode::ZeroAddress);
    Ok(())
}

/// Sets `owner -> spender` allowance from an owner signature verified by the
/// Ed25519 instruction placed right before this one. Any relayer may submit it.
pub fn handler(ctx: Context<Permit>, spender: Pubkey, value: u64, deadline: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();
    let owner = ctx.accounts.owner_share_account.owner;
    let payload = PermitPayload {
        owner,
        spender,
        value,
        nonce: ctx.accounts.owner_share_account.permit_nonce,
        deadline,
    };
    authorize(
        &deny_policy(&ctx.accounts.pool, &ctx.accounts.block_list)?,
        &payload,
        now,
    )?;

    let domain = domain_separator(&pool_key, ctx.accounts.pool.name_bytes());
    let message = permit_message(&domain, &payload);

    let verification = load_preceding_instruction(&ctx.accounts.instructions_sysvar)?;
    verify_ed25519_instruction(&verification, &owner, &message)?;

    ctx.accounts.owner_share_account.consume_permit_nonce()?;

    let allowance = &mut ctx.accounts.allowance;
    allowance.pool = pool_key;
    allowance.owner = owner;
    allowance.spender = spender;
    allowance.amount = value;
    allowance.bump = ctx.bumps.allowance;

    emit!(Approval {
        pool: pool_key,
        owner,
        spender,
        amount: value,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(spender: Pubkey)]
pub struct Permit<'info> {
    #[account(mut)]
    pub relayer: Signer<'info>,
    #[account(
        seeds = [POOL_SEED, pool.factory.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [
            SHARE_ACCOUNT_SEED,
            pool.key().as_ref(),
            owner_share_account.owner.as_ref(),
        ],
        bump = owner_share_account.bump,
    )]
    pub owner_share_account: Account<'info, ShareAccount>,
    #[account(
        init_if_needed,
        payer = relayer,
        seeds = [
            ALLOWANCE_SEED,
            pool.key().as_ref(),
            owner_share_account.owner.as_ref(),
            spender.as_ref(),
        ],
        bump,
        space = 8 + Allowance::INIT_SPACE,
    )]
    pub allowance: Account<'info, Allowance>,
    /// CHECK: address pinned to the instructions sysvar.
    #[account(address = ix_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
    pub block_list: Option<Account<'info, BlockList>>,
    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn payload(owner: Pubkey, spender: Pubkey) -> PermitPayload {
        PermitPayload {
            owner,
            spender,
            value: 500,
            nonce: 0,
            deadline: NOW + 60,
        }
    }

    #[test]
    fn blocked_owner_or_spender_cannot_permit() {
        let owner = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let blocked = Pubkey::new_unique();
        let list_key = Pubkey::new_unique();
        let list = BlockList {
            owner: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            blocked: vec![blocked],
            bump: 255,
        };
        let deny = DenyPolicy::resolve(list_key, Some((list_key, &list))).unwrap();

        authorize(&deny, &payload(owner, spender), NOW).unwrap();
        assert_eq!(
            authorize(&deny, &payload(blocked, spender), NOW).unwrap_err(),
            ErrorCode::AddressBlocked.into()
        );
        assert_eq!(
            authorize(&deny, &payload(owner, blocked), NOW).unwrap_err(),
            ErrorCode::AddressBlocked.into()
        );
    }

    #[test]
    fn expired_or_zero_spender_is_rejected() {
        let owner = Pubkey::new_unique();
        let deny = DenyPolicy::Disabled;

        assert_eq!(
            authorize(&deny, &payload(owner, Pubkey::new_unique()), NOW + 61).unwrap_err(),
            ErrorCode::PermitExpired.into()
        );
        assert_eq!(
            authorize(&deny, &payload(owner, Pubkey::default()), NOW).unwrap_err(),
            ErrorCode::ZeroAddress.into()
        );
    }
}
