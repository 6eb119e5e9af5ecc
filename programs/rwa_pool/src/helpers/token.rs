use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::POOL_AUTH_SEED;

/// Moves underlying out of the buffer vault, signed by the pool authority PDA.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    buffer_vault: &Account<'info, TokenAccount>,
    to: AccountInfo<'info>,
    pool_authority: &UncheckedAccount<'info>,
    pool_key: &Pubkey,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let seeds: &[&[u8]] = &[POOL_AUTH_SEED, pool_key.as_ref(), &[authority_bump]];
    let signer = &[seeds];

    let cpi_accounts = Transfer {
        from: buffer_vault.to_account_info(),
        to,
        authority: pool_authority.to_account_info(),
    };

    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
        amount,
    )
}

pub fn transfer_to_vault<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    buffer_vault: &Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: buffer_vault.to_account_info(),
        authority,
    };
    token::transfer(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}
