use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Wrapper {
    pub pool: Pubkey,
    pub mint: Pubkey,
    /// Pool share account owned by the wrapper authority; backs every wrapped unit.
    pub share_account: Pubkey,
    pub authority_bump: u8,
    pub bump: u8,
}
