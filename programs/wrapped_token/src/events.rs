use anchor_lang::prelude::*;

#[event]
pub struct Wrapped {
    pub wrapper: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub wrapped: u64,
}

#[event]
pub struct Unwrapped {
    pub wrapper: Pubkey,
    pub owner: Pubkey,
    pub wrapped: u64,
    pub amount: u64,
}
