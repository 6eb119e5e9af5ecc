use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub registry: Pubkey,
    pub pool: Pubkey,
    pub pool_id: u64,
    pub underlying_mint: Pubkey,
}

#[event]
pub struct PoolsUpgraded {
    pub registry: Pubkey,
    pub pools: Vec<Pubkey>,
}

#[event]
pub struct RegistryOwnershipTransferred {
    pub registry: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
