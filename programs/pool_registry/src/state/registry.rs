use anchor_lang::prelude::*;

use crate::{constants::MAX_POOLS, error::ErrorCode};

#[account]
#[derive(InitSpace)]
pub struct Registry {
    pub owner: Pubkey,
    #[max_len(MAX_POOLS)]
    pub pools: Vec<Pubkey>,
    pub authority_bump: u8,
    pub bump: u8,
}

impl Registry {
    /// Pools are numbered by creation order.
    pub fn next_pool_id(&self) -> u64 {
        self.pools.len() as u64
    }

    pub fn contains(&self, pool: &Pubkey) -> bool {
        self.pools.contains(pool)
    }

    pub fn register(&mut self, pool: Pubkey) -> Result<()> {
        require!(!self.contains(&pool), ErrorCode::PoolAlreadyListed);
        require!(self.pools.len() < MAX_POOLS, ErrorCode::RegistryFull);
        self.pools.push(pool);
        Ok(())
    }
}
