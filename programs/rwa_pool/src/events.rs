use anchor_lang::prelude::*;

use crate::state::{Feature, PoolConfig, PoolRoles, Role};

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub factory: Pubkey,
    pub pool_id: u64,
    pub underlying_mint: Pubkey,
    pub roles: PoolRoles,
}

#[event]
pub struct PoolMigrated {
    pub pool: Pubkey,
    pub from_version: u8,
    pub to_version: u8,
}

#[event]
pub struct Subscribed {
    pub pool: Pubkey,
    pub payer: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub net_amount: u64,
    /// Zero when the subscription was staged outside the settlement window.
    pub shares: u128,
    pub deferred: bool,
}

#[event]
pub struct SharesMinted {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub shares: u128,
}

#[event]
pub struct RedeemRequested {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub shares: u128,
    pub requested_at: i64,
}

#[event]
pub struct SharesBurned {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub shares: u128,
    pub amount: u64,
    pub fee: u64,
    pub payout: u64,
    pub requests: u32,
}

#[event]
pub struct Rebased {
    pub pool: Pubkey,
    pub new_net_value: u64,
    pub delta: i128,
    pub total_supply: u64,
    pub total_shares: u128,
}

#[event]
pub struct ReserveWithdrawn {
    pub pool: Pubkey,
    pub amount: u64,
    pub buffered_fund: u64,
}

#[event]
pub struct ReserveFunded {
    pub pool: Pubkey,
    pub amount: u64,
    pub buffered_fund: u64,
}

#[event]
pub struct FeeCollected {
    pub pool: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}

#[event]
pub struct SharesTransferred {
    pub pool: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub shares: u128,
    pub amount: u64,
}

#[event]
pub struct Approval {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PauseUpdated {
    pub pool: Pubkey,
    pub feature: Feature,
    pub paused: bool,
}

#[event]
pub struct ConfigUpdated {
    pub pool: Pubkey,
    pub config: PoolConfig,
    pub block_list: Pubkey,
}

#[event]
pub struct RoleUpdated {
    pub pool: Pubkey,
    pub role: Role,
    pub previous: Pubkey,
    pub current: Pubkey,
}
