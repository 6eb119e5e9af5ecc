use anchor_lang::prelude::*;

#[event]
pub struct BlockListUpdated {
    pub block_list: Pubkey,
    pub blocked: bool,
    pub addresses: Vec<Pubkey>,
}

#[event]
pub struct BlockListOwnershipTransferred {
    pub block_list: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
