use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("9FuFH8z592mSmVhcChiyqTMvDuuSNNp7f1dkodhHrfWH");

#[program]
pub mod deny_list {
    use super::*;

    pub fn initialize_block_list(ctx: Context<InitializeBlockList>) -> Result<()> {
        instructions::initialize_block_list::handler(ctx)
    }

    pub fn add_to_block_list(ctx: Context<UpdateBlockList>, addresses: Vec<Pubkey>) -> Result<()> {
        instructions::update_block_list::add_handler(ctx, addresses)
    }

    pub fn remove_from_block_list(
        ctx: Context<UpdateBlockList>,
        addresses: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::update_block_list::remove_handler(ctx, addresses)
    }

    pub fn transfer_block_list_ownership(
        ctx: Context<UpdateBlockList>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::update_block_list::transfer_ownership_handler(ctx, new_owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn block_list() -> BlockList {
        BlockList {
            owner: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            blocked: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut list = block_list();
        let user = Pubkey::new_unique();

        assert_eq!(list.add(&[user, user]).unwrap(), 1);
        assert_eq!(list.add(&[user]).unwrap(), 0);
        assert!(list.is_blocked(&user));
        assert_eq!(list.blocked.len(), 1);
    }

    #[test]
    fn remove_ignores_unknown_addresses() {
        let mut list = block_list();
        let user1 = Pubkey::new_unique();
        let user2 = Pubkey::new_unique();
        list.add(&[user1]).unwrap();

        assert_eq!(list.remove(&[user1, user2]), 1);
        assert!(!list.is_blocked(&user1));
        assert!(!list.is_blocked(&user2));
    }

    #[test]
    fn add_rejects_overflowing_batch() {
        let mut list = block_list();
        let batch: Vec<Pubkey> = (0..MAX_BLOCKED).map(|_| Pubkey::new_unique()).collect();
        list.add(&batch).unwrap();

        let err = list.add(&[Pubkey::new_unique()]).unwrap_err();
        assert_eq!(err, ErrorCode::BlockListFull.into());
        assert_eq!(list.blocked.len(), MAX_BLOCKED);
    }
}
