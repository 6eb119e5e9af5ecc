use anchor_lang::prelude::*;

use crate::{constants::MAX_BLOCKED, error::ErrorCode};

#[account]
#[derive(InitSpace)]
pub struct BlockList {
    pub owner: Pubkey,
    /// Signer that created the list; anchors the PDA seeds across ownership changes.
    pub creator: Pubkey,
    #[max_len(MAX_BLOCKED)]
    pub blocked: Vec<Pubkey>,
    pub bump: u8,
}

impl BlockList {
    pub fn is_blocked(&self, address: &Pubkey) -> bool {
        self.blocked.contains(address)
    }

    /// Returns how many addresses were newly blocked.
    pub fn add(&mut self, addresses: &[Pubkey]) -> Result<usize> {
        let mut added = 0;
        for address in addresses {
            if self.blocked.contains(address) {
                continue;
            }
            require!(self.blocked.len() < MAX_BLOCKED, ErrorCode::BlockListFull);
            self.blocked.push(*address);
            added += 1;
        }
        Ok(added)
    }

    /// Returns how many addresses were unblocked.
    pub fn remove(&mut self, addresses: &[Pubkey]) -> usize {
        let before = self.blocked.len();
        self.blocked.retain(|b| !addresses.contains(b));
        before - self.blocked.len()
    }
}
