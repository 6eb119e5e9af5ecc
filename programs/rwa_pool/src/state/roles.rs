use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Minter,
    Burner,
    RebaseAdmin,
    Reserve,
    FeeRecipient,
}

impl Role {
    pub fn unauthorized(self) -> ErrorCode {
        match self {
            Role::Admin => ErrorCode::OnlyAdmin,
            Role::Minter => ErrorCode::OnlyMinter,
            Role::Burner => ErrorCode::OnlyBurner,
            Role::RebaseAdmin => ErrorCode::OnlyRebaseAdmin,
            Role::Reserve => ErrorCode::OnlyReserve,
            Role::FeeRecipient => ErrorCode::OnlyFeeRecipient,
        }
    }
}

/// Address holding each capability of a pool.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Default, Debug, PartialEq, Eq,
)]
pub struct PoolRoles {
    pub admin: Pubkey,
    pub minter: Pubkey,
    pub burner: Pubkey,
    pub rebase_admin: Pubkey,
    pub reserve: Pubkey,
    pub fee_recipient: Pubkey,
}

impl PoolRoles {
    pub fn validate(&self) -> Result<()> {
        let holders = [
            self.admin,
            self.minter,
            self.burner,
            self.rebase_admin,
            self.reserve,
            self.fee_recipient,
        ];
        require!(
            holders.iter().all(|key| *key != Pubkey::default()),
            ErrorCode::ZeroAddress
        );
        Ok(())
    }

    pub fn holder(&self, role: Role) -> Pubkey {
        match role {
            Role::Admin => self.admin,
            Role::Minter => self.minter,
            Role::Burner => self.burner,
            Role::RebaseAdmin => self.rebase_admin,
            Role::Reserve => self.reserve,
            Role::FeeRecipient => self.fee_recipient,
        }
    }

    pub fn set(&mut self, role: Role, address: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(address, Pubkey::default(), ErrorCode::ZeroAddress);

        let slot = match role {
            Role::Admin => &mut self.admin,
            Role::Minter => &mut self.minter,
            Role::Burner => &mut self.burner,
            Role::RebaseAdmin => &mut self.rebase_admin,
            Role::Reserve => &mut self.reserve,
            Role::FeeRecipient => &mut self.fee_recipient,
        };
        Ok(std::mem::replace(slot, address))
    }

    pub fn require(&self, role: Role, caller: &Pubkey) -> Result<()> {
        if self.holder(role) != *caller {
            return Err(role.unauthorized().into());
        }
        Ok(())
    }
}
