use anchor_lang::prelude::*;
use deny_list::BlockList;

use crate::{
    error::ErrorCode,
    state::{Pool, Role},
};

pub fn require_role(pool: &Pool, role: Role, signer: &Signer<'_>) -> Result<()> {
    pool.roles.require(role, &signer.key())
}

/// Denylist capability a pool is configured with.
pub enum DenyPolicy<'a> {
    Disabled,
    Enabled(&'a BlockList),
}

impl<'a> DenyPolicy<'a> {
    /// A default `configured` key disables screening; otherwise the supplied
    /// list must be the configured one.
    pub fn resolve(configured: Pubkey, provided: Option<(Pubkey, &'a BlockList)>) -> Result<Self> {
        if configured == Pubkey::default() {
            return Ok(Self::Disabled);
        }

        match provided {
            Some((key, list)) if key == configured => Ok(Self::Enabled(list)),
            _ => err!(ErrorCode::InvalidBlockList),
        }
    }

    pub fn ensure_allowed(&self, address: &Pubkey) -> Result<()> {
        if let Self::Enabled(list) = self {
            require!(!list.is_blocked(address), ErrorCode::AddressBlocked);
        }
        Ok(())
    }

    pub fn ensure_all_allowed(&self, addresses: &[Pubkey]) -> Result<()> {
        addresses
            .iter()
            .try_for_each(|address| self.ensure_allowed(address))
    }
}

/// Share recipients must be a real, distinct holder other than the pool itself.
pub fn require_valid_recipient(pool: &Pubkey, from: &Pubkey, to: &Pubkey) -> Result<()> {
    require_keys_neq!(*to, Pubkey::default(), ErrorCode::ZeroAddress);
    require_keys_neq!(*to, *pool, ErrorCode::InvalidRecipient);
    require_keys_neq!(*to, *from, ErrorCode::InvalidRecipient);
    Ok(())
}

pub fn deny_policy<'a>(
    pool: &Pool,
    block_list: &'a Option<Account<'_, BlockList>>,
) -> Result<DenyPolicy<'a>> {
    DenyPolicy::resolve(
        pool.block_list,
        block_list.as_ref().map(|list| (list.key(), &**list)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(blocked: Vec<Pubkey>) -> BlockList {
        BlockList {
            owner: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            blocked,
            bump: 254,
        }
    }

    #[test]
    fn default_address_disables_screening() {
        let user = Pubkey::new_unique();
        let list = list_with(vec![user]);

        let policy = DenyPolicy::resolve(Pubkey::default(), Some((Pubkey::new_unique(), &list)))
            .unwrap();
        assert!(matches!(policy, DenyPolicy::Disabled));
        policy.ensure_allowed(&user).unwrap();
    }

    #[test]
    fn configured_list_must_be_supplied() {
        let configured = Pubkey::new_unique();
        let list = list_with(vec![]);

        let missing = DenyPolicy::resolve(configured, None);
        assert_eq!(missing.err().unwrap(), ErrorCode::InvalidBlockList.into());

        let wrong = DenyPolicy::resolve(configured, Some((Pubkey::new_unique(), &list)));
        assert_eq!(wrong.err().unwrap(), ErrorCode::InvalidBlockList.into());
    }

    #[test]
    fn blocked_address_is_rejected() {
        let configured = Pubkey::new_unique();
        let blocked = Pubkey::new_unique();
        let clean = Pubkey::new_unique();
        let list = list_with(vec![blocked]);

        let policy = DenyPolicy::resolve(configured, Some((configured, &list))).unwrap();
        policy.ensure_allowed(&clean).unwrap();
        assert_eq!(
            policy.ensure_all_allowed(&[clean, blocked]).unwrap_err(),
            ErrorCode::AddressBlocked.into()
        );
    }

    #[test]
    fn recipient_rules() {
        let pool = Pubkey::new_unique();
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();

        require_valid_recipient(&pool, &from, &to).unwrap();
        assert_eq!(
            require_valid_recipient(&pool, &from, &Pubkey::default()).unwrap_err(),
            ErrorCode::ZeroAddress.into()
        );
        assert_eq!(
            require_valid_recipient(&pool, &from, &pool).unwrap_err(),
            ErrorCode::InvalidRecipient.into()
        );
        assert_eq!(
            require_valid_recipient(&pool, &from, &from).unwrap_err(),
            ErrorCode::InvalidRecipient.into()
        );
    }
}
