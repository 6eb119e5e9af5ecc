use anchor_lang::prelude::*;
use rwa_pool::PoolRoles;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("2x1kCmWW7GDQ1vVgggwLYjMRsdZ75BiVG4JiZYBQArvx");

#[program]
pub mod pool_registry {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    pub fn create_pool(
        ctx: Context<CreatePool>,
        name: String,
        symbol: String,
        roles: PoolRoles,
    ) -> Result<()> {
        instructions::create_pool::handler(ctx, name, symbol, roles)
    }

    pub fn upgrade_pools<'info>(
        ctx: Context<'_, '_, 'info, 'info, UpgradePools<'info>>,
    ) -> Result<()> {
        instructions::upgrade_pools::handler(ctx)
    }

    pub fn transfer_registry_ownership(
        ctx: Context<TransferRegistryOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_registry_ownership::handler(ctx, new_owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn registry() -> Registry {
        Registry {
            owner: Pubkey::new_unique(),
            pools: Vec::new(),
            authority_bump: 254,
            bump: 255,
        }
    }

    #[test]
    fn pool_ids_follow_creation_order() {
        let mut registry = registry();
        assert_eq!(registry.next_pool_id(), 0);

        let first = Pubkey::new_unique();
        registry.register(first).unwrap();
        assert_eq!(registry.next_pool_id(), 1);
        assert!(registry.contains(&first));
        assert!(!registry.contains(&Pubkey::new_unique()));
    }

    #[test]
    fn register_rejects_duplicates_and_overflow() {
        let mut registry = registry();
        let pool = Pubkey::new_unique();
        registry.register(pool).unwrap();
        assert_eq!(
            registry.register(pool).unwrap_err(),
            ErrorCode::PoolAlreadyListed.into()
        );

        while registry.pools.len() < MAX_POOLS {
            registry.register(Pubkey::new_unique()).unwrap();
        }
        assert_eq!(
            registry.register(Pubkey::new_unique()).unwrap_err(),
            ErrorCode::RegistryFull.into()
        );
    }

    #[test]
    fn pool_addresses_are_keyed_by_registry_authority_and_id() {
        let (authority, _) = Pubkey::find_program_address(&[REGISTRY_AUTH_SEED], &crate::ID);
        let derive = |factory: &Pubkey, id: u64| {
            Pubkey::find_program_address(
                &[rwa_pool::POOL_SEED, factory.as_ref(), &id.to_le_bytes()],
                &rwa_pool::ID,
            )
            .0
        };

        assert_eq!(derive(&authority, 0), derive(&authority, 0));
        assert_ne!(derive(&authority, 0), derive(&authority, 1));
        assert_ne!(derive(&authority, 0), derive(&Pubkey::new_unique(), 0));
    }
}
