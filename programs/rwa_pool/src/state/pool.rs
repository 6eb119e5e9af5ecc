use anchor_lang::prelude::*;

use crate::{
    constants::{NAME_LEN, POOL_VERSION, SYMBOL_LEN},
    error::ErrorCode,
    state::{PoolConfig, PoolLedger, PoolRoles},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Subscription,
    Redemption,
}

/// Fields are append-only. New fields are carved out of `_reserved` and filled
/// in by `migrate`.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub version: u8,
    pub factory: Pubkey,
    pub pool_id: u64,
    pub name: [u8; NAME_LEN],
    pub symbol: [u8; SYMBOL_LEN],
    pub decimals: u8,
    pub underlying_mint: Pubkey,
    pub buffer_vault: Pubkey,
    pub roles: PoolRoles,
    pub block_list: Pubkey,
    pub subscription_paused: bool,
    pub redemption_paused: bool,
    pub config: PoolConfig,
    pub ledger: PoolLedger,
    pub bump: u8,
    pub authority_bump: u8,
    pub _reserved: [u8; 64],
}

impl Pool {
    pub fn is_paused(&self, feature: Feature) -> bool {
        match feature {
            Feature::Subscription => self.subscription_paused,
            Feature::Redemption => self.redemption_paused,
        }
    }

    pub fn require_active(&self, feature: Feature) -> Result<()> {
        require!(!self.is_paused(feature), ErrorCode::FeaturePaused);
        Ok(())
    }

    pub fn set_paused(&mut self, feature: Feature, paused: bool) {
        match feature {
            Feature::Subscription => self.subscription_paused = paused,
            Feature::Redemption => self.redemption_paused = paused,
        }
    }

    pub fn name_bytes(&self) -> &[u8] {
        trim_padding(&self.name)
    }

    /// Advances the layout version. Returns the previous version when it changed.
    pub fn migrate(&mut self) -> Result<Option<u8>> {
        require!(self.version <= POOL_VERSION, ErrorCode::UnsupportedVersion);
        if self.version == POOL_VERSION {
            return Ok(None);
        }

        let previous = self.version;
        self.version = POOL_VERSION;
        Ok(Some(previous))
    }
}

fn trim_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::to_fixed_bytes;

    fn pool(version: u8) -> Pool {
        Pool {
            version,
            factory: Pubkey::new_unique(),
            pool_id: 3,
            name: to_fixed_bytes("Short-term Treasury").unwrap(),
            symbol: to_fixed_bytes("stUSD").unwrap(),
            decimals: 6,
            underlying_mint: Pubkey::new_unique(),
            buffer_vault: Pubkey::new_unique(),
            roles: PoolRoles::default(),
            block_list: Pubkey::default(),
            subscription_paused: false,
            redemption_paused: true,
            config: PoolConfig::default(),
            ledger: PoolLedger {
                total_shares: 42,
                total_supply: 50,
                ..PoolLedger::default()
            },
            bump: 255,
            authority_bump: 254,
            _reserved: [0; 64],
        }
    }

    #[test]
    fn pause_flags_are_independent() {
        let mut pool = pool(POOL_VERSION);
        pool.require_active(Feature::Subscription).unwrap();
        assert_eq!(
            pool.require_active(Feature::Redemption).unwrap_err(),
            ErrorCode::FeaturePaused.into()
        );

        pool.set_paused(Feature::Subscription, true);
        pool.set_paused(Feature::Redemption, false);
        assert!(pool.is_paused(Feature::Subscription));
        assert!(!pool.is_paused(Feature::Redemption));
    }

    #[test]
    fn migrate_only_moves_version() {
        let mut pool = pool(0);
        let ledger = pool.ledger;
        let roles = pool.roles;

        assert_eq!(pool.migrate().unwrap(), Some(0));
        assert_eq!(pool.version, POOL_VERSION);
        assert_eq!(pool.ledger, ledger);
        assert_eq!(pool.roles, roles);
        assert!(pool.redemption_paused);

        assert_eq!(pool.migrate().unwrap(), None);

        let mut future = self::pool(POOL_VERSION + 1);
        assert_eq!(
            future.migrate().unwrap_err(),
            ErrorCode::UnsupportedVersion.into()
        );
    }

    #[test]
    fn name_drops_padding() {
        assert_eq!(pool(1).name_bytes(), b"Short-term Treasury");
    }
}
