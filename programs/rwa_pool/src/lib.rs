use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("2VHeRraD95sDQDCsTFJ2HMC6iUUYU1dKjFKMDSvHyUPJ");

#[program]
pub mod rwa_pool {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        pool_id: u64,
        name: String,
        symbol: String,
        roles: PoolRoles,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, pool_id, name, symbol, roles)
    }

    pub fn migrate_pool(ctx: Context<MigratePool>) -> Result<()> {
        instructions::migrate_pool::handler(ctx)
    }

    pub fn create_share_account(ctx: Context<CreateShareAccount>) -> Result<()> {
        instructions::create_share_account::handler(ctx)
    }

    pub fn subscribe(ctx: Context<Subscribe>, amount: u64) -> Result<()> {
        instructions::subscribe::handler(ctx, amount)
    }

    pub fn mint_shares<'info>(ctx: Context<'_, '_, 'info, 'info, MintShares<'info>>) -> Result<()> {
        instructions::mint_shares::handler(ctx)
    }

    pub fn redeem(ctx: Context<Redeem>, shares_amount: u128) -> Result<()> {
        instructions::redeem::handler(ctx, shares_amount)
    }

    pub fn burn_shares<'info>(ctx: Context<'_, '_, 'info, 'info, BurnShares<'info>>) -> Result<()> {
        instructions::burn_shares::handler(ctx)
    }

    pub fn withdraw_to_reserve(ctx: Context<ReserveFlow>, amount: u64) -> Result<()> {
        instructions::reserve_flow::withdraw_handler(ctx, amount)
    }

    pub fn funding_from_reserve(ctx: Context<ReserveFlow>, amount: u64) -> Result<()> {
        instructions::reserve_flow::funding_handler(ctx, amount)
    }

    pub fn rebase(ctx: Context<Rebase>, new_net_value: u64) -> Result<()> {
        instructions::rebase::handler(ctx, new_net_value)
    }

    pub fn collect_fee(ctx: Context<CollectFee>, amount: u64) -> Result<()> {
        instructions::collect_fee::handler(ctx, amount)
    }

    pub fn transfer(ctx: Context<TransferShares>, amount: u64) -> Result<()> {
        instructions::transfer::handler(ctx, amount)
    }

    pub fn transfer_shares(ctx: Context<TransferShares>, shares: u128) -> Result<()> {
        instructions::transfer::transfer_shares_handler(ctx, shares)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from::handler(ctx, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve::handler(ctx, spender, amount)
    }

    pub fn increase_allowance(ctx: Context<Approve>, spender: Pubkey, added: u64) -> Result<()> {
        instructions::approve::increase_handler(ctx, spender, added)
    }

    pub fn decrease_allowance(
        ctx: Context<Approve>,
        spender: Pubkey,
        subtracted: u64,
    ) -> Result<()> {
        instructions::approve::decrease_handler(ctx, spender, subtracted)
    }

    pub fn permit(ctx: Context<Permit>, spender: Pubkey, value: u64, deadline: i64) -> Result<()> {
        instructions::permit::handler(ctx, spender, value, deadline)
    }

    pub fn pause_subscription(ctx: Context<SetPause>) -> Result<()> {
        instructions::set_pause::handler(ctx, Feature::Subscription, true)
    }

    pub fn unpause_subscription(ctx: Context<SetPause>) -> Result<()> {
        instructions::set_pause::handler(ctx, Feature::Subscription, false)
    }

    pub fn pause_redemption(ctx: Context<SetPause>) -> Result<()> {
        instructions::set_pause::handler(ctx, Feature::Redemption, true)
    }

    pub fn unpause_redemption(ctx: Context<SetPause>) -> Result<()> {
        instructions::set_pause::handler(ctx, Feature::Redemption, false)
    }

    pub fn set_protocol_fee(
        ctx: Context<ConfigurePool>,
        subscribe_fee_bps: u16,
        redeem_fee_bps: u16,
    ) -> Result<()> {
        instructions::configure_pool::set_protocol_fee_handler(ctx, subscribe_fee_bps, redeem_fee_bps)
    }

    pub fn set_rebase_rate_limit(
        ctx: Context<ConfigurePool>,
        max_rebase_up_bps: u16,
        max_rebase_down_bps: u16,
    ) -> Result<()> {
        instructions::configure_pool::set_rebase_rate_limit_handler(
            ctx,
            max_rebase_up_bps,
            max_rebase_down_bps,
        )
    }

    pub fn set_max_redeem_queue_size(ctx: Context<ConfigurePool>, size: u8) -> Result<()> {
        instructions::configure_pool::set_max_redeem_queue_size_handler(ctx, size)
    }

    pub fn set_minimum_subscribe_amount(ctx: Context<ConfigurePool>, amount: u64) -> Result<()> {
        instructions::configure_pool::set_minimum_subscribe_amount_handler(ctx, amount)
    }

    pub fn set_minimum_redeem_amount(ctx: Context<ConfigurePool>, shares: u128) -> Result<()> {
        instructions::configure_pool::set_minimum_redeem_amount_handler(ctx, shares)
    }

    pub fn set_maximum_total_staking_limit(ctx: Context<ConfigurePool>, limit: u64) -> Result<()> {
        instructions::configure_pool::set_maximum_total_staking_limit_handler(ctx, limit)
    }

    pub fn set_minimum_redeem_interval(
        ctx: Context<ConfigurePool>,
        interval_secs: i64,
    ) -> Result<()> {
        instructions::configure_pool::set_minimum_redeem_interval_handler(ctx, interval_secs)
    }

    pub fn set_settlement_window(
        ctx: Context<ConfigurePool>,
        start_offset_secs: i64,
        duration_secs: i64,
    ) -> Result<()> {
        instructions::configure_pool::set_settlement_window_handler(
            ctx,
            start_offset_secs,
            duration_secs,
        )
    }

    pub fn set_block_list(ctx: Context<ConfigurePool>, block_list: Pubkey) -> Result<()> {
        instructions::configure_pool::set_block_list_handler(ctx, block_list)
    }

    pub fn set_reserve(ctx: Context<ConfigurePool>, reserve: Pubkey) -> Result<()> {
        instructions::configure_pool::set_role_handler(ctx, Role::Reserve, reserve)
    }

    pub fn set_fee_recipient(ctx: Context<ConfigurePool>, fee_recipient: Pubkey) -> Result<()> {
        instructions::configure_pool::set_role_handler(ctx, Role::FeeRecipient, fee_recipient)
    }

    pub fn set_role(ctx: Context<ConfigurePool>, role: Role, address: Pubkey) -> Result<()> {
        instructions::configure_pool::set_role_handler(ctx, role, address)
    }

    pub fn pool_snapshot(ctx: Context<ViewPool>) -> Result<PoolSnapshot> {
        instructions::views::pool_snapshot_handler(ctx)
    }

    pub fn shares_by_underlying(ctx: Context<ViewPool>, amount: u64) -> Result<u128> {
        instructions::views::shares_by_underlying_handler(ctx, amount)
    }

    pub fn underlying_by_shares(ctx: Context<ViewPool>, shares: u128) -> Result<u64> {
        instructions::views::underlying_by_shares_handler(ctx, shares)
    }

    pub fn holder_snapshot(ctx: Context<ViewShareAccount>) -> Result<HolderSnapshot> {
        instructions::views::holder_snapshot_handler(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_sizes_fit_single_allocation() {
        assert!(8 + Pool::INIT_SPACE < 10_240);
        assert!(8 + ShareAccount::INIT_SPACE < 10_240);
        assert_eq!(
            8 + Allowance::INIT_SPACE,
            8 + 32 * 3 + 8 + 1
        );
    }

    #[test]
    fn queue_storage_covers_policy_default() {
        assert!(DEFAULT_MAX_REDEEM_QUEUE_SIZE as usize <= MAX_REDEEM_QUEUE_CAP);
        PoolConfig::default().validate().unwrap();
    }

    #[test]
    fn pool_pda_is_stable_per_factory_and_id() {
        let factory = Pubkey::new_unique();
        let (a, _) = Pubkey::find_program_address(
            &[POOL_SEED, factory.as_ref(), &0u64.to_le_bytes()],
            &crate::ID,
        );
        let (b, _) = Pubkey::find_program_address(
            &[POOL_SEED, factory.as_ref(), &1u64.to_le_bytes()],
            &crate::ID,
        );
        assert_ne!(a, b);
    }
}
