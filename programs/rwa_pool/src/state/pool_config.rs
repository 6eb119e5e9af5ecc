use anchor_lang::prelude::*;

use crate::{
    constants::{
        BPS_DENOM, DAY_SECS, DEFAULT_MAX_REBASE_BPS, DEFAULT_MAX_REDEEM_QUEUE_SIZE,
        DEFAULT_MINIMUM_REDEEM_INTERVAL, DEFAULT_REDEEM_FEE_BPS, DEFAULT_SUBSCRIBE_FEE_BPS,
        DEFAULT_WINDOW_DURATION, DEFAULT_WINDOW_START_OFFSET, MAX_REDEEM_QUEUE_CAP,
    },
    error::ErrorCode,
};

/// Daily UTC interval during which subscriptions settle immediately.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, PartialEq, Eq)]
pub struct SettlementWindow {
    pub start_offset_secs: i64,
    pub duration_secs: i64,
}

impl Default for SettlementWindow {
    fn default() -> Self {
        Self {
            start_offset_secs: DEFAULT_WINDOW_START_OFFSET,
            duration_secs: DEFAULT_WINDOW_DURATION,
        }
    }
}

impl SettlementWindow {
    pub fn contains(&self, now: i64) -> bool {
        (now - self.start_offset_secs).rem_euclid(DAY_SECS) < self.duration_secs
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            (0..DAY_SECS).contains(&self.start_offset_secs)
                && (0..=DAY_SECS).contains(&self.duration_secs),
            ErrorCode::InvalidSettlementWindow
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub subscribe_fee_bps: u16,
    pub redeem_fee_bps: u16,
    pub max_rebase_up_bps: u16,
    pub max_rebase_down_bps: u16,
    pub max_redeem_queue_size: u8,
    pub minimum_subscribe_amount: u64,
    pub minimum_redeem_amount: u128,
    pub maximum_total_staking_limit: u64,
    pub minimum_redeem_interval: i64,
    pub settlement_window: SettlementWindow,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            subscribe_fee_bps: DEFAULT_SUBSCRIBE_FEE_BPS,
            redeem_fee_bps: DEFAULT_REDEEM_FEE_BPS,
            max_rebase_up_bps: DEFAULT_MAX_REBASE_BPS,
            max_rebase_down_bps: DEFAULT_MAX_REBASE_BPS,
            max_redeem_queue_size: DEFAULT_MAX_REDEEM_QUEUE_SIZE,
            minimum_subscribe_amount: 0,
            minimum_redeem_amount: 0,
            maximum_total_staking_limit: u64::MAX,
            minimum_redeem_interval: DEFAULT_MINIMUM_REDEEM_INTERVAL,
            settlement_window: SettlementWindow::default(),
        }
    }
}

impl PoolConfig {
    pub fn validate(&self) -> Result<()> {
        for bps in [
            self.subscribe_fee_bps,
            self.redeem_fee_bps,
            self.max_rebase_up_bps,
            self.max_rebase_down_bps,
        ] {
            require!(bps as u64 <= BPS_DENOM, ErrorCode::InvalidBps);
        }
        require!(
            self.max_redeem_queue_size >= 1
                && self.max_redeem_queue_size as usize <= MAX_REDEEM_QUEUE_CAP,
            ErrorCode::InvalidQueueSize
        );
        require!(self.minimum_redeem_interval >= 0, ErrorCode::InvalidInterval);
        self.settlement_window.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600;

    #[test]
    fn default_window_is_first_eight_hours() {
        let window = SettlementWindow::default();
        let midnight = 1_700_006_400; // 2023-11-15 00:00 UTC.

        assert!(window.contains(midnight));
        assert!(window.contains(midnight + 8 * HOUR - 1));
        assert!(!window.contains(midnight + 8 * HOUR));
        assert!(!window.contains(midnight - 1));
    }

    #[test]
    fn offset_window_wraps_past_midnight() {
        let window = SettlementWindow {
            start_offset_secs: 22 * HOUR,
            duration_secs: 4 * HOUR,
        };
        let midnight = 1_700_006_400;

        assert!(window.contains(midnight - HOUR));
        assert!(window.contains(midnight + HOUR));
        assert!(!window.contains(midnight + 2 * HOUR));
        assert!(!window.contains(midnight + 12 * HOUR));
    }

    #[test]
    fn validate_bounds() {
        PoolConfig::default().validate().unwrap();

        let fee = PoolConfig {
            redeem_fee_bps: 10_001,
            ..PoolConfig::default()
        };
        assert_eq!(fee.validate().unwrap_err(), ErrorCode::InvalidBps.into());

        let queue = PoolConfig {
            max_redeem_queue_size: 0,
            ..PoolConfig::default()
        };
        assert_eq!(queue.validate().unwrap_err(), ErrorCode::InvalidQueueSize.into());

        let window = PoolConfig {
            settlement_window: SettlementWindow {
                start_offset_secs: DAY_SECS,
                duration_secs: HOUR,
            },
            ..PoolConfig::default()
        };
        assert_eq!(
            window.validate().unwrap_err(),
            ErrorCode::InvalidSettlementWindow.into()
        );
    }
}
