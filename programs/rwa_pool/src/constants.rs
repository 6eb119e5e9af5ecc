pub const BPS_DENOM: u64 = 10_000;
pub const DAY_SECS: i64 = 86_400;

pub const POOL_VERSION: u8 = 1;
pub const NAME_LEN: usize = 32;
pub const SYMBOL_LEN: usize = 16;
/// Storage bound of a share account's redeem queue; the live limit is `max_redeem_queue_size`.
pub const MAX_REDEEM_QUEUE_CAP: usize = 16;

pub const DEFAULT_SUBSCRIBE_FEE_BPS: u16 = 0;
pub const DEFAULT_REDEEM_FEE_BPS: u16 = 0;
pub const DEFAULT_MAX_REBASE_BPS: u16 = 10_000;
pub const DEFAULT_MAX_REDEEM_QUEUE_SIZE: u8 = 3;
pub const DEFAULT_MINIMUM_REDEEM_INTERVAL: i64 = 518_400; // 6 days.
pub const DEFAULT_WINDOW_START_OFFSET: i64 = 0;
pub const DEFAULT_WINDOW_DURATION: i64 = 28_800; // 00:00 - 08:00 UTC.

pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTH_SEED: &[u8] = b"pool-auth";
pub const BUFFER_VAULT_SEED: &[u8] = b"buffer-vault";
pub const SHARE_ACCOUNT_SEED: &[u8] = b"share-account";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";

pub const PERMIT_DOMAIN_TAG: &[u8] = b"rwa-pool/permit-domain/v1";
pub const PERMIT_TYPE_TAG: &[u8] = b"rwa-pool/permit/v1";
