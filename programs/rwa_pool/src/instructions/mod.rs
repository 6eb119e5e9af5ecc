pub mod approve;
pub mod burn_shares;
pub mod collect_fee;
pub mod configure_pool;
pub mod create_share_account;
pub mod initialize_pool;
pub mod migrate_pool;
pub mod mint_shares;
pub mod permit;
pub mod rebase;
pub mod redeem;
pub mod reserve_flow;
pub mod set_pause;
pub mod subscribe;
pub mod transfer;
pub mod transfer_from;
pub mod views;

pub use approve::*;
pub use burn_shares::*;
pub use collect_fee::*;
pub use configure_pool::*;
pub use create_share_account::*;
pub use initialize_pool::*;
pub use migrate_pool::*;
pub use mint_shares::*;
pub use permit::*;
pub use rebase::*;
pub use redeem::*;
pub use reserve_flow::*;
pub use set_pause::*;
pub use subscribe::*;
pub use transfer::*;
pub use transfer_from::*;
pub use views::*;
