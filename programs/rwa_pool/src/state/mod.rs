pub mod allowance;
pub mod ledger;
pub mod pool;
pub mod pool_config;
pub mod roles;
pub mod share_account;

pub use allowance::*;
pub use ledger::*;
pub use pool::*;
pub use pool_config::*;
pub use roles::*;
pub use share_account::*;
