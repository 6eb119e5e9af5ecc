pub mod create_pool;
pub mod initialize_registry;
pub mod transfer_registry_ownership;
pub mod upgrade_pools;

pub use create_pool::*;
pub use initialize_registry::*;
pub use transfer_registry_ownership::*;
pub use upgrade_pools::*;
