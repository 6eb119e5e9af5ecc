pub mod initialize_block_list;
pub mod update_block_list;

pub use initialize_block_list::*;
pub use update_block_list::*;
