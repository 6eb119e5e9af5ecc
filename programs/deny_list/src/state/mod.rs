pub mod block_list;

pub use block_list::*;
