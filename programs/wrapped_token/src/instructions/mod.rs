pub mod initialize_wrapper;
pub mod unwrap;
pub mod wrap;

pub use initialize_wrapper::*;
pub use unwrap::*;
pub use wrap::*;
