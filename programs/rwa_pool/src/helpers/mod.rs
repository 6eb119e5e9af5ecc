pub mod access;
pub mod math;
pub mod permit;
pub mod token;

pub use access::*;
pub use math::*;
pub use permit::*;
pub use token::*;
