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

declare_id!("4daSp7XSEnGF6Luu26g92x2tjFg3GHWoKZ27nCiwkbB3");

#[program]
pub mod wrapped_token {
    use super::*;

    pub fn initialize_wrapper(ctx: Context<InitializeWrapper>) -> Result<()> {
        instructions::initialize_wrapper::handler(ctx)
    }

    pub fn wrap(ctx: Context<Wrap>, amount: u64) -> Result<()> {
        instructions::wrap::handler(ctx, amount)
    }

    pub fn unwrap(ctx: Context<Unwrap>, wrapped: u64) -> Result<()> {
        instructions::unwrap::handler(ctx, wrapped)
    }
}
