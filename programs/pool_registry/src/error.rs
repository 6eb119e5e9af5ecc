use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Zero address")]
    ZeroAddress,
    #[msg("Registry is full")]
    RegistryFull,
    #[msg("Pool already listed")]
    PoolAlreadyListed,
    #[msg("Pool not listed in registry")]
    PoolNotListed,
    #[msg("Invalid remaining accounts")]
    InvalidRemainingAccounts,
}
