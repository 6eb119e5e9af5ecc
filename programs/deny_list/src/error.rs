use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Block list is full")]
    BlockListFull,
    #[msg("Zero address")]
    ZeroAddress,
}
