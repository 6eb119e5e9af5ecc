use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Wrap amount must be positive")]
    WrapZero,
    #[msg("Unwrap amount must be positive")]
    UnwrapZero,
    #[msg("Amount exceeds wrapped balance")]
    ExceedBalance,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Math overflow")]
    MathOverflow,
}
