use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Only admin")]
    OnlyAdmin,
    #[msg("Only minter")]
    OnlyMinter,
    #[msg("Only burner")]
    OnlyBurner,
    #[msg("Only rebase admin")]
    OnlyRebaseAdmin,
    #[msg("Only reserve")]
    OnlyReserve,
    #[msg("Only fee recipient")]
    OnlyFeeRecipient,
    #[msg("Only factory")]
    OnlyFactory,
    #[msg("Feature paused")]
    FeaturePaused,
    #[msg("Address blocked")]
    AddressBlocked,
    #[msg("Block list account missing or mismatched")]
    InvalidBlockList,
    #[msg("Zero address")]
    ZeroAddress,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Subscribe amount below minimum")]
    SubscribeTooSmall,
    #[msg("Redeem amount below minimum")]
    RedeemTooSmall,
    #[msg("Total staking limit exceeded")]
    ExceedStakingLimit,
    #[msg("Redeem queue is full")]
    OverMaxRedeemSize,
    #[msg("Invalid redeem queue size")]
    InvalidQueueSize,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Invalid redeem interval")]
    InvalidInterval,
    #[msg("Invalid settlement window")]
    InvalidSettlementWindow,
    #[msg("Invalid name or symbol length")]
    InvalidMetadataLength,
    #[msg("Amount exceeds available balance")]
    ExceedBalance,
    #[msg("Amount exceeds allowance")]
    ExceedAllowance,
    #[msg("Decreased allowance below zero")]
    DecreasedAllowanceBelowZero,
    #[msg("Amount exceeds accrued protocol fee")]
    ExceedProtocolFee,
    #[msg("Amount exceeds buffered fund")]
    ExceedBufferedFund,
    #[msg("Rebase exceeds rate limit")]
    RebaseRateExceeded,
    #[msg("Rebase would drive total supply below zero")]
    RebaseUnderflow,
    #[msg("Subscription mints zero shares")]
    ZeroSharesMinted,
    #[msg("Invalid pool state")]
    InvalidPoolState,
    #[msg("Permit deadline expired")]
    PermitExpired,
    #[msg("Invalid permit signature")]
    InvalidSignature,
    #[msg("Invalid recipient")]
    InvalidRecipient,
    #[msg("Share account does not belong to pool")]
    InvalidShareAccount,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid remaining accounts")]
    InvalidRemainingAccounts,
    #[msg("Unsupported pool layout version")]
    UnsupportedVersion,
    #[msg("Math overflow")]
    MathOverflow,
}
