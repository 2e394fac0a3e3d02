use anchor_lang::prelude::*;

#[error_code]
pub enum FundMeError {
    #[msg("Only the ledger owner can withdraw")]
    NotOwner,

    #[msg("Deposit is below the minimum amount")]
    InsufficientAmount,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Math overflow error")]
    MathOverflow,

    #[msg("Mint does not match the ledger mint")]
    InvalidMint,

    #[msg("Token account does not belong to the expected holder")]
    TokenAccountMismatch,

    #[msg("Mints with transfer fees are not supported")]
    UnsupportedMint,
}
