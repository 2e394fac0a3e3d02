use anchor_lang::prelude::*;

#[cfg(test)]
pub mod mock;
pub mod spl;

pub use spl::SplTokenService;

/// Value movement the ledger delegates to the token program.
///
/// Every call is all-or-nothing: an `Err` means no tokens moved.
pub trait TokenService {
    /// Moves `amount` from `payer` to `recipient` under an allowance `payer`
    /// granted to the calling ledger.
    fn pull_from(&mut self, payer: Pubkey, recipient: Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` out of the ledger's own custody to `recipient`.
    fn push(&mut self, recipient: Pubkey, amount: u64) -> Result<()>;

    fn balance_of(&self, holder: Pubkey) -> Result<u64>;
}
