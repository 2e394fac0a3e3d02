use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, MINIMUM_DEPOSIT};
use crate::state::FundLedger;

/// Read-only access to a ledger. Values come back as instruction return data.
#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.mint.as_ref(), ledger.owner.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, FundLedger>,
}

impl<'info> LedgerView<'info> {
    pub fn minimum_deposit(&self) -> u64 {
        MINIMUM_DEPOSIT
    }

    pub fn ledger_owner(&self) -> Pubkey {
        self.ledger.owner
    }

    pub fn token_mint(&self) -> Pubkey {
        self.ledger.mint
    }

    pub fn contribution_of(&self, funder: &Pubkey) -> u64 {
        self.ledger.contribution_of(funder)
    }

    /// Default key when `index` is past the end of the roster.
    pub fn funder_at(&self, index: u32) -> Pubkey {
        self.ledger.funder_at(index as usize).unwrap_or_default()
    }

    pub fn funders_count(&self) -> u32 {
        self.ledger.funders_count() as u32
    }

    pub fn total_contributed(&self) -> u64 {
        self.ledger.total_contributed()
    }
}
