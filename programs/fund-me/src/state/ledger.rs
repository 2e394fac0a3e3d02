use anchor_lang::prelude::*;

use crate::constants::MINIMUM_DEPOSIT;
use crate::state::FundMeError;
use crate::token::TokenService;

#[account]
pub struct FundLedger {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub bump: u8,
    pub funders: Vec<FunderEntry>, // Insertion ordered, one entry per funder
}

impl Space for FundLedger {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // owner: Pubkey
        + 32    // mint: Pubkey
        + 32    // vault: Pubkey
        + 1     // bump: u8
        + 4;    // funders: Vec<FunderEntry>, empty
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunderEntry {
    pub funder: Pubkey,
    pub amount: u64,
}

impl FunderEntry {
    pub const SIZE: usize = 32 + 8;
}

impl FundLedger {
    /// Account size holding `funders` roster entries. Deposits grow the
    /// account to this before a new funder is appended.
    pub fn space_for(funders: usize) -> usize {
        Self::INIT_SPACE + funders * FunderEntry::SIZE
    }

    pub fn new(owner: Pubkey, mint: Pubkey, vault: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            mint,
            vault,
            bump,
            funders: Vec::new(),
        }
    }

    /// Pulls `amount` from `funder` into `custody` and records the contribution.
    ///
    /// Every check runs before the pull, so a failed deposit leaves the ledger
    /// untouched.
    pub fn deposit<T: TokenService>(
        &mut self,
        token: &mut T,
        custody: Pubkey,
        funder: Pubkey,
        amount: u64,
    ) -> Result<()> {
        require!(amount >= MINIMUM_DEPOSIT, FundMeError::InsufficientAmount);

        let total = self.credited_total(&funder, amount)?;
        token.pull_from(funder, custody, amount)?;
        self.set_contribution(funder, total);

        msg!("Deposit of {} from {}, total {}", amount, funder, total);
        Ok(())
    }

    /// Sends the whole custody balance to the owner, then clears every
    /// contribution and the roster. Returns the amount sent.
    ///
    /// The sweep is committed only after the push succeeds.
    pub fn withdraw<T: TokenService>(
        &mut self,
        token: &mut T,
        custody: Pubkey,
        caller: Pubkey,
    ) -> Result<u64> {
        require_keys_eq!(caller, self.owner, FundMeError::NotOwner);

        let balance = token.balance_of(custody)?;
        token.push(self.owner, balance)?;

        let cleared = self.funders.len();
        self.funders.clear();

        msg!("Withdrew {} to owner, cleared {} funders", balance, cleared);
        Ok(balance)
    }

    pub fn contribution_of(&self, funder: &Pubkey) -> u64 {
        self.entry(funder).map_or(0, |entry| entry.amount)
    }

    pub fn is_funder(&self, funder: &Pubkey) -> bool {
        self.entry(funder).is_some()
    }

    pub fn funder_at(&self, index: usize) -> Option<Pubkey> {
        self.funders.get(index).map(|entry| entry.funder)
    }

    pub fn funders_count(&self) -> usize {
        self.funders.len()
    }

    /// Sum of tracked contributions. Never exceeds the custody balance.
    pub fn total_contributed(&self) -> u64 {
        self.funders
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.amount))
    }

    fn entry(&self, funder: &Pubkey) -> Option<&FunderEntry> {
        self.funders.iter().find(|entry| entry.funder == *funder)
    }

    fn credited_total(&self, funder: &Pubkey, amount: u64) -> Result<u64> {
        match self.entry(funder) {
            Some(entry) => Ok(entry
                .amount
                .checked_add(amount)
                .ok_or(FundMeError::MathOverflow)?),
            None => Ok(amount),
        }
    }

    fn set_contribution(&mut self, funder: Pubkey, total: u64) {
        match self.funders.iter_mut().find(|entry| entry.funder == funder) {
            Some(entry) => entry.amount = total,
            None => self.funders.push(FunderEntry { funder, amount: total }),
        }
    }
}
