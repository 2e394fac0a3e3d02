use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::LEDGER_SEED;
use crate::state::{FundLedger, FundMeError};
use crate::token::SplTokenService;

#[derive(Accounts)]
pub struct Deposit <'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    // Grows by one roster entry when `funder` is new
    #[account(
        mut,
        seeds=[LEDGER_SEED, ledger.mint.as_ref(), ledger.owner.as_ref()],
        bump=ledger.bump,
        realloc = FundLedger::space_for(
            ledger.funders_count() + usize::from(!ledger.is_funder(&funder.key()))
        ),
        realloc::payer = funder,
        realloc::zero = false
    )]
    pub ledger: Account<'info, FundLedger>,

    #[account(address = ledger.mint @ FundMeError::InvalidMint)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Must have approved `ledger` as delegate for at least the deposit amount
    #[account(
        mut,
        constraint = funder_ata.owner == funder.key() @ FundMeError::TokenAccountMismatch,
        constraint = funder_ata.mint == ledger.mint @ FundMeError::InvalidMint
    )]
    pub funder_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        address = ledger.vault @ FundMeError::TokenAccountMismatch
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>
}

impl <'info> Deposit <'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let mint_key = self.ledger.mint;
        let owner_key = self.ledger.owner;
        let bump = [self.ledger.bump];
        let ledger_seeds: &[&[u8]] = &[LEDGER_SEED, mint_key.as_ref(), owner_key.as_ref(), &bump];
        let signer = &[ledger_seeds];

        let custody = self.ledger.key();
        let mut token = SplTokenService::new(
            self.token_program.to_account_info(),
            &self.mint,
            &self.vault,
            &self.funder_ata,
            self.ledger.to_account_info(),
            signer,
        );

        self.ledger.deposit(&mut token, custody, self.funder.key(), amount)
    }
}
