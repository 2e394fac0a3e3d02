use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface}
};

use crate::constants::LEDGER_SEED;
use crate::state::{FundLedger, FundMeError};
use crate::token::SplTokenService;

#[derive(Accounts)]
pub struct Withdraw <'info> {
    // Checked against `ledger.owner` by the ledger itself
    #[account(mut)]
    pub caller: Signer<'info>,

    // Shrinks back to an empty roster, rent goes to the caller
    #[account(
        mut,
        seeds=[LEDGER_SEED, ledger.mint.as_ref(), ledger.owner.as_ref()],
        bump=ledger.bump,
        realloc = FundLedger::INIT_SPACE,
        realloc::payer = caller,
        realloc::zero = false
    )]
    pub ledger: Account<'info, FundLedger>,

    #[account(address = ledger.mint @ FundMeError::InvalidMint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        address = ledger.vault @ FundMeError::TokenAccountMismatch
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = caller,
        associated_token::mint = mint,
        associated_token::authority = caller,
        associated_token::token_program = token_program
    )]
    pub caller_ata: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>
}

impl <'info> Withdraw <'info> {
    pub fn withdraw(&mut self) -> Result<u64> {
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
            &self.caller_ata,
            self.ledger.to_account_info(),
            signer,
        );

        self.ledger.withdraw(&mut token, custody, self.caller.key())
    }
}
