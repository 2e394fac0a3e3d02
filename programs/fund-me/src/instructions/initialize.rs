use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface}
};

use crate::constants::LEDGER_SEED;
use crate::state::FundLedger;
use crate::token::spl::ensure_supported_mint;

#[derive(Accounts)]
pub struct Initialize <'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer=owner,
        space=FundLedger::INIT_SPACE,
        seeds=[LEDGER_SEED, mint.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, FundLedger>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(init,
        associated_token::mint=mint,
        associated_token::authority=ledger,
        associated_token::token_program=token_program,
        payer=owner)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>
}

impl <'info> Initialize <'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        ensure_supported_mint(&self.mint.to_account_info())?;

        self.ledger.set_inner(FundLedger::new(
            self.owner.key(),
            self.mint.key(),
            self.vault.key(),
            bumps.ledger,
        ));

        msg!("Ledger for mint {} owned by {}", self.mint.key(), self.owner.key());
        Ok(())
    }
}
