#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod state;
pub mod token;

use crate::instructions::*;

declare_id!("2NLnCPkP7VddJcmTCuXeEFsVwVap4qqaaBqxn4wmo3XP");

#[program]
pub mod fund_me {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)?;
        Ok(())
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)?;
        Ok(())
    }

    /// Sends the whole vault balance to the owner and clears every contribution.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<u64> {
        ctx.accounts.withdraw()
    }

    pub fn minimum_deposit(ctx: Context<LedgerView>) -> Result<u64> {
        Ok(ctx.accounts.minimum_deposit())
    }
    pub fn ledger_owner(ctx: Context<LedgerView>) -> Result<Pubkey> {
        Ok(ctx.accounts.ledger_owner())
    }
    pub fn token_mint(ctx: Context<LedgerView>) -> Result<Pubkey> {
        Ok(ctx.accounts.token_mint())
    }
    pub fn contribution_of(ctx: Context<LedgerView>, funder: Pubkey) -> Result<u64> {
        Ok(ctx.accounts.contribution_of(&funder))
    }
    pub fn funder_at(ctx: Context<LedgerView>, index: u32) -> Result<Pubkey> {
        Ok(ctx.accounts.funder_at(index))
    }
    pub fn funders_count(ctx: Context<LedgerView>) -> Result<u32> {
        Ok(ctx.accounts.funders_count())
    }
    pub fn total_contributed(ctx: Context<LedgerView>) -> Result<u64> {
        Ok(ctx.accounts.total_contributed())
    }
}
