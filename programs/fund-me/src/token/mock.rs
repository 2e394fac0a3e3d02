//! In-memory token with open minting, used to drive the ledger in unit tests.

use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::state::FundMeError;
use crate::token::TokenService;

#[derive(Default, Debug)]
pub struct MockToken {
    balances: HashMap<Pubkey, u64>,
    allowances: HashMap<(Pubkey, Pubkey), u64>,
    pub fail_pushes: bool,
}

impl MockToken {
    pub fn mint_to(&mut self, holder: Pubkey, amount: u64) {
        *self.balances.entry(holder).or_default() += amount;
    }

    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64) {
        self.allowances.insert((owner, spender), amount);
    }

    pub fn balance(&self, holder: &Pubkey) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Plain transfer signed by `from`, bypassing any ledger.
    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
        let from_balance = self.balance(&from);
        require!(from_balance >= amount, FundMeError::TransferFailed);
        self.balances.insert(from, from_balance - amount);
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }

    /// Handle through which `caller` (the ledger) talks to this token.
    pub fn as_caller(&mut self, caller: Pubkey) -> MockTokenCall<'_> {
        MockTokenCall { token: self, caller }
    }
}

pub struct MockTokenCall<'a> {
    token: &'a mut MockToken,
    caller: Pubkey,
}

impl TokenService for MockTokenCall<'_> {
    fn pull_from(&mut self, payer: Pubkey, recipient: Pubkey, amount: u64) -> Result<()> {
        let allowance = self.token.allowance(&payer, &self.caller);
        require!(allowance >= amount, FundMeError::TransferFailed);

        self.token.transfer(payer, recipient, amount)?;
        self.token
            .allowances
            .insert((payer, self.caller), allowance - amount);
        Ok(())
    }

    fn push(&mut self, recipient: Pubkey, amount: u64) -> Result<()> {
        require!(!self.token.fail_pushes, FundMeError::TransferFailed);
        self.token.transfer(self.caller, recipient, amount)
    }

    fn balance_of(&self, holder: Pubkey) -> Result<u64> {
        Ok(self.token.balance(&holder))
    }
}
