use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    state::Mint as MintState,
};
use anchor_spl::token_interface::{transfer_checked, Mint, TokenAccount, TransferChecked};

use crate::state::FundMeError;
use crate::token::TokenService;

/// Rejects mints whose transfers do not deliver the full amount, since the
/// ledger credits what the funder sends.
pub fn ensure_supported_mint(mint: &AccountInfo) -> Result<()> {
    let data = mint.try_borrow_data()?;
    let state = StateWithExtensions::<MintState>::unpack(&data)?;
    check_mint_extensions(&state.get_extension_types()?)
}

fn check_mint_extensions(extensions: &[ExtensionType]) -> Result<()> {
    require!(
        !extensions.contains(&ExtensionType::TransferFeeConfig),
        FundMeError::UnsupportedMint
    );
    Ok(())
}

/// The token account fields the adapter checks before moving tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Holding {
    owner: Pubkey,
    amount: u64,
    delegate: Option<Pubkey>,
    delegated_amount: u64,
}

impl From<&TokenAccount> for Holding {
    fn from(account: &TokenAccount) -> Self {
        Self {
            owner: account.owner,
            amount: account.amount,
            delegate: account.delegate.into(),
            delegated_amount: account.delegated_amount,
        }
    }
}

/// `source` must belong to `payer` and have approved `ledger` for `amount`.
fn check_pull(source: &Holding, ledger: Pubkey, payer: Pubkey, recipient: Pubkey, amount: u64) -> Result<()> {
    require_keys_eq!(source.owner, payer, FundMeError::TokenAccountMismatch);
    require_keys_eq!(ledger, recipient, FundMeError::TokenAccountMismatch);

    // The ledger pulls as the delegate the payer approved.
    require!(
        source.delegate == Some(recipient) && source.delegated_amount >= amount,
        FundMeError::TransferFailed
    );
    require!(source.amount >= amount, FundMeError::TransferFailed);
    Ok(())
}

fn check_push(vault: &Holding, destination: &Holding, recipient: Pubkey, amount: u64) -> Result<()> {
    require_keys_eq!(destination.owner, recipient, FundMeError::TokenAccountMismatch);
    require!(vault.amount >= amount, FundMeError::TransferFailed);
    Ok(())
}

fn balance_among(ledger: Pubkey, vault: &Holding, counterparty: &Holding, holder: Pubkey) -> Result<u64> {
    if holder == ledger {
        Ok(vault.amount)
    } else if holder == counterparty.owner {
        Ok(counterparty.amount)
    } else {
        err!(FundMeError::TokenAccountMismatch)
    }
}

/// `TokenService` backed by CPIs into the SPL token program.
///
/// The ledger PDA is the custody authority: it owns `vault` and signs every
/// transfer with `signer_seeds`. `counterparty` is the token account of the
/// depositor (on pull) or of the owner (on push).
pub struct SplTokenService<'a, 'info> {
    token_program: AccountInfo<'info>,
    mint: &'a InterfaceAccount<'info, Mint>,
    vault: &'a InterfaceAccount<'info, TokenAccount>,
    counterparty: &'a InterfaceAccount<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplTokenService<'a, 'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        mint: &'a InterfaceAccount<'info, Mint>,
        vault: &'a InterfaceAccount<'info, TokenAccount>,
        counterparty: &'a InterfaceAccount<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            token_program,
            mint,
            vault,
            counterparty,
            authority,
            signer_seeds,
        }
    }

    fn vault_holding(&self) -> Holding {
        Holding::from(&**self.vault)
    }

    fn counterparty_holding(&self) -> Holding {
        Holding::from(&**self.counterparty)
    }

    fn transfer(&self, from: AccountInfo<'info>, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from,
            mint: self.mint.to_account_info(),
            to,
            authority: self.authority.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            cpi_accounts,
            self.signer_seeds,
        );

        transfer_checked(cpi_ctx, amount, self.mint.decimals)
            .map_err(|_| error!(FundMeError::TransferFailed))
    }
}

impl<'a, 'info> TokenService for SplTokenService<'a, 'info> {
    fn pull_from(&mut self, payer: Pubkey, recipient: Pubkey, amount: u64) -> Result<()> {
        check_pull(&self.counterparty_holding(), *self.authority.key, payer, recipient, amount)?;

        self.transfer(
            self.counterparty.to_account_info(),
            self.vault.to_account_info(),
            amount,
        )
    }

    fn push(&mut self, recipient: Pubkey, amount: u64) -> Result<()> {
        check_push(&self.vault_holding(), &self.counterparty_holding(), recipient, amount)?;

        self.transfer(
            self.vault.to_account_info(),
            self.counterparty.to_account_info(),
            amount,
        )
    }

    fn balance_of(&self, holder: Pubkey) -> Result<u64> {
        balance_among(
            *self.authority.key,
            &self.vault_holding(),
            &self.counterparty_holding(),
            holder,
        )
    }
}
