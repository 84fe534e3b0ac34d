//! Deposit sale supply into the vault.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::SALE_SEED;
use crate::errors::SaleError;
use crate::events::SaleFunded;
use crate::state::SaleConfig;

#[derive(Accounts)]
pub struct FundSale<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [SALE_SEED, sale.token_mint.as_ref()],
        bump = sale.bump,
    )]
    pub sale: Box<Account<'info, SaleConfig>>,

    #[account(address = sale.token_mint @ SaleError::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Funder's token account (token program enforces funder authority)
    #[account(
        mut,
        constraint = funder_token_account.mint == sale.token_mint @ SaleError::InvalidMint,
    )]
    pub funder_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = sale.sale_vault,
    )]
    pub sale_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<FundSale>, amount: u64) -> Result<()> {
    require!(amount > 0, SaleError::InvalidConfiguration);

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.funder_token_account.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.sale_vault.to_account_info(),
            authority: ctx.accounts.funder.to_account_info(),
        },
    );
    token_interface::transfer_checked(transfer_ctx, amount, ctx.accounts.token_mint.decimals)?;

    emit!(SaleFunded {
        sale: ctx.accounts.sale.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Sale funded with {} tokens", amount);
    Ok(())
}
