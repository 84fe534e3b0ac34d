//! Recover unsold supply and burn owner-held tokens.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Burn, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::SALE_SEED;
use crate::errors::SaleError;
use crate::events::{OwnerTokensBurned, TokensReclaimed};
use crate::state::SaleConfig;

#[derive(Accounts)]
pub struct Reclaim<'info> {
    #[account(
        mut,
        constraint = sale.is_admin(&admin.key()) @ SaleError::NotOwner
    )]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SALE_SEED, sale.token_mint.as_ref()],
        bump = sale.bump,
    )]
    pub sale: Box<Account<'info, SaleConfig>>,

    #[account(address = sale.token_mint @ SaleError::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = sale.sale_vault,
    )]
    pub sale_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin's token account (created if needed)
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = token_mint,
        associated_token::authority = admin,
        associated_token::token_program = token_program,
    )]
    pub admin_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Move the vault's entire balance to the admin. Does not close the window.
pub fn reclaim(ctx: Context<Reclaim>) -> Result<u64> {
    let amount = ctx.accounts.sale_vault.amount;

    if amount > 0 {
        let token_mint_key = ctx.accounts.sale.token_mint;
        let bump = ctx.accounts.sale.bump;
        let signer_seeds: &[&[&[u8]]] = &[&[SALE_SEED, token_mint_key.as_ref(), &[bump]]];

        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.sale_vault.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.admin_token_account.to_account_info(),
                authority: ctx.accounts.sale.to_account_info(),
            },
            signer_seeds,
        );
        token_interface::transfer_checked(transfer_ctx, amount, ctx.accounts.token_mint.decimals)?;
    }

    emit!(TokensReclaimed {
        sale: ctx.accounts.sale.key(),
        admin: ctx.accounts.admin.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Reclaimed {} unsold tokens", amount);
    Ok(amount)
}

// ---------------------------------------------------------------------------
// Burn
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct BurnOwnerTokens<'info> {
    #[account(
        constraint = sale.is_admin(&admin.key()) @ SaleError::NotOwner
    )]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SALE_SEED, sale.token_mint.as_ref()],
        bump = sale.bump,
    )]
    pub sale: Box<Account<'info, SaleConfig>>,

    #[account(
        mut,
        address = sale.token_mint @ SaleError::InvalidMint,
    )]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        constraint = admin_token_account.owner == admin.key() @ SaleError::NotOwner,
        constraint = admin_token_account.mint == sale.token_mint @ SaleError::InvalidMint,
    )]
    pub admin_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Burn tokens from the admin's own account. Reduces total supply.
pub fn burn_owner_tokens(ctx: Context<BurnOwnerTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, SaleError::InvalidConfiguration);

    let burn_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Burn {
            mint: ctx.accounts.token_mint.to_account_info(),
            from: ctx.accounts.admin_token_account.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        },
    );
    token_interface::burn(burn_ctx, amount)?;

    emit!(OwnerTokensBurned {
        sale: ctx.accounts.sale.key(),
        admin: ctx.accounts.admin.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Burned {} owner tokens", amount);
    Ok(())
}
