//! Pay lamports, receive sale tokens.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::SALE_SEED;
use crate::errors::SaleError;
use crate::events::TokensPurchased;
use crate::state::SaleConfig;

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Any wallet. Tokens land in its associated token account.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SALE_SEED, sale.token_mint.as_ref()],
        bump = sale.bump,
    )]
    pub sale: Box<Account<'info, SaleConfig>>,

    #[account(address = sale.token_mint @ SaleError::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Sale token vault
    #[account(
        mut,
        address = sale.sale_vault,
    )]
    pub sale_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Recipient's token account (created if needed, payer funds rent)
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = token_mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: Must be the beneficiary stored in the sale config.
    #[account(
        mut,
        address = sale.beneficiary @ SaleError::InvalidBeneficiary,
    )]
    pub beneficiary: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Payer buys for themself.
pub fn buy(ctx: Context<Purchase>, native_amount: u64) -> Result<u64> {
    require_keys_eq!(
        ctx.accounts.recipient.key(),
        ctx.accounts.payer.key(),
        SaleError::InvalidRecipient
    );
    process_purchase(ctx, native_amount)
}

/// Payer buys on behalf of `recipient`.
pub fn buy_tokens(ctx: Context<Purchase>, recipient: Pubkey, native_amount: u64) -> Result<u64> {
    require_keys_eq!(
        ctx.accounts.recipient.key(),
        recipient,
        SaleError::InvalidRecipient
    );
    process_purchase(ctx, native_amount)
}

fn process_purchase(ctx: Context<Purchase>, native_amount: u64) -> Result<u64> {
    let clock = Clock::get()?;

    // Every check happens here, before either transfer.
    let quote = ctx.accounts.sale.quote_purchase(
        clock.unix_timestamp,
        native_amount,
        ctx.accounts.sale_vault.amount,
    )?;

    // Tokens: sale vault -> recipient, signed by the sale PDA
    let token_mint_key = ctx.accounts.sale.token_mint;
    let bump = ctx.accounts.sale.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[SALE_SEED, token_mint_key.as_ref(), &[bump]]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.sale_vault.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.recipient_token_account.to_account_info(),
            authority: ctx.accounts.sale.to_account_info(),
        },
        signer_seeds,
    );
    token_interface::transfer_checked(
        transfer_ctx,
        quote.tokens,
        ctx.accounts.token_mint.decimals,
    )?;

    // Lamports: payer -> beneficiary, the full contribution
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.beneficiary.to_account_info(),
            },
        ),
        native_amount,
    )?;

    let sale = &mut ctx.accounts.sale;
    sale.record_purchase(&quote)?;

    emit!(TokensPurchased {
        sale: sale.key(),
        payer: ctx.accounts.payer.key(),
        recipient: ctx.accounts.recipient.key(),
        native_amount,
        tokens_issued: quote.tokens,
        rate: sale.rate,
        time_percent: quote.bonus.time_percent,
        amount_percent: quote.bonus.amount_percent,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Purchased {} tokens for {} lamports (rate={}, bonus={}%x{}%)",
        quote.tokens,
        native_amount,
        sale.rate,
        quote.bonus.time_percent,
        quote.bonus.amount_percent
    );

    Ok(quote.tokens)
}
