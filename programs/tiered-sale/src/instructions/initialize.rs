//! Initialize a new sale for a token mint.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{SALE_CONFIG_VERSION, SALE_SEED, SALE_VAULT_SEED};
use crate::events::SaleInitialized;
use crate::state::SaleConfig;
use crate::tiers::{TierKind, TierTable};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeSaleParams {
    pub opening_time: i64,
    pub closing_time: i64,
    /// Base tokens per lamport
    pub rate: u64,
    /// Flat [deadline, percent, ..., 0, 100], earliest deadline first
    pub time_tiers: Vec<u64>,
    /// Flat [min_lamports, percent, ..., 0, 100], largest threshold first
    pub amount_tiers: Vec<u64>,
}

#[derive(Accounts)]
pub struct InitializeSale<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: Only the address is stored. Receives lamports on every purchase.
    pub beneficiary: UncheckedAccount<'info>,

    /// Mint of the token being sold
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// New sale PDA
    #[account(
        init,
        payer = admin,
        space = SaleConfig::LEN,
        seeds = [SALE_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub sale: Box<Account<'info, SaleConfig>>,

    /// Sale token vault (authority = sale PDA)
    #[account(
        init,
        payer = admin,
        seeds = [SALE_VAULT_SEED, sale.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = sale,
        token::token_program = token_program,
    )]
    pub sale_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeSale>, params: InitializeSaleParams) -> Result<()> {
    SaleConfig::validate_window(params.opening_time, params.closing_time)?;
    SaleConfig::validate_rate(params.rate)?;
    let time_tiers = TierTable::decode(TierKind::Time, &params.time_tiers)?;
    let amount_tiers = TierTable::decode(TierKind::Amount, &params.amount_tiers)?;

    let clock = Clock::get()?;

    let sale = &mut ctx.accounts.sale;
    sale.bump = ctx.bumps.sale;
    sale.vault_bump = ctx.bumps.sale_vault;
    sale.version = SALE_CONFIG_VERSION;
    sale.admin = ctx.accounts.admin.key();
    sale.beneficiary = ctx.accounts.beneficiary.key();
    sale.token_mint = ctx.accounts.token_mint.key();
    sale.sale_vault = ctx.accounts.sale_vault.key();
    sale.opening_time = params.opening_time;
    sale.closing_time = params.closing_time;
    sale.rate = params.rate;
    sale.total_sold = 0;
    sale.total_raised = 0;
    sale.purchase_count = 0;
    sale.time_tiers = time_tiers;
    sale.amount_tiers = amount_tiers;
    sale._reserved = [0u8; 32];

    emit!(SaleInitialized {
        sale: sale.key(),
        token_mint: sale.token_mint,
        sale_vault: sale.sale_vault,
        admin: sale.admin,
        beneficiary: sale.beneficiary,
        opening_time: sale.opening_time,
        closing_time: sale.closing_time,
        rate: sale.rate,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Initialized sale for mint: {}, window [{}, {}), rate={}",
        sale.token_mint,
        sale.opening_time,
        sale.closing_time,
        sale.rate
    );

    Ok(())
}
