//! Read-only views. Results are returned through Anchor return data.

use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::{SaleConfig, SaleStatus};

#[derive(Accounts)]
pub struct SaleView<'info> {
    #[account(
        seeds = [SALE_SEED, sale.token_mint.as_ref()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, SaleConfig>,
}

pub fn is_open(ctx: Context<SaleView>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.sale.is_open(now))
}

pub fn has_closed(ctx: Context<SaleView>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.sale.has_closed(now))
}

pub fn sale_status(ctx: Context<SaleView>) -> Result<SaleStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.sale.status(now))
}

pub fn get_current_rate(ctx: Context<SaleView>) -> Result<u64> {
    Ok(ctx.accounts.sale.rate)
}

/// Tokens `native_amount` would buy at `now`. No window or supply checks.
pub fn preview_tokens_for(ctx: Context<SaleView>, native_amount: u64, now: i64) -> Result<u64> {
    ctx.accounts.sale.preview_tokens(now, native_amount)
}
