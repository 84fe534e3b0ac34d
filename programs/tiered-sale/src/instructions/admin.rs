//! Admin instructions for sale configuration.
//!
//! Every change is validated in full before the account is written, so a
//! rejected call leaves the previous configuration in place.

use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::errors::SaleError;
use crate::events::{RateUpdated, TiersUpdated, WindowUpdated};
use crate::state::SaleConfig;
use crate::tiers::TierKind;

#[derive(Accounts)]
pub struct AdminAction<'info> {
    #[account(
        constraint = sale.is_admin(&admin.key()) @ SaleError::NotOwner
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SALE_SEED, sale.token_mint.as_ref()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, SaleConfig>,
}

/// Replace the time or amount tier table.
pub fn set_tiers(ctx: Context<AdminAction>, kind: TierKind, tiers: Vec<u64>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.set_tiers(kind, &tiers)?;

    emit!(TiersUpdated {
        sale: sale.key(),
        admin: ctx.accounts.admin.key(),
        kind,
        tiers,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("{:?} tiers updated", kind);
    Ok(())
}

/// Replace both tier tables in one call.
pub fn set_bonuses(
    ctx: Context<AdminAction>,
    time_tiers: Vec<u64>,
    amount_tiers: Vec<u64>,
) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.set_bonuses(&time_tiers, &amount_tiers)?;

    let timestamp = Clock::get()?.unix_timestamp;
    emit!(TiersUpdated {
        sale: sale.key(),
        admin: ctx.accounts.admin.key(),
        kind: TierKind::Time,
        tiers: time_tiers,
        timestamp,
    });
    emit!(TiersUpdated {
        sale: sale.key(),
        admin: ctx.accounts.admin.key(),
        kind: TierKind::Amount,
        tiers: amount_tiers,
        timestamp,
    });

    msg!("Time and amount tiers updated");
    Ok(())
}

/// Update the base exchange rate.
pub fn set_rate(ctx: Context<AdminAction>, new_rate: u64) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    let old_rate = sale.rate;
    sale.set_rate(new_rate)?;

    emit!(RateUpdated {
        sale: sale.key(),
        admin: ctx.accounts.admin.key(),
        old_rate,
        new_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Rate updated: {} -> {}", old_rate, new_rate);
    Ok(())
}

/// Move the sale window. Allowed before, during, or after the current one.
pub fn set_window(ctx: Context<AdminAction>, opening_time: i64, closing_time: i64) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    sale.set_window(opening_time, closing_time)?;

    emit!(WindowUpdated {
        sale: sale.key(),
        admin: ctx.accounts.admin.key(),
        opening_time,
        closing_time,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Window updated: [{}, {})", opening_time, closing_time);
    Ok(())
}
