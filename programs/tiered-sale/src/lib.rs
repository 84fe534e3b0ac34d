#![allow(clippy::too_many_arguments)]

//! # TieredSale
//!
//! Fixed-supply token sale. Buyers pay lamports during an owner-configured
//! window and receive pre-funded SPL tokens at `rate x time bonus x amount bonus`.

use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod tiers;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use tiers::*;

declare_id!("FbksEcZWy3drVTjvAVaQupri84rinZDJa3J9W9cjWypE");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Tiered Sale",
    project_url: "https://github.com/twzrd-sol/tiered-sale",
    contacts: "link:https://github.com/twzrd-sol/tiered-sale/security/advisories/new",
    policy: "https://github.com/twzrd-sol/tiered-sale/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/twzrd-sol/tiered-sale"
}

#[program]
pub mod tiered_sale {
    use super::*;

    // -------------------------------------------------------------------------
    // Sale Lifecycle
    // -------------------------------------------------------------------------

    /// Create the sale config and its token vault for a mint.
    pub fn initialize_sale(
        ctx: Context<InitializeSale>,
        params: InitializeSaleParams,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    /// Deposit sale supply into the vault. Anyone holding the token may fund.
    pub fn fund_sale(ctx: Context<FundSale>, amount: u64) -> Result<()> {
        instructions::fund::handler(ctx, amount)
    }

    // -------------------------------------------------------------------------
    // Purchases
    // -------------------------------------------------------------------------

    /// Buy tokens for the paying wallet. Returns tokens issued.
    pub fn buy(ctx: Context<Purchase>, native_amount: u64) -> Result<u64> {
        instructions::buy::buy(ctx, native_amount)
    }

    /// Buy tokens on behalf of `recipient`. Returns tokens issued.
    pub fn buy_tokens(
        ctx: Context<Purchase>,
        recipient: Pubkey,
        native_amount: u64,
    ) -> Result<u64> {
        instructions::buy::buy_tokens(ctx, recipient, native_amount)
    }

    // -------------------------------------------------------------------------
    // Admin
    // -------------------------------------------------------------------------

    /// Replace one bonus tier table (admin only).
    pub fn set_tiers(ctx: Context<AdminAction>, kind: TierKind, tiers: Vec<u64>) -> Result<()> {
        instructions::admin::set_tiers(ctx, kind, tiers)
    }

    /// Replace both bonus tier tables atomically (admin only).
    pub fn set_bonuses(
        ctx: Context<AdminAction>,
        time_tiers: Vec<u64>,
        amount_tiers: Vec<u64>,
    ) -> Result<()> {
        instructions::admin::set_bonuses(ctx, time_tiers, amount_tiers)
    }

    /// Update the base exchange rate (admin only).
    pub fn set_rate(ctx: Context<AdminAction>, new_rate: u64) -> Result<()> {
        instructions::admin::set_rate(ctx, new_rate)
    }

    /// Update the sale window (admin only).
    pub fn set_window(
        ctx: Context<AdminAction>,
        opening_time: i64,
        closing_time: i64,
    ) -> Result<()> {
        instructions::admin::set_window(ctx, opening_time, closing_time)
    }

    /// Move all unsold tokens to the admin (admin only). Returns the amount.
    pub fn reclaim(ctx: Context<Reclaim>) -> Result<u64> {
        instructions::reclaim::reclaim(ctx)
    }

    /// Burn tokens held by the admin (admin only).
    pub fn burn_owner_tokens(ctx: Context<BurnOwnerTokens>, amount: u64) -> Result<()> {
        instructions::reclaim::burn_owner_tokens(ctx, amount)
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn is_open(ctx: Context<SaleView>) -> Result<bool> {
        instructions::views::is_open(ctx)
    }

    pub fn has_closed(ctx: Context<SaleView>) -> Result<bool> {
        instructions::views::has_closed(ctx)
    }

    pub fn sale_status(ctx: Context<SaleView>) -> Result<SaleStatus> {
        instructions::views::sale_status(ctx)
    }

    pub fn get_current_rate(ctx: Context<SaleView>) -> Result<u64> {
        instructions::views::get_current_rate(ctx)
    }

    /// Tokens `native_amount` would buy at `now`, bonuses included.
    pub fn preview_tokens_for(ctx: Context<SaleView>, native_amount: u64, now: i64) -> Result<u64> {
        instructions::views::preview_tokens_for(ctx, native_amount, now)
    }
}
