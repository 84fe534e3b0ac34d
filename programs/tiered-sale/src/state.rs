//! On-chain state definitions for TieredSale.

use anchor_lang::prelude::*;

use crate::errors::SaleError;
use crate::tiers::{BonusMultiplier, TierKind, TierTable};

// =============================================================================
// SALE CONFIG
// =============================================================================

/// Sale configuration and running totals.
/// Seeds: ["sale", token_mint]
#[account]
pub struct SaleConfig {
    /// PDA bump
    pub bump: u8,
    /// Sale vault PDA bump
    pub vault_bump: u8,
    /// Version for future migrations
    pub version: u8,
    /// Owner allowed to change configuration and reclaim
    pub admin: Pubkey,
    /// Receives every purchase's lamports
    pub beneficiary: Pubkey,
    /// Mint of the token being sold
    pub token_mint: Pubkey,
    /// Token account holding unsold supply (authority = this PDA)
    pub sale_vault: Pubkey,
    /// First second purchases are accepted
    pub opening_time: i64,
    /// First second purchases are rejected again
    pub closing_time: i64,
    /// Base tokens per lamport
    pub rate: u64,
    /// Tokens issued across all purchases
    pub total_sold: u64,
    /// Lamports forwarded to the beneficiary
    pub total_raised: u64,
    /// Purchase count (for analytics)
    pub purchase_count: u64,
    pub time_tiers: TierTable,
    pub amount_tiers: TierTable,
    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl SaleConfig {
    pub const LEN: usize = 8  // discriminator
        + 1   // bump
        + 1   // vault_bump
        + 1   // version
        + 32  // admin
        + 32  // beneficiary
        + 32  // token_mint
        + 32  // sale_vault
        + 8   // opening_time
        + 8   // closing_time
        + 8   // rate
        + 8   // total_sold
        + 8   // total_raised
        + 8   // purchase_count
        + TierTable::LEN  // time_tiers
        + TierTable::LEN  // amount_tiers
        + 32; // _reserved

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    // -------------------------------------------------------------------------
    // Window
    // -------------------------------------------------------------------------

    /// `[opening_time, closing_time)`
    pub fn is_open(&self, now: i64) -> bool {
        self.opening_time <= now && now < self.closing_time
    }

    pub fn has_closed(&self, now: i64) -> bool {
        now >= self.closing_time
    }

    pub fn status(&self, now: i64) -> SaleStatus {
        if now < self.opening_time {
            SaleStatus::NotStarted
        } else if self.has_closed(now) {
            SaleStatus::Closed
        } else {
            SaleStatus::Open
        }
    }

    pub fn validate_window(opening_time: i64, closing_time: i64) -> Result<()> {
        require!(opening_time < closing_time, SaleError::InvalidConfiguration);
        Ok(())
    }

    pub fn set_window(&mut self, opening_time: i64, closing_time: i64) -> Result<()> {
        Self::validate_window(opening_time, closing_time)?;
        self.opening_time = opening_time;
        self.closing_time = closing_time;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rate
    // -------------------------------------------------------------------------

    pub fn validate_rate(rate: u64) -> Result<()> {
        require!(rate > 0, SaleError::InvalidConfiguration);
        Ok(())
    }

    pub fn set_rate(&mut self, rate: u64) -> Result<()> {
        Self::validate_rate(rate)?;
        self.rate = rate;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Tiers
    // -------------------------------------------------------------------------

    /// Replace one tier table. The stored table is untouched on error.
    pub fn set_tiers(&mut self, kind: TierKind, flat: &[u64]) -> Result<()> {
        let table = TierTable::decode(kind, flat)?;
        match kind {
            TierKind::Time => self.time_tiers = table,
            TierKind::Amount => self.amount_tiers = table,
        }
        Ok(())
    }

    /// Replace both tables, or neither.
    pub fn set_bonuses(&mut self, time_flat: &[u64], amount_flat: &[u64]) -> Result<()> {
        let time_tiers = TierTable::decode(TierKind::Time, time_flat)?;
        let amount_tiers = TierTable::decode(TierKind::Amount, amount_flat)?;
        self.time_tiers = time_tiers;
        self.amount_tiers = amount_tiers;
        Ok(())
    }

    pub fn bonus_for(&self, now: i64, native_amount: u64) -> BonusMultiplier {
        // Pre-epoch clocks resolve like time zero.
        let now = u64::try_from(now).unwrap_or(0);
        BonusMultiplier {
            time_percent: self.time_tiers.resolve(now),
            amount_percent: self.amount_tiers.resolve(native_amount),
        }
    }

    // -------------------------------------------------------------------------
    // Purchases
    // -------------------------------------------------------------------------

    /// Token amount `native_amount` would buy at `now`, ignoring window and supply.
    pub fn preview_tokens(&self, now: i64, native_amount: u64) -> Result<u64> {
        self.bonus_for(now, native_amount)
            .tokens_for(native_amount, self.rate)
    }

    /// Validate a purchase and price it. Runs before any transfer.
    pub fn quote_purchase(
        &self,
        now: i64,
        native_amount: u64,
        sale_balance: u64,
    ) -> Result<PurchaseQuote> {
        require!(self.is_open(now), SaleError::SaleNotActive);
        require!(native_amount > 0, SaleError::ZeroContribution);

        let bonus = self.bonus_for(now, native_amount);
        let tokens = bonus.tokens_for(native_amount, self.rate)?;
        require!(tokens <= sale_balance, SaleError::InsufficientSaleSupply);

        Ok(PurchaseQuote {
            native_amount,
            bonus,
            tokens,
        })
    }

    /// Bump running totals after both transfers went through.
    pub fn record_purchase(&mut self, quote: &PurchaseQuote) -> Result<()> {
        self.total_sold = self
            .total_sold
            .checked_add(quote.tokens)
            .ok_or(SaleError::MathOverflow)?;
        self.total_raised = self
            .total_raised
            .checked_add(quote.native_amount)
            .ok_or(SaleError::MathOverflow)?;
        self.purchase_count = self
            .purchase_count
            .checked_add(1)
            .ok_or(SaleError::MathOverflow)?;
        Ok(())
    }
}

// =============================================================================
// DERIVED TYPES
// =============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleStatus {
    NotStarted,
    Open,
    Closed,
}

/// Priced, validated purchase. Never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub native_amount: u64,
    pub bonus: BonusMultiplier,
    pub tokens: u64,
}
