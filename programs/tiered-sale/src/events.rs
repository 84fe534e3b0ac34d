//! Event definitions for TieredSale.

use anchor_lang::prelude::*;

use crate::tiers::TierKind;

/// Emitted when a new sale is initialized.
#[event]
pub struct SaleInitialized {
    pub sale: Pubkey,
    pub token_mint: Pubkey,
    pub sale_vault: Pubkey,
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub opening_time: i64,
    pub closing_time: i64,
    pub rate: u64,
    pub timestamp: i64,
}

/// Emitted when tokens are deposited into the sale vault.
#[event]
pub struct SaleFunded {
    pub sale: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted on every successful purchase.
#[event]
pub struct TokensPurchased {
    pub sale: Pubkey,
    pub payer: Pubkey,
    pub recipient: Pubkey,
    /// Lamports forwarded to the beneficiary
    pub native_amount: u64,
    pub tokens_issued: u64,
    pub rate: u64,
    pub time_percent: u64,
    pub amount_percent: u64,
    pub timestamp: i64,
}

/// Emitted when one tier table is replaced.
#[event]
pub struct TiersUpdated {
    pub sale: Pubkey,
    pub admin: Pubkey,
    pub kind: TierKind,
    /// Flat [threshold, percent, ...] encoding
    pub tiers: Vec<u64>,
    pub timestamp: i64,
}

/// Emitted when the exchange rate changes.
#[event]
pub struct RateUpdated {
    pub sale: Pubkey,
    pub admin: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
    pub timestamp: i64,
}

/// Emitted when the sale window changes.
#[event]
pub struct WindowUpdated {
    pub sale: Pubkey,
    pub admin: Pubkey,
    pub opening_time: i64,
    pub closing_time: i64,
    pub timestamp: i64,
}

/// Emitted when unsold supply is returned to the admin.
#[event]
pub struct TokensReclaimed {
    pub sale: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when the admin burns tokens they hold.
#[event]
pub struct OwnerTokensBurned {
    pub sale: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
