//! Constants for TieredSale.

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for SaleConfig PDA: ["sale", token_mint]
pub const SALE_SEED: &[u8] = b"sale";

/// Seed for the sale's token vault: ["sale_vault", sale]
pub const SALE_VAULT_SEED: &[u8] = b"sale_vault";

// =============================================================================
// BONUS TIERS
// =============================================================================

/// Percent scale for tier multipliers (100 = 1.0x)
pub const PERCENT_BASE: u64 = 100;

/// Upper bound on entries per tier table. Keeps SaleConfig at a fixed size.
pub const MAX_TIER_ENTRIES: usize = 16;

// =============================================================================
// ACCOUNT VERSIONING
// =============================================================================

pub const SALE_CONFIG_VERSION: u8 = 1;
