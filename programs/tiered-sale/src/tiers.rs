//! Bonus tier tables and the bonus multiplier they produce.
//!
//! A tier table arrives on the wire as a flat `[threshold, percent, ...]`
//! sequence and is decoded once into `TierEntry` pairs. Resolution never
//! fails: every table ends in a `threshold == 0` entry that catches whatever
//! the other tiers do not.
//!
//! - Amount tables are ordered largest threshold first and pick the first
//!   entry with `threshold <= contribution`.
//! - Time tables are ordered earliest deadline first and pick the first entry
//!   whose deadline has not passed (`deadline >= now`).

use anchor_lang::prelude::*;

use crate::constants::{MAX_TIER_ENTRIES, PERCENT_BASE};
use crate::errors::SaleError;

/// Which scalar a tier table is keyed by.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierKind {
    /// Keyed by unix timestamp; rewards earlier purchases.
    Time,
    /// Keyed by single-contribution size in lamports; rewards larger purchases.
    Amount,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierEntry {
    pub threshold: u64,
    /// Multiplier on a 100 base (110 = +10%)
    pub percent: u64,
}

impl TierEntry {
    pub const LEN: usize = 8  // threshold
        + 8;  // percent
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TierTable {
    pub kind: TierKind,
    pub entries: Vec<TierEntry>,
}

impl TierTable {
    /// Serialized size at full capacity.
    pub const LEN: usize = 1  // kind
        + 4  // vec length prefix
        + MAX_TIER_ENTRIES * TierEntry::LEN;

    /// Table with only the terminal 1.0x entry.
    pub fn no_bonus(kind: TierKind) -> Self {
        Self {
            kind,
            entries: vec![TierEntry {
                threshold: 0,
                percent: PERCENT_BASE,
            }],
        }
    }

    /// Decode and validate a flat `[threshold, percent, ...]` table.
    pub fn decode(kind: TierKind, flat: &[u64]) -> Result<Self> {
        require!(
            !flat.is_empty() && flat.len() % 2 == 0,
            SaleError::InvalidConfiguration
        );

        let entries: Vec<TierEntry> = flat
            .chunks_exact(2)
            .map(|pair| TierEntry {
                threshold: pair[0],
                percent: pair[1],
            })
            .collect();
        require!(
            entries.len() <= MAX_TIER_ENTRIES,
            SaleError::InvalidConfiguration
        );

        let (terminal, tiers) = entries
            .split_last()
            .ok_or(SaleError::InvalidConfiguration)?;
        require!(terminal.threshold == 0, SaleError::InvalidConfiguration);
        require!(
            entries.iter().all(|e| e.percent >= PERCENT_BASE),
            SaleError::InvalidConfiguration
        );
        require!(
            tiers.iter().all(|e| e.threshold > 0),
            SaleError::InvalidConfiguration
        );

        let ordered = tiers.windows(2).all(|w| match kind {
            TierKind::Amount => w[0].threshold > w[1].threshold,
            TierKind::Time => w[0].threshold < w[1].threshold,
        });
        require!(ordered, SaleError::InvalidConfiguration);

        Ok(Self { kind, entries })
    }

    /// Re-encode into the flat wire format.
    pub fn to_flat(&self) -> Vec<u64> {
        self.entries
            .iter()
            .flat_map(|e| [e.threshold, e.percent])
            .collect()
    }

    /// Percent multiplier that applies to `value`.
    pub fn resolve(&self, value: u64) -> u64 {
        let Some((terminal, tiers)) = self.entries.split_last() else {
            return PERCENT_BASE;
        };

        let hit = match self.kind {
            TierKind::Amount => tiers.iter().find(|e| e.threshold <= value),
            TierKind::Time => tiers.iter().find(|e| e.threshold >= value),
        };

        hit.unwrap_or(terminal).percent
    }
}

// =============================================================================
// BONUS MULTIPLIER
// =============================================================================

/// Time and amount percentages resolved for one purchase.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusMultiplier {
    pub time_percent: u64,
    pub amount_percent: u64,
}

impl BonusMultiplier {
    pub const NONE: Self = Self {
        time_percent: PERCENT_BASE,
        amount_percent: PERCENT_BASE,
    };

    /// Effective multiplier on a 100 base (120 x 110 -> 132). Display only;
    /// token math goes through `tokens_for`, which truncates once.
    pub fn combined_percent(&self) -> Result<u64> {
        let combined = (self.time_percent as u128)
            .checked_mul(self.amount_percent as u128)
            .ok_or(SaleError::MathOverflow)?
            .checked_div(PERCENT_BASE as u128)
            .ok_or(SaleError::MathOverflow)?;

        u64::try_from(combined).map_err(|_| error!(SaleError::MathOverflow))
    }

    /// tokens = native_amount * rate * time% * amount% / 100 / 100
    pub fn tokens_for(&self, native_amount: u64, rate: u64) -> Result<u64> {
        let denominator = (PERCENT_BASE as u128)
            .checked_mul(PERCENT_BASE as u128)
            .ok_or(SaleError::MathOverflow)?;

        let tokens = (native_amount as u128)
            .checked_mul(rate as u128)
            .ok_or(SaleError::MathOverflow)?
            .checked_mul(self.time_percent as u128)
            .ok_or(SaleError::MathOverflow)?
            .checked_mul(self.amount_percent as u128)
            .ok_or(SaleError::MathOverflow)?
            .checked_div(denominator)
            .ok_or(SaleError::MathOverflow)?;

        u64::try_from(tokens).map_err(|_| error!(SaleError::MathOverflow))
    }
}
