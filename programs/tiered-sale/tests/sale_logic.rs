//! Unit-level tests for sale business logic.
//!
//! Tests the sale window, rate and tier mutation rules, bonus composition,
//! purchase quoting (window, contribution, supply) and the running totals.
//! These are pure-logic tests, no CPI or on-chain state required.

use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use tiered_sale::{
    BonusMultiplier, SaleConfig, SaleError, SaleStatus, TierKind, TierTable, SALE_CONFIG_VERSION,
};

const DAY: i64 = 24 * 60 * 60;
const WEEK: i64 = 7 * DAY;
const OPENING: i64 = 1_700_000_000;
const CLOSING: i64 = OPENING + 4 * WEEK;
const RATE: u64 = 200;

// =========================================================================
// HELPERS
// =========================================================================

fn at(offset: i64) -> u64 {
    (OPENING + offset) as u64
}

fn time_flat() -> Vec<u64> {
    vec![at(WEEK), 120, at(2 * WEEK), 110, 0, 100]
}

fn amount_flat() -> Vec<u64> {
    vec![10, 120, 5, 110, 0, 100]
}

fn make_sale() -> SaleConfig {
    SaleConfig {
        bump: 255,
        vault_bump: 254,
        version: SALE_CONFIG_VERSION,
        admin: Pubkey::new_unique(),
        beneficiary: Pubkey::new_unique(),
        token_mint: Pubkey::new_unique(),
        sale_vault: Pubkey::new_unique(),
        opening_time: OPENING,
        closing_time: CLOSING,
        rate: RATE,
        total_sold: 0,
        total_raised: 0,
        purchase_count: 0,
        time_tiers: TierTable::decode(TierKind::Time, &time_flat()).unwrap(),
        amount_tiers: TierTable::decode(TierKind::Amount, &amount_flat()).unwrap(),
        _reserved: [0u8; 32],
    }
}

fn sale_error(e: SaleError) -> Error {
    e.into()
}

/// Simulate a successful purchase: quote, move supply, bump totals.
fn simulate_purchase(
    sale: &mut SaleConfig,
    now: i64,
    native_amount: u64,
    sale_balance: &mut u64,
) -> u64 {
    let quote = sale.quote_purchase(now, native_amount, *sale_balance).unwrap();
    *sale_balance -= quote.tokens;
    sale.record_purchase(&quote).unwrap();
    quote.tokens
}

// =========================================================================
// SALE WINDOW TESTS
// =========================================================================

#[test]
fn test_window_monotonicity() {
    let sale = make_sale();

    for t in [0, OPENING - WEEK, OPENING - 1] {
        assert!(!sale.is_open(t), "t={} before opening must be closed", t);
        assert!(!sale.has_closed(t));
        assert_eq!(sale.status(t), SaleStatus::NotStarted);
    }

    for t in [OPENING, OPENING + 1, OPENING + WEEK, CLOSING - 1] {
        assert!(sale.is_open(t), "t={} inside window must be open", t);
        assert!(!sale.has_closed(t));
        assert_eq!(sale.status(t), SaleStatus::Open);
    }

    for t in [CLOSING, CLOSING + 1, CLOSING + 52 * WEEK] {
        assert!(!sale.is_open(t), "t={} at/after closing must be closed", t);
        assert!(sale.has_closed(t));
        assert_eq!(sale.status(t), SaleStatus::Closed);
    }
}

#[test]
fn test_set_window_rejects_inverted_and_empty() {
    let mut sale = make_sale();

    let result = sale.set_window(CLOSING, OPENING);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InvalidConfiguration));

    let result = sale.set_window(OPENING, OPENING);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InvalidConfiguration));

    // Untouched
    assert_eq!(sale.opening_time, OPENING);
    assert_eq!(sale.closing_time, CLOSING);
}

#[test]
fn test_set_window_can_open_early() {
    let mut sale = make_sale();
    let new_opening = OPENING - 3 * DAY;
    let now = OPENING - 2 * DAY;

    let result = sale.quote_purchase(now, 1, u64::MAX);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::SaleNotActive));

    sale.set_window(new_opening, CLOSING).unwrap();
    assert!(sale.is_open(now));
    assert!(sale.quote_purchase(now, 1, u64::MAX).is_ok());
}

#[test]
fn test_set_window_can_reopen_after_close() {
    let mut sale = make_sale();
    let now = CLOSING + 1;

    let result = sale.quote_purchase(now, 1, u64::MAX);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::SaleNotActive));

    sale.set_window(OPENING, OPENING + 5 * WEEK).unwrap();
    assert!(!sale.has_closed(now));
    assert!(sale.quote_purchase(now, 1, u64::MAX).is_ok());
}

// =========================================================================
// RATE TESTS
// =========================================================================

#[test]
fn test_set_rate_rejects_zero() {
    let mut sale = make_sale();
    let result = sale.set_rate(0);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InvalidConfiguration));
    assert_eq!(sale.rate, RATE);
}

#[test]
fn test_rate_change_applies_to_next_purchase_only() {
    let mut sale = make_sale();
    let now = OPENING + 3 * WEEK; // no time bonus
    let mut supply = 1_000_000;

    let first = simulate_purchase(&mut sale, now, 1, &mut supply);
    assert_eq!(first, 200);
    let buyer_balance = first;

    sale.set_rate(400).unwrap();
    assert_eq!(sale.rate, 400);

    // Already-issued tokens are unaffected
    assert_eq!(buyer_balance, 200);

    let second = simulate_purchase(&mut sale, now, 1, &mut supply);
    assert_eq!(second, 400);
    assert_eq!(buyer_balance + second, 600);
}

// =========================================================================
// TIER MUTATION TESTS
// =========================================================================

#[test]
fn test_set_tiers_invalid_leaves_table_untouched() {
    let mut sale = make_sale();
    let before = sale.amount_tiers.clone();

    let result = sale.set_tiers(TierKind::Amount, &[5, 110, 10, 120, 0, 100]);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InvalidConfiguration));
    assert_eq!(sale.amount_tiers, before);
}

#[test]
fn test_set_tiers_replaces_only_requested_kind() {
    let mut sale = make_sale();
    let time_before = sale.time_tiers.clone();

    sale.set_tiers(TierKind::Amount, &[20, 150, 0, 100]).unwrap();

    assert_eq!(sale.amount_tiers.to_flat(), vec![20, 150, 0, 100]);
    assert_eq!(sale.time_tiers, time_before);
}

#[test]
fn test_set_bonuses_is_atomic() {
    let mut sale = make_sale();
    let time_before = sale.time_tiers.clone();
    let amount_before = sale.amount_tiers.clone();

    // Valid time table, invalid amount table: neither is applied
    let new_time = vec![at(WEEK), 110, at(2 * WEEK), 105, 0, 100];
    let result = sale.set_bonuses(&new_time, &[10, 110, 5]);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InvalidConfiguration));

    assert_eq!(sale.time_tiers, time_before);
    assert_eq!(sale.amount_tiers, amount_before);
}

#[test]
fn test_new_bonus_settings_apply_to_next_purchase() {
    let mut sale = make_sale();
    sale.set_bonuses(
        &[at(WEEK), 110, at(2 * WEEK), 105, 0, 100],
        &[10, 110, 5, 105, 0, 100],
    )
    .unwrap();

    // 5 x 200 x 110 x 105 / 100 / 100
    let quote = sale.quote_purchase(OPENING, 5, u64::MAX).unwrap();
    assert_eq!(quote.tokens, 1_155);
}

// =========================================================================
// BONUS COMPOSITION TESTS
// =========================================================================

#[test]
fn test_first_week_and_amount_bonus_compose() {
    let sale = make_sale();
    let bonus = sale.bonus_for(OPENING, 5);
    assert_eq!(
        bonus,
        BonusMultiplier {
            time_percent: 120,
            amount_percent: 110,
        }
    );
    assert_eq!(bonus.combined_percent().unwrap(), 132);

    let quote = sale.quote_purchase(OPENING, 5, u64::MAX).unwrap();
    assert_eq!(quote.tokens, 1_320);
}

#[test]
fn test_amount_bonus_without_time_bonus() {
    let sale = make_sale();
    let now = CLOSING - 1;

    let quote = sale.quote_purchase(now, 15, u64::MAX).unwrap();
    assert_eq!(quote.bonus.time_percent, 100);
    assert_eq!(quote.bonus.amount_percent, 120);
    assert_eq!(quote.tokens, 3_600);
}

#[test]
fn test_second_week_time_bonus() {
    let sale = make_sale();
    let quote = sale.quote_purchase(OPENING + WEEK + 1, 1, u64::MAX).unwrap();
    assert_eq!(quote.bonus.time_percent, 110);
    assert_eq!(quote.tokens, 220);
}

#[test]
fn test_no_bonus_purchase() {
    let sale = make_sale();
    let quote = sale.quote_purchase(CLOSING - 1, 4, u64::MAX).unwrap();
    assert_eq!(quote.bonus, BonusMultiplier::NONE);
    assert_eq!(quote.tokens, 800);
}

#[test]
fn test_deployment_schedule() {
    let mut sale = make_sale();
    sale.set_bonuses(
        &[
            at(45 * DAY), 130,
            at(65 * DAY), 125,
            at(85 * DAY), 120,
            at(100 * DAY), 115,
            at(115 * DAY), 110,
            at(130 * DAY), 105,
            0, 100,
        ],
        &[50_000, 120, 25_000, 115, 500, 110, 0, 100],
    )
    .unwrap();

    // 1_000 x 200 x 130 x 110 / 100 / 100
    assert_eq!(sale.preview_tokens(OPENING, 1_000).unwrap(), 286_000);
    // Day 70: 120% time tier, 25k contribution: 115%
    assert_eq!(
        sale.bonus_for(OPENING + 70 * DAY, 25_000),
        BonusMultiplier {
            time_percent: 120,
            amount_percent: 115,
        }
    );
}

#[test]
fn test_preview_ignores_window_and_supply() {
    let sale = make_sale();
    assert_eq!(sale.preview_tokens(OPENING - WEEK, 5).unwrap(), 1_320);
    assert_eq!(sale.preview_tokens(CLOSING + WEEK, 5).unwrap(), 1_100);
    assert_eq!(sale.preview_tokens(OPENING, 0).unwrap(), 0);
}

// =========================================================================
// PURCHASE VALIDATION TESTS
// =========================================================================

#[test]
fn test_purchase_rejected_outside_window() {
    let sale = make_sale();

    for now in [OPENING - 1, CLOSING, CLOSING + 1] {
        let result = sale.quote_purchase(now, 1, u64::MAX);
        assert_eq!(result.unwrap_err(), sale_error(SaleError::SaleNotActive));
    }
}

#[test]
fn test_zero_contribution_rejected() {
    let sale = make_sale();
    let result = sale.quote_purchase(OPENING, 0, u64::MAX);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::ZeroContribution));
}

#[test]
fn test_window_checked_before_contribution() {
    let sale = make_sale();
    let result = sale.quote_purchase(CLOSING, 0, u64::MAX);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::SaleNotActive));
}

#[test]
fn test_supply_exhaustion() {
    let sale = make_sale();

    let result = sale.quote_purchase(OPENING, 5, 1_319);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InsufficientSaleSupply));

    // Exact balance is enough
    let quote = sale.quote_purchase(OPENING, 5, 1_320).unwrap();
    assert_eq!(quote.tokens, 1_320);
}

#[test]
fn test_failed_quote_leaves_state_untouched() {
    let mut sale = make_sale();
    let mut supply = 1_500;
    simulate_purchase(&mut sale, OPENING, 1, &mut supply);
    assert_eq!(supply, 1_260);

    let sold = sale.total_sold;
    let raised = sale.total_raised;
    let count = sale.purchase_count;

    // 5 units cost 1_320, only 1_260 left
    let result = sale.quote_purchase(OPENING, 5, supply);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InsufficientSaleSupply));

    assert_eq!(sale.total_sold, sold);
    assert_eq!(sale.total_raised, raised);
    assert_eq!(sale.purchase_count, count);
    assert_eq!(supply, 1_260);
}

#[test]
fn test_reclaimed_sale_reports_supply_not_window() {
    let sale = make_sale();
    // After reclaim the vault is empty but the window is still open
    let result = sale.quote_purchase(OPENING + WEEK, 1, 0);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::InsufficientSaleSupply));
}

// =========================================================================
// TOTALS
// =========================================================================

#[test]
fn test_record_purchase_accumulates() {
    let mut sale = make_sale();
    let mut supply = 1_000_000;

    let a = simulate_purchase(&mut sale, OPENING, 5, &mut supply);
    let b = simulate_purchase(&mut sale, CLOSING - 1, 15, &mut supply);

    assert_eq!(a, 1_320);
    assert_eq!(b, 3_600);
    assert_eq!(sale.total_sold, 4_920);
    assert_eq!(sale.total_raised, 20);
    assert_eq!(sale.purchase_count, 2);
    assert_eq!(supply, 1_000_000 - 4_920);
}

#[test]
fn test_record_purchase_overflow() {
    let mut sale = make_sale();
    sale.total_sold = u64::MAX;
    let quote = sale.quote_purchase(OPENING, 1, u64::MAX).unwrap();
    let result = sale.record_purchase(&quote);
    assert_eq!(result.unwrap_err(), sale_error(SaleError::MathOverflow));
}

// =========================================================================
// ACCESS CONTROL
// =========================================================================

#[test]
fn test_only_admin_passes_gate() {
    let sale = make_sale();
    assert!(sale.is_admin(&sale.admin));
    assert!(!sale.is_admin(&Pubkey::new_unique()));
    assert!(!sale.is_admin(&sale.beneficiary));
}
