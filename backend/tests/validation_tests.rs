//! Form validation tests
//!
//! Property-based and unit tests for the input boundary:
//! - malformed numeric input is rejected, never coerced to a default
//! - presence and range checks carry bilingual messages
//! - the field name survives into the error

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::validation::{
    parse_quantity, require_field, validate_price, validate_quantity, validate_stock_level,
};

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn legacy_default_of_one_is_gone() {
    // legacy clients turned "abc" into a quantity of 1
    assert!(parse_quantity("quantity", "abc").is_err());
    assert!(parse_quantity("quantity", "").is_err());
    assert!(parse_quantity("quantity", "NaN").is_err());
    assert!(parse_quantity("quantity", "1,5").is_err());
}

#[test]
fn errors_are_bilingual() {
    let err = parse_quantity("quantity", "abc").unwrap_err();
    assert!(!err.message_en.is_empty());
    assert!(!err.message_fr.is_empty());
    assert_eq!(err.field, "quantity");
}

#[test]
fn whitespace_around_numbers_is_tolerated() {
    assert_eq!(parse_quantity("quantity", " 20 "), Ok(20));
    assert_eq!(parse_quantity("quantity", "7\n"), Ok(7));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every positive integer round-trips through the parser
    #[test]
    fn positive_integers_parse(quantity in 1i32..1_000_000) {
        prop_assert_eq!(parse_quantity("quantity", &quantity.to_string()), Ok(quantity));
    }

    /// Zero and negative numbers are rejected even when well-formed
    #[test]
    fn non_positive_integers_are_rejected(quantity in -1_000_000i32..1) {
        prop_assert!(parse_quantity("quantity", &quantity.to_string()).is_err());
        prop_assert!(validate_quantity("quantity", quantity).is_err());
    }

    /// Text with any non-numeric character never parses
    #[test]
    fn alphabetic_input_never_parses(raw in "[a-zA-Z]{1,10}") {
        prop_assert!(parse_quantity("quantity", &raw).is_err());
    }

    /// Stock levels accept zero but nothing below it
    #[test]
    fn stock_levels_reject_only_negatives(level in -1_000i32..1_000) {
        prop_assert_eq!(validate_stock_level("stock", level).is_ok(), level >= 0);
    }

    /// Prices must be strictly positive
    #[test]
    fn prices_must_exceed_zero(cents in -1_000_000i64..1_000_000) {
        let price = Decimal::new(cents, 2);
        prop_assert_eq!(validate_price("price", price).is_ok(), price > Decimal::ZERO);
    }

    /// Blank strings fail the presence check, anything with ink passes
    #[test]
    fn presence_check_ignores_whitespace(padding in "[ \t]{0,5}", word in "[a-zA-Z]{1,10}") {
        prop_assert!(require_field("name", &padding).is_err());
        let padded = format!("{padding}{word}{padding}");
        prop_assert!(require_field("name", &padded).is_ok());
    }
}
