//! Display rounding.
//!
//! Calculations keep full precision; values are rounded here only when a
//! response is being prepared for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value half away from zero to `decimal_places` for display.
///
/// The result always carries exactly `decimal_places` digits after the
/// point, so `7000` becomes `7000.00` at two places.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::round_for_display;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let share = Decimal::from_str("33.3333333").unwrap();
/// assert_eq!(round_for_display(share, 1), Decimal::from_str("33.3").unwrap());
///
/// let amount = Decimal::from_str("1234.565").unwrap();
/// assert_eq!(round_for_display(amount, 2), Decimal::from_str("1234.57").unwrap());
/// ```
pub fn round_for_display(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_for_display(dec("0.125"), 2), dec("0.13"));
        assert_eq!(round_for_display(dec("-0.125"), 2), dec("-0.13"));
        assert_eq!(round_for_display(dec("66.65"), 1), dec("66.7"));
    }

    #[test]
    fn test_fewer_places_than_requested_is_padded() {
        assert_eq!(round_for_display(dec("7000"), 2).to_string(), "7000.00");
        assert_eq!(round_for_display(dec("12.5"), 2).to_string(), "12.50");
        assert_eq!(round_for_display(dec("90"), 1).to_string(), "90.0");
    }

    #[test]
    fn test_zero_places() {
        assert_eq!(round_for_display(dec("89.5"), 0), dec("90"));
    }
}
