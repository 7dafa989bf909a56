//! Money calculation utilities using rust_decimal for precision
//!
//! All price arithmetic is done with `Decimal` internally, then converted
//! back to `f64` for storage/serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Fixed markup multiplier converting ingredient cost to suggested sale
/// price. Policy constant, not user-configurable.
pub const MARKUP_MULTIPLIER: f64 = 2.2;

/// Suggested-price rounding step ($0.05)
const PRICE_STEP_CENTS: i64 = 20; // 1 / 0.05

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Suggested sale price for a given ingredient cost: markup applied, then
/// rounded **up** to the nearest $0.05. Never rounds below the markup floor.
pub fn suggested_price(cost: f64) -> f64 {
    let step = Decimal::from(PRICE_STEP_CENTS);
    let raw = to_decimal(cost) * to_decimal(MARKUP_MULTIPLIER);
    to_f64((raw * step).ceil() / step)
}

/// Round a price to the nearest multiple of `step` (half-up).
pub fn round_to_nearest(price: Decimal, step: f64) -> Decimal {
    let step = to_decimal(step);
    if step.is_zero() {
        return price;
    }
    (price / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_price_rounds_up_to_nickel() {
        // cost 2.17 -> raw 4.774 -> 4.80
        assert_eq!(suggested_price(2.17), 4.80);
        // exact multiples stay put: 1.00 -> 2.20
        assert_eq!(suggested_price(1.00), 2.20);
        assert_eq!(suggested_price(0.0), 0.0);
    }

    #[test]
    fn suggested_price_never_below_markup_floor() {
        for cost in [0.01, 0.33, 1.99, 2.17, 7.77] {
            let price = suggested_price(cost);
            assert!(price >= cost * MARKUP_MULTIPLIER - 1e-9);
            // always a multiple of 0.05
            let cents = (price * 100.0).round() as i64;
            assert_eq!(cents % 5, 0, "price {price} not a $0.05 multiple");
        }
    }

    #[test]
    fn round_to_nearest_half_up() {
        assert_eq!(to_f64(round_to_nearest(to_decimal(3.32), 0.05)), 3.30);
        assert_eq!(to_f64(round_to_nearest(to_decimal(3.33), 0.05)), 3.35);
        assert_eq!(to_f64(round_to_nearest(to_decimal(4.40), 0.05)), 4.40);
    }
}
