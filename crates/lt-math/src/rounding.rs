//! Rounding of reported prices.

use lt_core::Real;

/// Number of decimal places used when a price is reported in currency units.
pub const CURRENCY_PRECISION: i32 = 2;

/// Round a price to [`CURRENCY_PRECISION`] decimals, ties away from zero.
pub fn round_price(value: Real) -> Real {
    let mult = 10_f64.powi(CURRENCY_PRECISION);
    (value * mult).round() / mult
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_rounding_uses_two_decimals() {
        assert!((round_price(18.768669602) - 18.77).abs() < 1e-10);
        assert!((round_price(3.998206204) - 4.0).abs() < 1e-10);
        assert_eq!(round_price(0.0), 0.0);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert!((round_price(1.2345) - 1.23).abs() < 1e-10);
        assert!((round_price(1.2355) - 1.24).abs() < 1e-10);
        assert!((round_price(-1.2355) + 1.24).abs() < 1e-10);
    }
}
