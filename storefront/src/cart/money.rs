//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are computed with `Decimal` internally and converted back to
//! `f64` (rounded to 2 decimal places) at the edges. Prices here are flat:
//! the only arithmetic in the storefront is unit price × quantity.

use rust_decimal::prelude::*;
use shared::CartLine;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: unit price × quantity
pub fn line_total(line: &CartLine) -> f64 {
    let total = to_decimal(line.unit_price) * Decimal::from(line.quantity);
    to_f64(total)
}

/// Cart total: Σ unit price × quantity, recomputed fresh on every call
pub fn cart_total(lines: &[CartLine]) -> f64 {
    let total: Decimal = lines
        .iter()
        .map(|line| to_decimal(line.unit_price) * Decimal::from(line.quantity))
        .sum();
    to_f64(total)
}

/// Badge count: Σ quantity over all lines, recomputed on demand
pub fn item_count(lines: &[CartLine]) -> i32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{LocalizedText, SelectedOptions};

    fn line(id: &str, price: f64, quantity: i32) -> CartLine {
        let mut line = CartLine::new(
            id,
            LocalizedText::new(id, id),
            price,
            SelectedOptions::new(),
        );
        line.quantity = quantity;
        line
    }

    #[test]
    fn decimal_addition_avoids_float_drift() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn accumulation_stays_exact() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(line_total(&line("arabic-breakfast", 26.0, 3)), 78.0);
        assert_eq!(line_total(&line("orange-juice", 1.0, 1)), 1.0);
    }

    #[test]
    fn cart_total_sums_all_lines() {
        let lines = vec![
            line("arabic-breakfast", 26.0, 2),
            line("kitkat", 2.0, 1),
            line("orange-juice", 1.0, 4),
        ];
        assert_eq!(cart_total(&lines), 58.0);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn item_count_sums_quantities_not_lines() {
        let lines = vec![line("kitkat", 2.0, 2), line("twix", 2.0, 3)];
        assert_eq!(item_count(&lines), 5);
    }

    #[test]
    fn rounding_is_half_up() {
        // 0.005 rounds up to 0.01; 0.004 rounds down to 0.00
        assert_eq!(to_f64(Decimal::new(5, 3)), 0.01);
        assert_eq!(to_f64(Decimal::new(4, 3)), 0.0);
    }
}
