use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to a whole currency unit, halves away from zero (`12.5` → `13`).
#[must_use]
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed-point display form, e.g. `"AED 180.00"`.
#[must_use]
pub fn format_money(amount: Decimal, currency_code: &str) -> String {
    let fixed = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency_code} {fixed:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_whole_half_goes_up() {
        assert_eq!(round_whole(Decimal::new(125, 1)), Decimal::from(13));
        assert_eq!(round_whole(Decimal::new(124, 1)), Decimal::from(12));
    }

    #[test]
    fn format_money_pads_two_decimals() {
        assert_eq!(format_money(Decimal::from(180), "AED"), "AED 180.00");
        assert_eq!(format_money(Decimal::new(1505, 1), "USD"), "USD 150.50");
        assert_eq!(format_money(Decimal::new(99_999, 3), "AED"), "AED 100.00");
    }
}
