//! Cent-rounded arithmetic for order lines and totals rows.

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Quantity x price less a percentage discount.
pub fn line_total(quantity: f64, unit_price: f64, discount_percent: f64) -> f64 {
    round2(quantity * unit_price * (1.0 - discount_percent / 100.0))
}

pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    round2(values.into_iter().sum())
}

/// Compare amounts at cent precision.
pub fn eq_cents(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_with_discount() {
        assert_eq!(line_total(3.0, 10.0, 0.0), 30.0);
        assert_eq!(line_total(2.0, 19.99, 10.0), 35.98);
    }

    #[test]
    fn test_sum_rounds_to_cents() {
        assert_eq!(sum([0.1, 0.2]), 0.3);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_eq_cents() {
        assert!(eq_cents(10.001, 10.0));
        assert!(!eq_cents(10.01, 10.0));
    }
}
