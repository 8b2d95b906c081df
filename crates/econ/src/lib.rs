//! Present-value arithmetic for the Hygeia microsimulation.
//!
//! Payments and health utilities accrued in a future discount period are
//! converted to their value at time zero with a fixed periodic discount
//! rate. The cost/utility accumulator in `hygeia-model` calls these with a
//! half-year rate and odd period indices to value mid-interval events.

/// Discount factor for a single period index: `1 / (1 + rate)^period`.
///
/// A zero rate yields a factor of 1 for every period.
pub fn discount_factor(discount_rate: f64, discount_period: i32) -> f64 {
    1.0 / (1.0 + discount_rate).powi(discount_period)
}

/// Present value of a single payment made in the given discount period.
///
/// Computes `payment / (1 + discount_rate)^discount_period`. The rate is a
/// per-period rate; callers working in half-year periods pass the annual
/// rate divided by two. Negative rates and payments are propagated
/// faithfully, not rejected.
pub fn pv_single_payment(payment: f64, discount_rate: f64, discount_period: i32) -> f64 {
    payment * discount_factor(discount_rate, discount_period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_rate_is_identity() {
        assert_relative_eq!(pv_single_payment(250.0, 0.0, 7), 250.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_period_is_identity() {
        assert_relative_eq!(pv_single_payment(250.0, 0.05, 0), 250.0, epsilon = 1e-12);
    }

    #[test]
    fn known_value() {
        // 100 / 1.03^2 = 94.2595909...
        assert_relative_eq!(
            pv_single_payment(100.0, 0.03, 2),
            94.25959100,
            epsilon = 1e-6
        );
    }

    #[test]
    fn half_year_periods() {
        // Annual rate 3% -> half-year rate 1.5%, period 2k+1 with k=3.
        let pv = pv_single_payment(1.0, 0.015, 7);
        assert_relative_eq!(pv, 1.0 / 1.015_f64.powi(7), epsilon = 1e-12);
    }

    #[test]
    fn later_periods_are_worth_less() {
        let mut prev = f64::INFINITY;
        for period in 1..20 {
            let pv = pv_single_payment(100.0, 0.03, period);
            assert!(pv < prev, "period {period}: {pv} should be < {prev}");
            prev = pv;
        }
    }

    #[test]
    fn zero_payment() {
        assert_eq!(pv_single_payment(0.0, 0.05, 3), 0.0);
    }

    #[test]
    fn negative_payment_propagates() {
        let pv = pv_single_payment(-100.0, 0.03, 1);
        assert!(pv < 0.0);
        assert_relative_eq!(pv, -100.0 / 1.03, epsilon = 1e-12);
    }

    #[test]
    fn discount_factor_matches_pv() {
        let rate = 0.015;
        for period in 0..10 {
            assert_relative_eq!(
                pv_single_payment(42.0, rate, period),
                42.0 * discount_factor(rate, period),
                epsilon = 1e-12
            );
        }
    }
}
