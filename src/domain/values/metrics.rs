//! Derived per-project metrics.
//!
//! Every function here is total: a failed guard, a non-finite input or a
//! non-finite result yields `0.0`. Nothing panics and nothing returns a
//! partially computed value.

use crate::domain::values::calibration::{
    DAU_TOKENS_PER_TX, DAU_TX_PER_USER, FEE_RATE, MIN_ESTIMATED_DAU, REVENUE_TOKENS_PER_TX,
    REVENUE_TX_PER_USER,
};

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Daily turnover ratio: `volume_24h / market_cap`.
pub fn token_velocity(volume_24h: f64, market_cap: f64) -> f64 {
    if market_cap > 0.0 {
        return finite_or_zero(volume_24h / market_cap);
    }
    0.0
}

/// Estimated fee revenue per daily active user.
///
/// DAU is estimated from volume: `volume / (price * 5)` transactions,
/// three per user, floored at one user. Revenue is a 0.3% fee on volume.
pub fn revenue_per_user(market_cap: f64, volume_24h: f64, price: f64) -> f64 {
    if !(market_cap > 0.0 && volume_24h > 0.0 && price > 0.0) {
        return 0.0;
    }
    let estimated_transactions = volume_24h / (price * REVENUE_TOKENS_PER_TX);
    let estimated_dau = (estimated_transactions / REVENUE_TX_PER_USER).max(MIN_ESTIMATED_DAU);
    finite_or_zero((volume_24h * FEE_RATE) / estimated_dau)
}

/// Percentage of max supply not yet minted, used as a burn proxy.
///
/// Uncapped tokens (`max_supply == None`) and tokens with no reported
/// total supply score `0.0`. Circulating supply is accepted for symmetry
/// with the quote's supply fields but does not enter the estimate.
pub fn burn_rate_estimate(
    _circulating_supply: f64,
    total_supply: f64,
    max_supply: Option<f64>,
) -> f64 {
    let Some(max_supply) = max_supply else {
        return 0.0;
    };
    if max_supply == 0.0 || total_supply == 0.0 || !(max_supply > 0.0) {
        return 0.0;
    }
    let estimate = (max_supply - total_supply) / max_supply * 100.0;
    finite_or_zero(estimate.max(0.0))
}

/// Market capitalization backing each estimated daily active user.
pub fn mcap_dau_ratio(market_cap: f64, volume_24h: f64, price: f64) -> f64 {
    if !(price > 0.0 && volume_24h > 0.0) {
        return 0.0;
    }
    let estimated_daily_transactions = volume_24h / (price * DAU_TOKENS_PER_TX);
    let estimated_dau = estimated_daily_transactions / DAU_TX_PER_USER;
    if estimated_dau > 0.0 {
        return finite_or_zero(market_cap / estimated_dau);
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_zero_market_cap() {
        assert_eq!(token_velocity(1_000.0, 0.0), 0.0);
        assert_eq!(token_velocity(1_000.0, -5.0), 0.0);
    }

    #[test]
    fn test_velocity_ratio() {
        assert_eq!(token_velocity(5e7, 1e9), 0.05);
    }

    #[test]
    fn test_revenue_per_user_reference_value() {
        // 5e7 / (2 * 5) = 5e6 tx, / 3 = 1.667e6 users, 150k fees
        let rpu = revenue_per_user(1e9, 5e7, 2.0);
        assert!((rpu - 0.09).abs() < 1e-6, "got {rpu}");
    }

    #[test]
    fn test_revenue_per_user_dau_floor() {
        // 1 token of volume at $1 is 0.2 tx, so the DAU floor of 1 applies
        let rpu = revenue_per_user(100.0, 1.0, 1.0);
        assert!((rpu - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_revenue_per_user_guards() {
        assert_eq!(revenue_per_user(0.0, 5e7, 2.0), 0.0);
        assert_eq!(revenue_per_user(1e9, 0.0, 2.0), 0.0);
        assert_eq!(revenue_per_user(1e9, 5e7, -2.0), 0.0);
    }

    #[test]
    fn test_burn_rate_reference_value() {
        assert_eq!(burn_rate_estimate(5e8, 8e8, Some(1e9)), 20.0);
    }

    #[test]
    fn test_burn_rate_uncapped_or_zero_max() {
        assert_eq!(burn_rate_estimate(5e8, 8e8, None), 0.0);
        assert_eq!(burn_rate_estimate(5e8, 8e8, Some(0.0)), 0.0);
        assert_eq!(burn_rate_estimate(5e8, 0.0, Some(1e9)), 0.0);
    }

    #[test]
    fn test_burn_rate_clamped_when_total_exceeds_max() {
        assert_eq!(burn_rate_estimate(0.0, 2e9, Some(1e9)), 0.0);
    }

    #[test]
    fn test_mcap_dau_ratio() {
        // 5e7 / (2 * 10) = 2.5e6 tx, / 5 = 5e5 users
        let ratio = mcap_dau_ratio(1e9, 5e7, 2.0);
        assert!((ratio - 2000.0).abs() < 1e-9);
        assert_eq!(mcap_dau_ratio(1e9, 5e7, 0.0), 0.0);
        assert_eq!(mcap_dau_ratio(1e9, 0.0, 2.0), 0.0);
    }

    #[test]
    fn test_non_finite_inputs_yield_zero() {
        assert_eq!(token_velocity(f64::INFINITY, 1.0), 0.0);
        assert_eq!(token_velocity(f64::NAN, 1.0), 0.0);
        assert_eq!(revenue_per_user(f64::NAN, 1.0, 1.0), 0.0);
        assert_eq!(burn_rate_estimate(0.0, f64::NAN, Some(1.0)), 0.0);
        assert_eq!(mcap_dau_ratio(f64::INFINITY, 1.0, 1.0), 0.0);
    }
}
