//! Calibration constants for the user-activity heuristics.
//!
//! None of these are measured. They are fixed model parameters that turn
//! 24h trading volume into a rough count of daily active users, and they
//! should be read as knobs, not facts about any chain.

/// Average transaction size, in tokens, assumed by the revenue model.
pub const REVENUE_TOKENS_PER_TX: f64 = 5.0;

/// Transactions per active user per day, assumed by the revenue model.
pub const REVENUE_TX_PER_USER: f64 = 3.0;

/// Protocol fee captured per unit of volume (0.3%).
pub const FEE_RATE: f64 = 0.003;

/// Average transaction size, in tokens, assumed by the market-cap/DAU model.
pub const DAU_TOKENS_PER_TX: f64 = 10.0;

/// Transactions per active user per day, assumed by the market-cap/DAU model.
pub const DAU_TX_PER_USER: f64 = 5.0;

/// Floor for the revenue model's DAU estimate.
pub const MIN_ESTIMATED_DAU: f64 = 1.0;
