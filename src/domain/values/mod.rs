pub mod calibration;
pub mod category;
pub mod format;
pub mod metrics;
pub mod scores;
