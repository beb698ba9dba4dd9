//! Utility functions and helpers

use crate::core::constants::BLOCKCHAIN_START_TS;
use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;

/// Number of planck per whole coin
const PLANCK_PER_COIN: f64 = 100_000_000.0;

/// Initialize logging based on configuration
pub fn init_logging(level: &str, format: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
    }
}

/// Convert a coin amount to planck
pub fn burst_to_planck(amount: f64) -> i64 {
    (amount * PLANCK_PER_COIN) as i64
}

/// Convert a planck amount to coins
pub fn planck_to_burst(amount: i64) -> f64 {
    amount as f64 / PLANCK_PER_COIN
}

/// Seconds elapsed between the chain's first block and `date`
///
/// Dates before the chain start clamp to 0.
pub fn timestamp_since_genesis(date: DateTime<Utc>) -> i64 {
    let ts = date.timestamp() - BLOCKCHAIN_START_TS;
    if ts < 0 {
        0
    } else {
        ts
    }
}

/// Seconds elapsed between the chain's first block and now
pub fn current_timestamp_since_genesis() -> i64 {
    timestamp_since_genesis(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_burst_to_planck() {
        assert_eq!(burst_to_planck(5000.0), 0x746a528800);
        assert_eq!(burst_to_planck(1337.0), 0x1f21241900);
    }

    #[test]
    fn test_planck_to_burst() {
        assert_eq!(planck_to_burst(5000), 5e-05);
        assert_eq!(planck_to_burst(1337), 1.337e-05);
    }

    #[test]
    fn test_timestamp_since_genesis() {
        let before_genesis = Utc.with_ymd_and_hms(1995, 8, 2, 2, 2, 0).unwrap();
        assert_eq!(timestamp_since_genesis(before_genesis), 0);

        let after_genesis = Utc.with_ymd_and_hms(2016, 8, 2, 2, 2, 0).unwrap();
        assert_eq!(timestamp_since_genesis(after_genesis), 62_380_920);
    }
}
