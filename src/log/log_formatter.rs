use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::log::log_level::LogLevel;

/// Transforms a message before a sink writes it.
///
/// Formatters are attached to a routing entry and handed to its sinks untouched;
/// the logger itself never applies them.
pub trait LogFormatter: Send + Sync {
    fn format(&self, message: &str, level: LogLevel) -> String;
}

/// Runs `message` through the chain, first formatter first.
#[must_use]
pub fn apply_formatters(
    message: &str,
    level: LogLevel,
    formatters: &[Arc<dyn LogFormatter>],
) -> String {
    formatters
        .iter()
        .fold(message.to_owned(), |acc, f| f.format(&acc, level))
}

/// Prefixes the message with the level name: `[Warn] disk almost full`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPrefixFormatter;

impl LogFormatter for LevelPrefixFormatter {
    fn format(&self, message: &str, level: LogLevel) -> String {
        format!("[{level}] {message}")
    }
}

/// Prefixes the message with the current UTC wall-clock time.
///
/// Output: `2025-11-02 02:30:45 message`. A clock set before 1970 reads as the epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampFormatter;

impl LogFormatter for TimestampFormatter {
    fn format(&self, message: &str, _level: LogLevel) -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        format!("{} {message}", timestamp_for_secs(secs))
    }
}

const SECS_PER_DAY: u64 = 86_400;

fn timestamp_for_secs(secs: u64) -> String {
    let time_of_day = secs % SECS_PER_DAY;
    let (year, month, day) = civil_date(secs / SECS_PER_DAY);
    format!(
        "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
        time_of_day / 3_600,
        time_of_day / 60 % 60,
        time_of_day % 60
    )
}

/// Gregorian `(year, month, day)` for a count of days since 1970-01-01.
///
/// Works in 400-year eras of 146 097 days counted from 0000-03-01, so leap days fall
/// at the end of each shifted year. `u64::MAX / 86_400` days still fits in `u64`.
fn civil_date(days_since_epoch: u64) -> (u64, u64, u64) {
    const DAYS_PER_ERA: u64 = 146_097;
    const EPOCH_SHIFT: u64 = 719_468;

    let days = days_since_epoch + EPOCH_SHIFT;
    let era = days / DAYS_PER_ERA;
    let day_of_era = days % DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153; // 0 = March
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let (month, year_carry) = if shifted_month < 10 {
        (shifted_month + 3, 0)
    } else {
        (shifted_month - 9, 1)
    };
    (era * 400 + year_of_era + year_carry, month, day)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    struct Upper;

    impl LogFormatter for Upper {
        fn format(&self, message: &str, _level: LogLevel) -> String {
            message.to_uppercase()
        }
    }

    #[test]
    fn chain_runs_in_order() {
        let chain: Vec<Arc<dyn LogFormatter>> =
            vec![Arc::new(Upper), Arc::new(LevelPrefixFormatter)];
        assert_eq!(
            apply_formatters("disk full", LogLevel::ERROR, &chain),
            "[Error] DISK FULL"
        );

        let reversed: Vec<Arc<dyn LogFormatter>> =
            vec![Arc::new(LevelPrefixFormatter), Arc::new(Upper)];
        assert_eq!(
            apply_formatters("disk full", LogLevel::ERROR, &reversed),
            "[ERROR] DISK FULL"
        );
    }

    #[test]
    fn empty_chain_is_identity() {
        assert_eq!(apply_formatters("same", LogLevel::INFO, &[]), "same");
    }

    #[test]
    fn unix_epoch_and_known_dates() {
        assert_eq!(timestamp_for_secs(0), "1970-01-01 00:00:00");
        assert_eq!(timestamp_for_secs(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(timestamp_for_secs(1_762_050_645), "2025-11-02 02:30:45");
        assert_eq!(timestamp_for_secs(4_107_542_399), "2100-02-28 23:59:59");
        assert_eq!(timestamp_for_secs(4_107_542_400), "2100-03-01 00:00:00");
    }

    #[test]
    fn civil_date_handles_era_boundaries() {
        assert_eq!(civil_date(0), (1970, 1, 1));
        assert_eq!(civil_date(10_956), (1999, 12, 31));
        assert_eq!(civil_date(10_957), (2000, 1, 1));
        let (_, month, day) = civil_date(u64::MAX / SECS_PER_DAY);
        assert!((1..=12).contains(&month) && (1..=31).contains(&day));
    }

    #[test]
    fn timestamp_formatter_keeps_message_suffix() {
        let out = TimestampFormatter.format("boot", LogLevel::EVENT);
        assert!(out.ends_with(" boot"));
        assert_eq!(out.len(), "YYYY-MM-DD HH:MM:SS boot".len());
    }
}
