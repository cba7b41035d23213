//! Timestamp parsing and weekday derivation.

use chrono::{Datelike, NaiveDateTime};
use tracing::warn;

use crate::error::{Result, StatsError};
use crate::models::{DayLabel, DerivedRecord, Record};

/// The only accepted timestamp layout (24-hour clock, minute precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a `YYYY-MM-DD HH:MM` string.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| StatsError::TimestampParse(format!("'{}': {}", s, e)))
}

/// Map a timestamp string to its weekday label.
///
/// Never fails: a string that does not parse is reported with a warning and
/// yields [`DayLabel::Unknown`].
pub fn weekday_label(s: &str) -> DayLabel {
    classify(s).1
}

fn classify(s: &str) -> (Option<NaiveDateTime>, DayLabel) {
    match parse_timestamp(s) {
        Ok(ts) => (Some(ts), DayLabel::from(ts.weekday())),
        Err(e) => {
            warn!("Could not derive weekday: {}", e);
            (None, DayLabel::Unknown)
        }
    }
}

/// ISO-8601 `(year, week)` pair for a timestamp.
pub fn iso_week(ts: NaiveDateTime) -> (i32, u32) {
    let week = ts.iso_week();
    (week.year(), week.week())
}

/// Attach the parsed timestamp and weekday to every record.
///
/// Each timestamp is parsed once; unparseable ones are warned about and kept
/// with [`DayLabel::Unknown`].
pub fn derive_records(records: &[Record]) -> Vec<DerivedRecord> {
    records
        .iter()
        .map(|record| {
            let (parsed, weekday) = classify(&record.timestamp);
            DerivedRecord {
                record: record.clone(),
                parsed,
                weekday,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_label_monday() {
        assert_eq!(weekday_label("2025-01-06 10:00"), DayLabel::Monday);
        assert_eq!(weekday_label("2025-01-06 10:00").name(), "Lunes");
    }

    #[test]
    fn test_weekday_label_full_week() {
        let labels: Vec<DayLabel> = (6..=12)
            .map(|d| weekday_label(&format!("2025-01-{:02} 08:30", d)))
            .collect();
        assert_eq!(labels, DayLabel::WEEK.to_vec());
    }

    #[test]
    fn test_weekday_label_invalid_is_unknown() {
        assert_eq!(weekday_label("not-a-date"), DayLabel::Unknown);
        assert_eq!(weekday_label("not-a-date").name(), "Desconocido");
    }

    #[test]
    fn test_weekday_label_rejects_other_layouts() {
        assert_eq!(weekday_label("2025-01-06T10:00:00Z"), DayLabel::Unknown);
        assert_eq!(weekday_label("2025-01-06"), DayLabel::Unknown);
        assert_eq!(weekday_label(""), DayLabel::Unknown);
    }

    #[test]
    fn test_parse_timestamp_error_names_input() {
        let err = parse_timestamp("06/01/2025").unwrap_err();
        assert!(err.to_string().contains("06/01/2025"));
    }

    #[test]
    fn test_iso_week_year_boundary() {
        // 2024-12-30 is Monday of ISO week 1 of 2025.
        let ts = parse_timestamp("2024-12-30 09:00").unwrap();
        assert_eq!(iso_week(ts), (2025, 1));
        let ts = parse_timestamp("2025-01-05 23:59").unwrap();
        assert_eq!(iso_week(ts), (2025, 1));
        let ts = parse_timestamp("2025-01-06 00:00").unwrap();
        assert_eq!(iso_week(ts), (2025, 2));
    }

    #[test]
    fn test_derive_keeps_bad_rows() {
        let records = vec![
            Record::new("2025-01-11 10:00", "Garen"),
            Record::new("garbage", "Lux"),
        ];
        let derived = derive_records(&records);
        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].weekday, DayLabel::Saturday);
        assert!(derived[0].parsed.is_some());
        assert_eq!(derived[1].weekday, DayLabel::Unknown);
        assert!(derived[1].parsed.is_none());
        assert_eq!(derived[1].champion(), "Lux");
    }
}
