use std::fmt;
use std::hash::Hash;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Champion name reported when a filtered subset has no records at all.
pub const NO_CHAMPION: &str = "Ninguno";

/// Date key used in the daily summary for records whose timestamp did not parse.
pub const UNKNOWN_DATE: &str = "Desconocido";

/// A single training session read from the activity CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw `YYYY-MM-DD HH:MM` timestamp string, kept verbatim.
    pub timestamp: String,
    /// Champion identifier. Column selection happens in the loader.
    #[serde(rename = "campeon")]
    pub champion: String,
}

impl Record {
    pub fn new(timestamp: impl Into<String>, champion: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            champion: champion.into(),
        }
    }
}

/// Weekday label derived from a record's timestamp.
///
/// Variants are declared Monday-first so the derived `Ord` follows the ISO
/// calendar; `Unknown` sorts after Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayLabel {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    /// Timestamp could not be parsed.
    Unknown,
}

impl DayLabel {
    /// The seven calendar days, Monday first.
    pub const WEEK: [DayLabel; 7] = [
        DayLabel::Monday,
        DayLabel::Tuesday,
        DayLabel::Wednesday,
        DayLabel::Thursday,
        DayLabel::Friday,
        DayLabel::Saturday,
        DayLabel::Sunday,
    ];

    /// Human-facing label used in reports and progress output.
    pub fn name(self) -> &'static str {
        match self {
            DayLabel::Monday => "Lunes",
            DayLabel::Tuesday => "Martes",
            DayLabel::Wednesday => "Miércoles",
            DayLabel::Thursday => "Jueves",
            DayLabel::Friday => "Viernes",
            DayLabel::Saturday => "Sábado",
            DayLabel::Sunday => "Domingo",
            DayLabel::Unknown => "Desconocido",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, DayLabel::Saturday | DayLabel::Sunday)
    }
}

impl From<chrono::Weekday> for DayLabel {
    fn from(day: chrono::Weekday) -> Self {
        // num_days_from_monday() is always 0..=6.
        DayLabel::WEEK[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for DayLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A [`Record`] together with its parsed timestamp and weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRecord {
    pub record: Record,
    /// `None` exactly when `weekday` is [`DayLabel::Unknown`].
    pub parsed: Option<NaiveDateTime>,
    pub weekday: DayLabel,
}

impl DerivedRecord {
    pub fn champion(&self) -> &str {
        &self.record.champion
    }

    /// Calendar date key (`YYYY-MM-DD`), or [`UNKNOWN_DATE`] when unparsed.
    pub fn date_key(&self) -> String {
        match self.parsed {
            Some(ts) => ts.format("%Y-%m-%d").to_string(),
            None => UNKNOWN_DATE.to_string(),
        }
    }
}

/// A champion paired with a session count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionCount {
    pub champion: String,
    pub count: usize,
}

impl ChampionCount {
    pub fn new(champion: impl Into<String>, count: usize) -> Self {
        Self {
            champion: champion.into(),
            count,
        }
    }

    /// The sentinel returned when no record qualified.
    pub fn none() -> Self {
        Self::new(NO_CHAMPION, 0)
    }
}

// ── FrequencyTable ────────────────────────────────────────────────────────────

/// Key → count mapping that remembers first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Hash + Eq> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> FrequencyTable<K> {
    /// Fold `keys` into a fresh table.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        keys.into_iter().fold(Self::default(), |mut table, key| {
            *table.counts.entry(key).or_insert(0) += 1;
            table
        })
    }

    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every count; equals the number of folded keys.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Largest count, or `None` for an empty table.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// First key (in first-occurrence order) holding the maximum count.
    pub fn first_max(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, count) in self.iter() {
            // Strictly greater, so the earliest key keeps a tie.
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((key, count));
            }
        }
        best
    }

    /// Every key holding the maximum count, in first-occurrence order.
    pub fn all_max(&self) -> Vec<&K> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, count)| *count == max)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn into_inner(self) -> IndexMap<K, usize> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label_names_monday_first() {
        let names: Vec<&str> = DayLabel::WEEK.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );
        assert_eq!(DayLabel::Unknown.to_string(), "Desconocido");
    }

    #[test]
    fn test_day_label_ordering_unknown_last() {
        assert!(DayLabel::Monday < DayLabel::Sunday);
        assert!(DayLabel::Sunday < DayLabel::Unknown);
    }

    #[test]
    fn test_day_label_from_chrono() {
        assert_eq!(DayLabel::from(chrono::Weekday::Mon), DayLabel::Monday);
        assert_eq!(DayLabel::from(chrono::Weekday::Sun), DayLabel::Sunday);
    }

    #[test]
    fn test_is_weekend() {
        assert!(DayLabel::Saturday.is_weekend());
        assert!(DayLabel::Sunday.is_weekend());
        assert!(!DayLabel::Friday.is_weekend());
        assert!(!DayLabel::Unknown.is_weekend());
    }

    #[test]
    fn test_day_label_serializes_as_name() {
        let json = serde_json::to_string(&DayLabel::Wednesday).unwrap();
        assert_eq!(json, "\"Miércoles\"");
    }

    #[test]
    fn test_record_serializes_spanish_column_name() {
        let json = serde_json::to_string(&Record::new("2025-01-06 10:00", "Ahri")).unwrap();
        assert_eq!(json, r#"{"timestamp":"2025-01-06 10:00","campeon":"Ahri"}"#);
    }

    // ── FrequencyTable ────────────────────────────────────────────────────────

    #[test]
    fn test_frequency_table_total_matches_input_len() {
        let keys = ["a", "b", "a", "c", "a", "b"];
        let table = FrequencyTable::from_keys(keys);
        assert_eq!(table.total(), keys.len());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&"a"), 3);
        assert_eq!(table.get(&"z"), 0);
    }

    #[test]
    fn test_frequency_table_keeps_first_occurrence_order() {
        let table = FrequencyTable::from_keys(["z", "a", "z", "m"]);
        let keys: Vec<&&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![&"z", &"a", &"m"]);
    }

    #[test]
    fn test_first_max_prefers_earliest_key_on_tie() {
        let table = FrequencyTable::from_keys(["b", "a", "a", "b"]);
        assert_eq!(table.first_max(), Some((&"b", 2)));
    }

    #[test]
    fn test_all_max_returns_every_tied_key() {
        let table = FrequencyTable::from_keys(["x", "y", "y", "x", "w"]);
        assert_eq!(table.all_max(), vec![&"x", &"y"]);
    }

    #[test]
    fn test_empty_table() {
        let table: FrequencyTable<&str> = FrequencyTable::from_keys([]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_count(), None);
        assert_eq!(table.first_max(), None);
        assert!(table.all_max().is_empty());
    }

    #[test]
    fn test_champion_count_none_sentinel() {
        let none = ChampionCount::none();
        assert_eq!(none.champion, NO_CHAMPION);
        assert_eq!(none.count, 0);
    }

    #[test]
    fn test_date_key_unknown_when_unparsed() {
        let derived = DerivedRecord {
            record: Record::new("bogus", "Ahri"),
            parsed: None,
            weekday: DayLabel::Unknown,
        };
        assert_eq!(derived.date_key(), UNKNOWN_DATE);
    }
}
