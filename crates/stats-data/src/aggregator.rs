//! Descriptive statistics over derived training records.
//!
//! Every function here is pure: it folds the record slice into a fresh
//! [`FrequencyTable`] and reads the answer off it.

use std::collections::{BTreeMap, HashSet};

use stats_core::calendar::iso_week;
use stats_core::models::{ChampionCount, DayLabel, DerivedRecord, FrequencyTable};
use stats_core::{Result, StatsError};

// ── Result types ──────────────────────────────────────────────────────────────

/// Every weekday that ties for the highest session count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusiestWeekdays {
    /// Monday-first; [`DayLabel::Unknown`] last if it ties.
    pub days: Vec<DayLabel>,
    pub count: usize,
}

/// Weekday → sessions per distinct ISO week, ordered Monday-first.
pub type WeeklyAverages = BTreeMap<DayLabel, f64>;

const SECONDS_PER_DAY: i64 = 86_400;

// ── Weekday statistics ────────────────────────────────────────────────────────

/// Count records per weekday label.
pub fn weekday_frequencies(records: &[DerivedRecord]) -> FrequencyTable<DayLabel> {
    FrequencyTable::from_keys(records.iter().map(|r| r.weekday))
}

/// Find the weekday(s) with the most sessions.
///
/// Ties are inclusive: all weekdays sharing the maximum are returned.
/// An empty input has no maximum and yields [`StatsError::EmptyDataset`].
pub fn busiest_weekdays(records: &[DerivedRecord]) -> Result<BusiestWeekdays> {
    let table = weekday_frequencies(records);
    let count = table
        .max_count()
        .ok_or(StatsError::EmptyDataset("busiest weekday"))?;

    let mut days: Vec<DayLabel> = table.all_max().into_iter().copied().collect();
    days.sort();

    Ok(BusiestWeekdays { days, count })
}

/// Number of distinct ISO `(year, week)` pairs touched by parseable timestamps.
pub fn distinct_weeks(records: &[DerivedRecord]) -> usize {
    records
        .iter()
        .filter_map(|r| r.parsed)
        .map(iso_week)
        .collect::<HashSet<_>>()
        .len()
}

/// Average sessions per week for every weekday present in the data.
///
/// The divisor is the number of distinct ISO weeks, floored at 1.
pub fn weekly_averages(records: &[DerivedRecord]) -> WeeklyAverages {
    let table = weekday_frequencies(records);
    let weeks = distinct_weeks(records).max(1) as f64;

    table
        .iter()
        .map(|(day, count)| (*day, count as f64 / weeks))
        .collect()
}

// ── Date range ────────────────────────────────────────────────────────────────

/// Whole days between the earliest and latest parseable timestamp.
///
/// Partial days are truncated. Returns 0 for an empty input.
pub fn date_span_days(records: &[DerivedRecord]) -> i64 {
    let mut stamps = records.iter().filter_map(|r| r.parsed);
    let Some(first) = stamps.next() else {
        return 0;
    };

    let (min, max) = stamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
    (max - min).num_seconds().div_euclid(SECONDS_PER_DAY)
}

// ── Champion statistics ───────────────────────────────────────────────────────

/// Count records per champion, in first-occurrence order.
pub fn champion_frequencies<'a, I>(records: I) -> FrequencyTable<String>
where
    I: IntoIterator<Item = &'a DerivedRecord>,
{
    FrequencyTable::from_keys(records.into_iter().map(|r| r.champion().to_string()))
}

/// The champion with the most sessions overall.
///
/// On a tie the champion that appears first in the input wins.
/// An empty input yields [`StatsError::EmptyDataset`].
pub fn top_champion(records: &[DerivedRecord]) -> Result<ChampionCount> {
    champion_frequencies(records)
        .first_max()
        .map(|(name, count)| ChampionCount::new(name.clone(), count))
        .ok_or(StatsError::EmptyDataset("top champion"))
}

/// The champion with the most Saturday/Sunday sessions.
///
/// Uses the same tie rule as [`top_champion`]. With no weekend sessions at
/// all this returns [`ChampionCount::none`] rather than an error.
pub fn top_weekend_champion(records: &[DerivedRecord]) -> ChampionCount {
    champion_frequencies(records.iter().filter(|r| r.weekday.is_weekend()))
        .first_max()
        .map(|(name, count)| ChampionCount::new(name.clone(), count))
        .unwrap_or_else(ChampionCount::none)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
