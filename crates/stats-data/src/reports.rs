//! Shaping and serialisation of the two output reports.
//!
//! * the per-champion frequency table, written as CSV;
//! * the per-day summary, written as pretty-printed JSON.

use indexmap::IndexMap;
use serde::Serialize;
use stats_core::models::{ChampionCount, DerivedRecord};
use stats_core::{Result, StatsError};

use crate::aggregator::champion_frequencies;

/// File name of the per-champion CSV report.
pub const CHAMPION_REPORT_FILE: &str = "entrenamientos_por_campeon.csv";

/// File name of the per-day JSON summary.
pub const DAILY_SUMMARY_FILE: &str = "resumen_entrenamientos.json";

/// Header row of the per-champion CSV report.
pub const CHAMPION_REPORT_HEADER: [&str; 2] = ["campeon", "cantidad_entrenamientos"];

// ── Daily summary types ───────────────────────────────────────────────────────

/// Sessions recorded on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    /// Champion → sessions on this date, first-occurrence order.
    pub campeones: IndexMap<String, usize>,
    /// Sum of `campeones`; equals the number of records on this date.
    pub total_entrenamientos_dia: usize,
}

/// The whole per-day summary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub total_registros: usize,
    /// Keyed by `YYYY-MM-DD` in order of first appearance, not chronological.
    pub dias: IndexMap<String, DaySummary>,
}

// ── Shapers ───────────────────────────────────────────────────────────────────

/// Champion session totals sorted by count descending.
///
/// The sort is stable, so champions with equal counts keep the order in which
/// they first appear in the input.
pub fn champion_report(records: &[DerivedRecord]) -> Vec<ChampionCount> {
    let mut rows: Vec<ChampionCount> = champion_frequencies(records)
        .into_inner()
        .into_iter()
        .map(|(champion, count)| ChampionCount { champion, count })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Group records by calendar date and count champions within each date.
///
/// Records whose timestamp did not parse are collected under
/// [`UNKNOWN_DATE`](stats_core::models::UNKNOWN_DATE).
pub fn daily_summary(records: &[DerivedRecord]) -> DailySummary {
    let mut dias: IndexMap<String, DaySummary> = IndexMap::new();

    for record in records {
        let day = dias.entry(record.date_key()).or_insert_with(|| DaySummary {
            campeones: IndexMap::new(),
            total_entrenamientos_dia: 0,
        });
        *day.campeones.entry(record.champion().to_string()).or_insert(0) += 1;
    }

    for day in dias.values_mut() {
        day.total_entrenamientos_dia = day.campeones.values().sum();
    }

    DailySummary {
        total_registros: records.len(),
        dias,
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the champion report as CSV with CRLF line endings.
pub fn render_champion_csv(rows: &[ChampionCount]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CHAMPION_REPORT_HEADER)?;
    for row in rows {
        writer.write_record([row.champion.as_str(), row.count.to_string().as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| StatsError::Io(e.into_error()))
}

/// Render the daily summary as two-space indented UTF-8 JSON.
pub fn render_daily_json(summary: &DailySummary) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(summary)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
