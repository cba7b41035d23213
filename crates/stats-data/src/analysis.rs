//! End-to-end analysis pipeline.
//!
//! Loads the activity log, derives weekdays, computes every statistic and
//! writes both reports through a [`ReportStore`], returning a
//! [`RunSummary`] that carries everything the user is told about the run.

use std::path::{Path, PathBuf};

use stats_core::calendar::derive_records;
use stats_core::formatting::{count_with_unit, format_average, join_labels, separator};
use stats_core::models::{ChampionCount, DerivedRecord};
use stats_core::Result;
use tracing::{debug, info, warn};

use crate::aggregator::{
    busiest_weekdays, date_span_days, distinct_weeks, top_champion, top_weekend_champion,
    weekly_averages, BusiestWeekdays, WeeklyAverages,
};
use crate::reader::open_records;
use crate::reports::{
    champion_report, daily_summary, render_champion_csv, render_daily_json, CHAMPION_REPORT_FILE,
    DAILY_SUMMARY_FILE,
};
use crate::storage::ReportStore;

// ── Public types ──────────────────────────────────────────────────────────────

/// Every statistic computed over one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub busiest: BusiestWeekdays,
    pub span_days: i64,
    pub top_champion: ChampionCount,
    pub weekly_averages: WeeklyAverages,
    /// Number of distinct ISO weeks used as the averaging divisor.
    pub weeks: usize,
    pub top_weekend_champion: ChampionCount,
}

/// Facts reported to the user about a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub records_loaded: usize,
    pub stats: Statistics,
    pub champion_report_path: PathBuf,
    pub daily_summary_path: PathBuf,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Reports were generated.
    Completed(RunSummary),
    /// The input yielded no records; nothing was computed or written.
    /// `missing` is set when the file itself was absent.
    NoData { input: PathBuf, missing: bool },
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Compute every statistic over already-derived records.
///
/// Fails with [`EmptyDataset`](stats_core::StatsError::EmptyDataset) when
/// `records` is empty.
pub fn compute_statistics(records: &[DerivedRecord]) -> Result<Statistics> {
    let busiest = busiest_weekdays(records)?;
    info!(
        "Busiest weekday(s): {} ({} sessions)",
        join_labels(&busiest.days),
        busiest.count
    );

    let span_days = date_span_days(records);
    info!("Days between first and last session: {}", span_days);

    let top = top_champion(records)?;
    info!("Top champion: {} ({} sessions)", top.champion, top.count);

    let weeks = distinct_weeks(records);
    let averages = weekly_averages(records);
    debug!("Weekly averages over {} distinct weeks: {:?}", weeks, averages);

    let weekend = top_weekend_champion(records);
    info!(
        "Top weekend champion: {} ({} sessions)",
        weekend.champion, weekend.count
    );

    Ok(Statistics {
        busiest,
        span_days,
        top_champion: top,
        weekly_averages: averages,
        weeks,
        top_weekend_champion: weekend,
    })
}

/// Run the full pipeline over the CSV at `input`.
///
/// 1. Load records. A missing file or an empty result halts the run with
///    [`RunOutcome::NoData`] before anything is computed or written.
/// 2. Derive weekdays; bad timestamps are warned about and kept.
/// 3. Compute the statistics.
/// 4. Shape both reports and write them to `store`.
pub fn run_analysis(input: &Path, store: &dyn ReportStore) -> Result<RunOutcome> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let loaded = open_records(input)?;
    let missing = loaded.is_none();
    let records = loaded.unwrap_or_default();
    if records.is_empty() {
        warn!("No records loaded from {}; stopping", input.display());
        return Ok(RunOutcome::NoData {
            input: input.to_path_buf(),
            missing,
        });
    }
    info!("Loaded {} records from {}", records.len(), input.display());

    // ── Step 2: Derive ────────────────────────────────────────────────────────
    let derived = derive_records(&records);

    // ── Step 3: Statistics ────────────────────────────────────────────────────
    let stats = compute_statistics(&derived)?;

    // ── Step 4: Reports ───────────────────────────────────────────────────────
    store.ensure_dir()?;

    let champion_csv = render_champion_csv(&champion_report(&derived))?;
    let champion_report_path = store.write(CHAMPION_REPORT_FILE, &champion_csv)?;
    info!("Wrote {}", champion_report_path.display());

    let summary_json = render_daily_json(&daily_summary(&derived))?;
    let daily_summary_path = store.write(DAILY_SUMMARY_FILE, &summary_json)?;
    info!("Wrote {}", daily_summary_path.display());

    Ok(RunOutcome::Completed(RunSummary {
        input: input.to_path_buf(),
        records_loaded: records.len(),
        stats,
        champion_report_path,
        daily_summary_path,
    }))
}

// ── Progress output ───────────────────────────────────────────────────────────

impl RunSummary {
    /// Progress messages for a completed run, one per line.
    pub fn lines(&self) -> Vec<String> {
        let s = &self.stats;
        let mut out = vec![
            format!(
                "Se leyeron {} registros de {}",
                self.records_loaded,
                self.input.display()
            ),
            String::new(),
            separator(),
            format!(
                "Día(s) con más sesiones: {} ({})",
                join_labels(&s.busiest.days),
                count_with_unit(s.busiest.count, "sesión", "sesiones")
            ),
            format!(
                "Días entre primer y último entrenamiento: {}",
                count_with_unit(s.span_days.unsigned_abs() as usize, "día", "días")
            ),
            format!(
                "Campeón que más entrenó: {} ({})",
                s.top_champion.champion,
                count_with_unit(s.top_champion.count, "entrenamiento", "entrenamientos")
            ),
            String::new(),
            format!(
                "Promedio de entrenamientos por día de semana ({}):",
                count_with_unit(s.weeks, "semana", "semanas")
            ),
        ];

        out.extend(
            s.weekly_averages
                .iter()
                .map(|(day, avg)| format!("   - {}: {} entrenamientos/semana", day, format_average(*avg))),
        );

        out.push(format!(
            "Campeón que más entrena fines de semana: {} ({})",
            s.top_weekend_champion.champion,
            count_with_unit(
                s.top_weekend_champion.count,
                "entrenamiento",
                "entrenamientos"
            )
        ));
        out.push(String::new());
        out.push(separator());
        out.push(format!(
            "Archivo CSV creado: {}",
            self.champion_report_path.display()
        ));
        out.push(format!(
            "Archivo JSON creado: {}",
            self.daily_summary_path.display()
        ));
        out.push(String::new());
        out.push(separator());
        out
    }
}

impl RunOutcome {
    /// Progress messages for any outcome.
    pub fn lines(&self) -> Vec<String> {
        match self {
            RunOutcome::Completed(summary) => summary.lines(),
            RunOutcome::NoData { input, missing } => {
                let reason = if *missing {
                    format!("Error: No se encontró el archivo {}", input.display())
                } else {
                    format!("No se encontraron registros en {}", input.display())
                };
                vec![
                    reason,
                    "No se pudieron cargar los datos. Terminando ejecución.".to_string(),
                ]
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
