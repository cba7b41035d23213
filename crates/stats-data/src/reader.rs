//! CSV loading for the training-session log.
//!
//! Reads the activity file into [`Record`]s. Only the `timestamp` and
//! `campeon` (or `champion`) columns are used; every other column is ignored.

use std::io::Read;
use std::path::Path;

use stats_core::models::Record;
use stats_core::{Result, StatsError};
use tracing::{debug, warn};

/// Column holding the `YYYY-MM-DD HH:MM` timestamp.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Accepted spellings of the champion column.
pub const CHAMPION_COLUMNS: &[&str] = &["campeon", "champion"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every record from the CSV file at `path`.
///
/// A missing file is not an error: it is reported with a warning and an
/// empty sequence is returned so the caller can halt gracefully. Any other
/// failure (unreadable file, malformed CSV, missing column) propagates.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    Ok(open_records(path)?.unwrap_or_default())
}

/// Like [`load_records`], but returns `None` when the file does not exist so
/// callers can tell an absent file from an empty one.
pub fn open_records(path: &Path) -> Result<Option<Vec<Record>>> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Input file not found: {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(StatsError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let records = read_records(std::io::BufReader::new(file))?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(Some(records))
}

/// Parse CSV content from any reader.
///
/// Rows too short to hold both columns are skipped with a warning; the rest
/// of the file is still loaded.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = Columns::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in csv_reader.records() {
        let row = row?;
        match columns.extract(&row) {
            Some(record) => records.push(record),
            None => {
                let line = row.position().map_or(0, |p| p.line());
                warn!("Skipping short CSV row at line {}: {:?}", line, row);
                skipped += 1;
            }
        }
    }

    debug!("Parsed {} CSV rows ({} skipped)", records.len(), skipped);
    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Header positions of the two columns the loader reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    timestamp: usize,
    champion: usize,
}

impl Columns {
    /// Locate the columns; `campeon` wins over `champion` when both exist.
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let timestamp = find(TIMESTAMP_COLUMN)
            .ok_or_else(|| StatsError::MissingColumn(TIMESTAMP_COLUMN.to_string()))?;
        let champion = CHAMPION_COLUMNS
            .iter()
            .find_map(|c| find(c))
            .ok_or_else(|| StatsError::MissingColumn(CHAMPION_COLUMNS.join("|")))?;

        Ok(Self {
            timestamp,
            champion,
        })
    }

    fn extract(&self, row: &csv::StringRecord) -> Option<Record> {
        Some(Record::new(row.get(self.timestamp)?, row.get(self.champion)?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    // ── load_records ──────────────────────────────────────────────────────────

    #[test]
    fn test_load_records_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "actividad.csv",
            "timestamp,campeon\n2025-01-06 10:00,Ahri\n2025-01-07 18:30,Garen\n",
        );

        let records = load_records(&path).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("2025-01-06 10:00", "Ahri"),
                Record::new("2025-01-07 18:30", "Garen"),
            ]
        );
    }

    #[test]
    fn test_load_records_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let records = load_records(&dir.path().join("nope.csv")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_records_directory_is_error() {
        // Opening a directory as a file fails on read, not with NotFound.
        let dir = TempDir::new().unwrap();
        assert!(load_records(dir.path()).is_err());
    }

    // ── read_records ──────────────────────────────────────────────────────────

    #[test]
    fn test_read_records_ignores_extra_columns() {
        let csv = "id,timestamp,duracion,campeon,notas\n\
                   1,2025-01-06 10:00,45,Lux,calentamiento\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![Record::new("2025-01-06 10:00", "Lux")]);
    }

    #[test]
    fn test_read_records_champion_alias() {
        let csv = "timestamp,champion\n2025-01-06 10:00,Jinx\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].champion, "Jinx");
    }

    #[test]
    fn test_read_records_keeps_bad_timestamps_verbatim() {
        let csv = "timestamp,campeon\nnot-a-date,Teemo\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].timestamp, "not-a-date");
    }

    #[test]
    fn test_read_records_header_only() {
        let records = read_records("timestamp,campeon\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_records_missing_timestamp_column() {
        let err = read_records("fecha,campeon\n2025-01-06 10:00,Ahri\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::MissingColumn(ref c) if c == "timestamp"));
    }

    #[test]
    fn test_read_records_missing_champion_column() {
        let err = read_records("timestamp,heroe\n2025-01-06 10:00,Ahri\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::MissingColumn(_)));
    }

    #[test]
    fn test_read_records_skips_short_row() {
        let csv = "timestamp,campeon\n\
                   2025-01-06 10:00,Ahri\n\
                   2025-01-07 10:00\n\
                   2025-01-08 10:00,Lux\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("2025-01-06 10:00", "Ahri"),
                Record::new("2025-01-08 10:00", "Lux"),
            ]
        );
    }

    #[test]
    fn test_read_records_both_champion_columns_prefers_campeon() {
        let csv = "timestamp,champion,campeon\n2025-01-06 10:00,Jinx,Ahri\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![Record::new("2025-01-06 10:00", "Ahri")]);
    }

    #[test]
    fn test_open_records_distinguishes_missing_from_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(open_records(&dir.path().join("nope.csv")).unwrap(), None);

        let path = write_csv(dir.path(), "vacio.csv", "timestamp,campeon\n");
        assert_eq!(open_records(&path).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_read_records_preserves_utf8() {
        let csv = "timestamp,campeon\n2025-01-06 10:00,Kai'Sa\n2025-01-06 11:00,Nuñu\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[1].champion, "Nuñu");
        assert_eq!(records[0].champion, "Kai'Sa");
    }
}
