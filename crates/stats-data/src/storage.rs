//! Destination for the generated report files.
//!
//! The pipeline only talks to [`ReportStore`]; the filesystem implementation
//! is used by the binary and the in-memory one by tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use stats_core::{Result, StatsError};
use tracing::debug;

/// Where report files go.
pub trait ReportStore {
    /// Make sure the destination exists. Must succeed when it already does.
    fn ensure_dir(&self) -> Result<()>;

    /// Write `contents` under `name`, replacing any previous file, and return
    /// the full path written.
    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf>;
}

// ── Filesystem ────────────────────────────────────────────────────────────────

/// Writes reports into a directory on disk.
#[derive(Debug, Clone)]
pub struct FsReportStore {
    dir: PathBuf,
}

impl FsReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportStore for FsReportStore {
    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StatsError::FileWrite {
            path: self.dir.clone(),
            source,
        })
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(name);

        // Write to a temp file then rename so a failed run never leaves a
        // half-written report behind.
        let tmp = path.with_extension("tmp");
        let write_err = |source| StatsError::FileWrite {
            path: path.clone(),
            source,
        };
        std::fs::write(&tmp, contents).map_err(write_err)?;
        std::fs::rename(&tmp, &path).map_err(write_err)?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// Keeps written reports in memory, keyed by file name.
#[derive(Debug)]
pub struct MemoryReportStore {
    root: PathBuf,
    files: Mutex<BTreeMap<String, Vec<u8>>>,
    dir_created: Mutex<bool>,
}

impl Default for MemoryReportStore {
    fn default() -> Self {
        Self::new("/memory")
    }
}

impl MemoryReportStore {
    /// `root` is only used to build the paths returned from [`ReportStore::write`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Mutex::new(BTreeMap::new()),
            dir_created: Mutex::new(false),
        }
    }

    /// Contents of `name`, if it was written.
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    /// Names of every written file, sorted.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    pub fn dir_created(&self) -> bool {
        *self.dir_created.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ReportStore for MemoryReportStore {
    fn ensure_dir(&self) -> Result<()> {
        *self.dir_created.lock().unwrap_or_else(|e| e.into_inner()) = true;
        Ok(())
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), contents.to_vec());
        Ok(self.root.join(name))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
