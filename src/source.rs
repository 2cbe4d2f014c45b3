//! File access for index and report documents.
//!
//! Loading goes through the [`ReportSource`] trait so the aggregation can run
//! against the real filesystem or an in-memory set of files.

use crate::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something that can hand out file contents by path.
pub trait ReportSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl FsSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory files keyed by path. Lookups of unknown paths fail with `NotFound`.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl ReportSource for MemorySource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

/// Read `path` from `source` and deserialize it as JSON.
pub fn load_json<T, S>(source: &S, path: &Path) -> Result<T>
where
    T: DeserializeOwned,
    S: ReportSource + ?Sized,
{
    debug!(path = %path.display(), "Loading JSON document");
    let content = source
        .read_to_string(path)
        .map_err(|e| ReportError::read_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| ReportError::parse_error(path, e))
}
