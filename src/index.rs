//! The Autobahn `index.json` document.

use crate::error::Result;
use crate::source::{ReportSource, load_json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of a single test case as recorded in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub behavior: String,
    #[serde(rename = "behaviorClose")]
    pub behavior_close: String,
    /// Detail report file, relative to the directory holding the index.
    pub reportfile: String,
}

/// Test results per server, in document order.
pub type ServerResults = IndexMap<String, TestResult>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    servers: IndexMap<String, ServerResults>,
}

impl Index {
    pub fn load<S: ReportSource + ?Sized>(source: &S, path: &Path) -> Result<Self> {
        load_json(source, path)
    }

    /// Every `(server, test id, result)` triple, servers first, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &TestResult)> {
        self.servers.iter().flat_map(|(server, results)| {
            results
                .iter()
                .map(move |(test, result)| (server.as_str(), test.as_str(), result))
        })
    }

    pub fn server_count(&self) -> usize {
        self.servers.len()
    }

    pub fn test_count(&self) -> usize {
        self.servers.values().map(IndexMap::len).sum()
    }
}
