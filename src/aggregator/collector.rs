//! Failure collector for rejected test results.

use indexmap::IndexMap;
use serde_json::Value;

/// A rejected test together with its loaded detail report.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub server: String,
    pub test: String,
    pub report: Value,
}

/// Collects failures in the order they are encountered.
#[derive(Debug, Default)]
pub struct FailureCollector {
    failures: Vec<Failure>,
    by_server: IndexMap<String, usize>,
}

impl FailureCollector {
    /// Create a new failure collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a failure to the collector.
    pub fn add(&mut self, failure: Failure) {
        *self.by_server.entry(failure.server.clone()).or_default() += 1;
        self.failures.push(failure);
    }

    /// The detail reports, in collection order.
    pub fn reports(&self) -> Vec<&Value> {
        self.failures.iter().map(|f| &f.report).collect()
    }

    /// Number of failures recorded for a server.
    pub fn by_server(&self, server: &str) -> usize {
        self.by_server.get(server).copied().unwrap_or(0)
    }

    /// Servers with at least one failure, in first-seen order.
    pub fn servers(&self) -> impl Iterator<Item = &str> {
        self.by_server.keys().map(String::as_str)
    }

    pub fn total(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Consume the collector and return the detail reports.
    pub fn into_reports(self) -> Vec<Value> {
        self.failures.into_iter().map(|f| f.report).collect()
    }
}
