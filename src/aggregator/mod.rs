//! Aggregation of an Autobahn index into a list of failures.
//!
//! Walks every `(server, test)` entry of the index, applies the
//! [`AcceptancePolicy`] and loads the detail report of each rejected test.
//! Any load error aborts the walk; nothing partial is returned.

pub mod collector;
pub mod summary;

pub use collector::{Failure, FailureCollector};
pub use summary::{AggregationSummary, SummaryBuilder};

use crate::error::{ReportError, Result};
use crate::index::Index;
use crate::policy::AcceptancePolicy;
use crate::source::{ReportSource, load_json};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of walking one index file.
#[derive(Debug)]
pub struct Aggregation {
    pub summary: AggregationSummary,
    pub failures: FailureCollector,
}

impl Aggregation {
    pub fn passed(&self) -> bool {
        self.summary.passed()
    }
}

/// Make `path` absolute without touching the filesystem.
pub fn resolve_index_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|source| ReportError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory that `reportfile` entries are relative to.
pub fn index_dir(index_path: &Path) -> &Path {
    index_path.parent().unwrap_or_else(|| Path::new(""))
}

/// Aggregate the index at `index_path`, which should already be absolute.
pub fn aggregate<S>(index_path: &Path, source: &S, policy: &AcceptancePolicy) -> Result<Aggregation>
where
    S: ReportSource + ?Sized,
{
    let index = Index::load(source, index_path)?;
    let base = index_dir(index_path);
    debug!(
        servers = index.server_count(),
        tests = index.test_count(),
        "Index loaded"
    );

    let mut failures = FailureCollector::new();
    let mut summary = SummaryBuilder::new().with_servers(index.server_count());

    for (server, test, result) in index.entries() {
        let Some(rejection) = policy.rejection(result) else {
            summary.record_accepted();
            continue;
        };

        debug!(
            server,
            test,
            behavior = %result.behavior,
            behavior_close = %result.behavior_close,
            %rejection,
            "Test rejected"
        );
        summary.record_rejected();

        // Absolute reportfile values replace the base, as Path::join does.
        let report_path = base.join(&result.reportfile);
        let report: Value = load_json(source, &report_path)?;
        failures.add(Failure {
            server: server.to_string(),
            test: test.to_string(),
            report,
        });
    }

    let summary = summary.build();
    info!(
        index = %index_path.display(),
        servers = summary.servers,
        tests = summary.tests,
        rejected = summary.rejected,
        "Aggregation completed"
    );

    Ok(Aggregation {
        summary,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use crate::test_utils::fixtures::{IndexBuilder, case_report};
    use serde_json::json;

    const INDEX: &str = "/reports/index.json";

    fn run(source: &MemorySource) -> Result<Aggregation> {
        aggregate(Path::new(INDEX), source, &AcceptancePolicy::default())
    }

    #[test]
    fn test_compliant_index_has_no_failures() {
        let index = IndexBuilder::new().result("s1", "t1", "OK", "OK", "r1.json");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/reports/r1.json", r#"{"ok": true}"#);

        let aggregation = run(&source).unwrap();
        assert!(aggregation.passed());
        assert_eq!(aggregation.summary.accepted, 1);
        assert_eq!(aggregation.summary.rejected, 0);
    }

    #[test]
    fn test_accepted_reports_are_never_loaded() {
        // r1.json is absent; accepted entries must not touch it.
        let index = IndexBuilder::new()
            .result("s1", "t1", "INFORMATIONAL", "OK", "r1.json")
            .result("s1", "t2", "UNIMPLEMENTED", "INFORMATIONAL", "r2.json");
        let source = MemorySource::new().with_file(INDEX, index.build());

        assert!(run(&source).unwrap().passed());
    }

    #[test]
    fn test_failed_behavior_collects_report() {
        let index = IndexBuilder::new().result("s1", "t1", "FAILED", "OK", "r1.json");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/reports/r1.json", r#"{"ok": true}"#);

        let aggregation = run(&source).unwrap();
        assert_eq!(aggregation.failures.total(), 1);
        assert_eq!(aggregation.failures.into_reports(), vec![json!({"ok": true})]);
    }

    #[test]
    fn test_each_rejected_record_is_collected_once_in_order() {
        let index = IndexBuilder::new()
            .result("server-b", "2.1", "OK", "WRONG CODE", "b_2_1.json")
            .result("server-b", "1.1", "OK", "OK", "b_1_1.json")
            .result("server-b", "3.1", "NON-STRICT", "OK", "b_3_1.json")
            .result("server-a", "1.1", "FAILED", "FAILED", "a_1_1.json");
        let b21 = case_report("server-b", "2.1", "OK");
        let b31 = case_report("server-b", "3.1", "NON-STRICT");
        let a11 = case_report("server-a", "1.1", "FAILED");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/reports/b_2_1.json", b21.to_string())
            .with_file("/reports/b_3_1.json", b31.to_string())
            .with_file("/reports/a_1_1.json", a11.to_string());

        let aggregation = run(&source).unwrap();
        assert_eq!(aggregation.summary.servers, 2);
        assert_eq!(aggregation.summary.tests, 4);
        assert_eq!(aggregation.summary.rejected, 3);
        assert_eq!(aggregation.failures.by_server("server-b"), 2);
        assert_eq!(aggregation.failures.by_server("server-a"), 1);
        assert_eq!(aggregation.failures.into_reports(), vec![b21, b31, a11]);
    }

    #[test]
    fn test_same_reportfile_for_two_rejections_is_loaded_twice() {
        let index = IndexBuilder::new()
            .result("s1", "t1", "FAILED", "OK", "shared.json")
            .result("s2", "t1", "FAILED", "OK", "shared.json");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/reports/shared.json", "7");

        let reports = run(&source).unwrap().failures.into_reports();
        assert_eq!(reports, vec![json!(7), json!(7)]);
    }

    #[test]
    fn test_empty_index() {
        let source = MemorySource::new().with_file(INDEX, "{}");
        let aggregation = run(&source).unwrap();
        assert!(aggregation.passed());
        assert_eq!(aggregation.summary, AggregationSummary::default());
    }

    #[test]
    fn test_missing_report_is_fatal() {
        let index = IndexBuilder::new().result("s1", "t1", "FAILED", "OK", "gone.json");
        let source = MemorySource::new().with_file(INDEX, index.build());

        let err = run(&source).unwrap_err();
        assert!(err.is_load_error());
        assert_eq!(err.path(), Some(Path::new("/reports/gone.json")));
    }

    #[test]
    fn test_malformed_report_is_fatal() {
        let index = IndexBuilder::new().result("s1", "t1", "FAILED", "OK", "r1.json");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/reports/r1.json", "{\"unterminated\": ");

        assert!(matches!(run(&source).unwrap_err(), ReportError::Parse { .. }));
    }

    #[test]
    fn test_missing_index_is_fatal() {
        let err = run(&MemorySource::new()).unwrap_err();
        assert_eq!(err.path(), Some(Path::new(INDEX)));
    }

    #[test]
    fn test_reportfile_in_subdirectory() {
        let index = IndexBuilder::new().result("s1", "t1", "FAILED", "OK", "cases/t1.json");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/reports/cases/t1.json", "[1]");

        assert_eq!(run(&source).unwrap().failures.into_reports(), vec![json!([1])]);
    }

    #[test]
    fn test_absolute_reportfile_is_used_as_is() {
        let index = IndexBuilder::new().result("s1", "t1", "FAILED", "OK", "/elsewhere/t1.json");
        let source = MemorySource::new()
            .with_file(INDEX, index.build())
            .with_file("/elsewhere/t1.json", "null");

        assert_eq!(run(&source).unwrap().failures.into_reports(), vec![Value::Null]);
    }

    #[test]
    fn test_index_dir() {
        assert_eq!(
            index_dir(Path::new("/reports/clients/index.json")),
            Path::new("/reports/clients")
        );
        assert_eq!(index_dir(Path::new("index.json")), Path::new(""));
    }

    #[test]
    fn test_resolve_index_path_is_absolute() {
        let resolved = resolve_index_path(Path::new("reports/index.json")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("reports/index.json"));
    }
}
