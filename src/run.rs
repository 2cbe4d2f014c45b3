//! Entry point shared by the binary and tests.

use crate::Cli;
use crate::aggregator::{aggregate, resolve_index_path};
use crate::error::Result;
use crate::policy::AcceptancePolicy;
use crate::reporter::{Reporter, json::JsonReporter};
use crate::source::ReportSource;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Compliant,
    Failed(usize),
}

impl Verdict {
    pub fn code(self) -> u8 {
        match self {
            Self::Compliant => 0,
            Self::Failed(_) => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Aggregate the index named by `cli`, reading files through `source`.
///
/// Writes `index <path>` to `stdout` before loading anything. When failures
/// exist, the reporter output goes to `stderr`; nothing is written there
/// otherwise. Load errors are returned as-is and leave `stderr` untouched.
pub fn run<S, O, E>(cli: &Cli, source: &S, stdout: &mut O, stderr: &mut E) -> Result<Verdict>
where
    S: ReportSource + ?Sized,
    O: Write,
    E: Write,
{
    let index_path = resolve_index_path(&cli.index)?;
    info!(index = %index_path.display(), "Starting aggregation");
    writeln!(stdout, "index {}", index_path.display())?;
    stdout.flush()?;

    let aggregation = aggregate(&index_path, source, &AcceptancePolicy::default())?;
    if aggregation.passed() {
        debug!(tests = aggregation.summary.tests, "All tests accepted");
        return Ok(Verdict::Compliant);
    }

    for server in aggregation.failures.servers() {
        debug!(
            server,
            failures = aggregation.failures.by_server(server),
            "Server has failing tests"
        );
    }

    let output = JsonReporter::new().report(&aggregation.failures)?;
    writeln!(stderr, "{output}")?;
    stderr.flush()?;

    Ok(Verdict::Failed(aggregation.failures.total()))
}
