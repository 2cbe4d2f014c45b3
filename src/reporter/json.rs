use crate::aggregator::FailureCollector;
use crate::error::{ReportError, Result};
use crate::reporter::{Reporter, failure_count_line};

/// Pretty JSON array of the failing reports followed by a count line.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, failures: &FailureCollector) -> Result<String> {
        let payload =
            serde_json::to_string_pretty(&failures.reports()).map_err(ReportError::Serialize)?;
        Ok(format!(
            "{payload}\n{}",
            failure_count_line(failures.total())
        ))
    }
}
