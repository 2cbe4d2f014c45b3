pub mod json;

use crate::aggregator::FailureCollector;
use crate::error::Result;

pub trait Reporter {
    fn report(&self, failures: &FailureCollector) -> Result<String>;
}

/// Closing line written after the failure payload.
pub fn failure_count_line(count: usize) -> String {
    format!("there was {count} failures")
}
