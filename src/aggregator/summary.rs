//! Counts gathered while walking an index.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationSummary {
    pub servers: usize,
    pub tests: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Builder for creating aggregation summaries.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    servers: usize,
    accepted: usize,
    rejected: usize,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_servers(mut self, count: usize) -> Self {
        self.servers = count;
        self
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn build(self) -> AggregationSummary {
        AggregationSummary {
            servers: self.servers,
            tests: self.accepted + self.rejected,
            accepted: self.accepted,
            rejected: self.rejected,
        }
    }
}

impl AggregationSummary {
    pub fn passed(&self) -> bool {
        self.rejected == 0
    }
}
