pub mod aggregator;
pub mod cli;
pub mod error;
pub mod index;
pub mod logging;
pub mod policy;
pub mod reporter;
pub mod run;
pub mod source;


pub use aggregator::{Aggregation, AggregationSummary, Failure, FailureCollector, aggregate};
pub use cli::Cli;
pub use error::{ReportError, Result};
pub use index::{Index, TestResult};
pub use policy::{AcceptancePolicy, Rejection};
pub use reporter::{Reporter, json::JsonReporter};
pub use run::{Verdict, run};
pub use source::{FsSource, MemorySource, ReportSource};
