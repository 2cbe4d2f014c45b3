use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "autobahn-report",
    version,
    about = "Aggregate Autobahn WebSocket test results and fail on non-conforming behavior",
    long_about = "autobahn-report reads an Autobahn testsuite index.json, collects the detail report of every test whose behavior is not accepted, prints them to stderr and exits non-zero when any exist."
)]
pub struct Cli {
    /// Path to the Autobahn index.json
    pub index: PathBuf,
}
