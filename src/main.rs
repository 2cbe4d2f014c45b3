use autobahn_report::{Cli, FsSource, logging::init_tracing, run};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    match run(&cli, &FsSource::new(), &mut stdout, &mut stderr) {
        Ok(verdict) => {
            debug!(?verdict, "Finished");
            verdict.exit_code()
        }
        Err(e) => {
            debug!(load_error = e.is_load_error(), path = ?e.path(), "Run aborted");
            eprintln!("autobahn-report: {e}");
            ExitCode::from(2)
        }
    }
}
