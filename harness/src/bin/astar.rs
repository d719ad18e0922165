//! A* front-end.
//!
//! Reads the start and goal sequences from the first two stdin lines and
//! prints the total cost of the lowest-cost swap sequence.

use std::io;
use std::process::ExitCode;

use swapcost_harness::runner::run_astar;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    match run_astar(&mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
