//! Uniform-cost front-end.
//!
//! Reads the start and goal sequences from the first two stdin lines and
//! prints each layout on the lowest-cost path, then the total cost.

use std::io;
use std::process::ExitCode;

use swapcost_harness::runner::run_uniform_cost;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    match run_uniform_cost(&mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
