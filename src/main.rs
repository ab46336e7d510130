mod draw;
mod error;
mod seed;
mod state;
mod traits;


use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::draw::{report, run, SEED_HEX};
use crate::state::BigStateRNG;

// Seed a generator from a fixed hex literal, print ten 12-byte draws
fn main() -> ExitCode {
    // stdout only carries the draws
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let mut rng = BigStateRNG::new();
    let stdout = io::stdout();

    match run(SEED_HEX, &mut rng, stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            report(&e, io::stdout().lock(), io::stderr().lock())
        }
    }
}
