use std::io::Write;
use std::process::ExitCode;

use tracing::{debug, info};

use crate::error::Error;
use crate::seed::decode_seed;
use crate::traits::RandomSource;

pub const SEED_HEX:   &str  = "9e8b4178790cd57a5761c4a6f164ba72";
pub const DRAW_COUNT: usize = 10;
pub const DRAW_LEN:   usize = 12;

const LINE_PREFIX:    &str  = "Random byte array ";
const DECODE_FAILURE: &str  = "Error decoding seed value";

pub fn format_draw(bytes: &[u8]) -> String {
    format!("{}{}", LINE_PREFIX, hex::encode(bytes))
}

// Nothing reaches rng or out if the seed does not decode
pub fn run<R: RandomSource, W: Write>(
    seed_hex: &str,
    rng: &mut R,
    mut out: W,
) -> Result<(), Error> {
    let seed = decode_seed(seed_hex)?;

    info!("seeding generator with {} bytes", seed.len());
    rng.seed(&seed)?;
    drop(seed);

    for i in 0..DRAW_COUNT {
        let val = rng.generate(DRAW_LEN)?;
        debug!("draw {} of {}", i + 1, DRAW_COUNT);
        writeln!(out, "{}", format_draw(&val))?;
    }
    out.flush()?;

    Ok(())
}

// Bad seed goes to out, everything else to err_out
pub fn report<W: Write, E: Write>(err: &Error, mut out: W, mut err_out: E) -> ExitCode {
    // Nowhere left to report a failed write
    let _ = match err {
        Error::SeedDecode(_) => writeln!(out, "{}", DECODE_FAILURE),
        _ => writeln!(err_out, "{}", err),
    };
    ExitCode::FAILURE
}
