use std::io;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("seed material is empty")]
    EmptySeed,
    #[error("generator used before being seeded")]
    Unseeded,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot decode seed: {0}")]
    SeedDecode(#[from] hex::FromHexError),
    #[error("random generator failed: {0}")]
    Rng(#[from] RngError),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}
