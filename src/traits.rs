use crate::error::RngError;

// Seam between the draw loop and the generator
pub trait RandomSource {
    fn seed(&mut self, seed: &[u8]) -> Result<(), RngError>;

    // Exactly len bytes, generator advances
    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError>;
}
