use crate::error::RngError;
use crate::traits::RandomSource;

// Output bytes count up from the first seed byte; records every call
#[derive(Debug, Default)]
pub struct CountingRng {
    next: u8,
    pub seeds: Vec<Vec<u8>>,
    pub draws: Vec<usize>,
}

impl CountingRng {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for CountingRng {
    fn seed(&mut self, seed: &[u8]) -> Result<(), RngError> {
        let first = *seed.first().ok_or(RngError::EmptySeed)?;
        self.next = first;
        self.seeds.push(seed.to_vec());
        Ok(())
    }

    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        if self.seeds.is_empty() {
            return Err(RngError::Unseeded);
        }
        self.draws.push(len);
        Ok((0..len)
            .map(|_| {
                let b = self.next;
                self.next = self.next.wrapping_add(1);
                b
            })
            .collect())
    }
}
