use zeroize::Zeroize;

use crate::error::RngError;
use crate::traits::RandomSource;

pub const KEY_LEN:        usize = 32;
pub const BIG_STATE_LEN:  usize = 64;

// Output bytes start after the next key so a draw never exposes it
const EXTRACT_START:  u64   = KEY_LEN as u64;

pub struct BigStateRNG {
    key:        [u8; KEY_LEN],
    monotonic:  u64,
    bigstate:   [u8; BIG_STATE_LEN],
    seeded:     bool,
}

impl BigStateRNG {
    pub fn new() -> Self {
        Self {
            key:        [0_u8; KEY_LEN],
            monotonic:  0_u64,
            bigstate:   [0_u8; BIG_STATE_LEN],
            seeded:     false,
        }
    }

    // Seeding
    //   1. Hash the old bigstate and the seed in separate
    //   2. Xor both, use as the key for keyed hash
    //   3. Hash the counter and a constant input, finalize as XOF
    //   4. Xor bigstate with the output of XOF
    pub fn reseed(&mut self, block: &[u8]) -> Result<(), RngError> {
        if block.is_empty() {
            return Err(RngError::EmptySeed);
        }

        let mut prev: [u8; 32] = blake3::hash(&self.bigstate).into();
        let mut next: [u8; 32] = blake3::hash(block).into();
        prev.iter_mut()
            .zip(next.iter())
            .for_each(|(a, b)| *a ^= *b);
        let mut mix = blake3::Hasher::new_keyed(&prev);
        mix.update(&self.monotonic.to_le_bytes());
        // Constant input
        mix.update(b"Big State Reseed");
        let mut xof = mix.finalize_xof();

        let mut state_update = [0u8; BIG_STATE_LEN];
        xof.fill(&mut state_update);
        self.bigstate.iter_mut()
                .zip(state_update.iter())
                .for_each(|(a, b)| *a ^= *b);

        self.monotonic_tick();
        self.seeded = true;
        state_update.zeroize();
        xof.zeroize();
        mix.zeroize();
        prev.zeroize();
        next.zeroize();
        Ok(())
    }

    // Each extraction ratchets the key, so two fills never share a stream
    pub fn fill(&mut self, output: &mut [u8]) -> Result<(), RngError> {
        if !self.seeded {
            return Err(RngError::Unseeded);
        }

        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(&self.monotonic.to_le_bytes());
        hasher.update(&self.bigstate);

        let mut xof = hasher.finalize_xof();
        xof.fill(&mut self.key);
        self.monotonic_tick();

        xof.set_position(EXTRACT_START);
        xof.fill(output);
        xof.zeroize();
        hasher.zeroize();
        Ok(())
    }

    fn monotonic_tick(&mut self) {
        self.monotonic = self.monotonic.wrapping_add(1);
    }
}

impl Default for BigStateRNG {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for BigStateRNG {
    fn seed(&mut self, seed: &[u8]) -> Result<(), RngError> {
        self.reseed(seed)
    }

    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        let mut out = vec![0u8; len];
        self.fill(&mut out)?;
        Ok(out)
    }
}

impl Drop for BigStateRNG {
    fn drop(&mut self) {
        self.key.zeroize();
        self.bigstate.zeroize();
        self.monotonic.zeroize();
    }
}
