use crate::error::RngError;
use crate::traits::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingRngBehaviour {
    FailAtSeed,
    // Fails once n draws have succeeded
    FailAtDraw(usize),
}

pub struct FailingRng {
    behaviour: FailingRngBehaviour,
    pub draws: usize,
}

impl FailingRng {
    pub fn new(behaviour: FailingRngBehaviour) -> Self {
        Self { behaviour, draws: 0 }
    }
}

impl RandomSource for FailingRng {
    fn seed(&mut self, _seed: &[u8]) -> Result<(), RngError> {
        match self.behaviour {
            FailingRngBehaviour::FailAtSeed => Err(RngError::EmptySeed),
            FailingRngBehaviour::FailAtDraw(_) => Ok(()),
        }
    }

    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        match self.behaviour {
            FailingRngBehaviour::FailAtDraw(n) if self.draws == n => Err(RngError::Unseeded),
            _ => {
                self.draws += 1;
                Ok(vec![0u8; len])
            }
        }
    }
}
