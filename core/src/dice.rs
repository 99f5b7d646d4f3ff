//! Deterministic dice.
//!
//! All rolls flow through one PCG stream seeded at engine construction,
//! so a campaign replayed with the same seed produces the same rolls.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct DiceRoller {
    rng: Pcg64Mcg,
}

impl DiceRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a die with `sides` faces, uniform in [1, sides].
    /// Callers must screen out zero-sided dice.
    pub fn roll(&mut self, sides: u32) -> u32 {
        assert!(sides > 0, "sides must be > 0");
        (self.rng.next_u64() % u64::from(sides)) as u32 + 1
    }
}
