use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::board::{is_solvable, Board, CELL_COUNT, GOAL, SIZE};

/// Retry cap for rejection sampling. Roughly half of all permutations are
/// solvable, so reaching this bound means the permutation source is broken.
pub const MAX_SHUFFLE_RETRIES: u32 = 1000;

#[derive(Error, Debug)]
pub enum ShuffleError {
    #[error("no solvable permutation after {0} attempts")]
    RetriesExhausted(u32),
}

/// Source of random permutations of the cell values. Injectable so tests can
/// substitute a deterministic or adversarial source.
pub trait Shuffler {
    fn permute(&mut self, cells: &mut [u8; CELL_COUNT]);
}

/// Production shuffler backed by the thread-local RNG.
#[derive(Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn permute(&mut self, cells: &mut [u8; CELL_COUNT]) {
        cells.shuffle(&mut thread_rng());
    }
}

/// Seeded shuffler for reproducible board generation.
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Shuffler for SeededShuffler {
    fn permute(&mut self, cells: &mut [u8; CELL_COUNT]) {
        cells.shuffle(&mut self.rng);
    }
}

/// Draw permutations of {0..15} until one passes the solvability predicate.
/// A draw that happens to equal the goal is solvable and is kept as-is, not
/// re-rolled.
pub fn generate_solvable_board(
    shuffler: &mut dyn Shuffler,
    max_retries: u32,
) -> Result<Board, ShuffleError> {
    let mut cells = GOAL;
    for attempt in 1..=max_retries {
        shuffler.permute(&mut cells);
        if is_solvable(&cells, SIZE) {
            debug!(attempt, "generated solvable shuffle");
            return Ok(Board { cells });
        }
    }
    Err(ShuffleError::RetriesExhausted(max_retries))
}
