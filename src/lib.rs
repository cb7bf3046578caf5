//! Pure 15-puzzle logic crate.
//! - Board encoding, inversion counting, solvability parity
//! - Solvable shuffle generation with bounded rejection sampling
//! - Session lifecycle: moves, win detection, elapsed-time ticks

mod board;
mod render;
mod session;
mod shuffle;

pub use board::{count_inversions, is_solvable, Board, Position, CELL_COUNT, GOAL, SIZE};
pub use render::{Renderer, TextRenderer};
pub use session::{Clock, GameConfig, GameSession, ManualClock, MoveOutcome, SystemClock};
pub use shuffle::{
    generate_solvable_board, SeededShuffler, ShuffleError, Shuffler, ThreadRngShuffler,
    MAX_SHUFFLE_RETRIES,
};
