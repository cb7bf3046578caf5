use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Position};
use crate::render::Renderer;
use crate::shuffle::{
    generate_solvable_board, SeededShuffler, ShuffleError, Shuffler, ThreadRngShuffler,
    MAX_SHUFFLE_RETRIES,
};

/// Time source; injectable for deterministic elapsed-time tests.
pub trait Clock {
    /// Time since an arbitrary fixed epoch.
    fn now(&self) -> Duration;
}

/// Wall-clock time.
#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Hand-advanced clock for tests. Clones share the same underlying time.
#[derive(Clone, Default)]
pub struct ManualClock {
    seconds: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_secs(&self, secs: u64) {
        self.seconds.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_secs(self.seconds.load(Ordering::Relaxed))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for deterministic shuffling; None uses the thread RNG.
    pub seed: Option<u64>,
    pub max_shuffle_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: None, max_shuffle_retries: MAX_SHUFFLE_RETRIES }
    }
}

/// Result of a click: whether a tile actually slid, and whether the session
/// is (now or already) solved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub moved: bool,
    pub solved: bool,
}

/// One play-through: a solvable board, the cached empty-cell position, a
/// terminal solved flag, and the start timestamp. The only state transition
/// is Active -> Solved; `restart` replaces the state wholesale.
pub struct GameSession {
    board: Board,
    empty_pos: Position,
    solved: bool,
    started_at: Duration,
    shuffler: Box<dyn Shuffler>,
    clock: Box<dyn Clock>,
    max_shuffle_retries: u32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ShuffleError> {
        let shuffler: Box<dyn Shuffler> = match config.seed {
            Some(seed) => Box::new(SeededShuffler::new(seed)),
            None => Box::new(ThreadRngShuffler),
        };
        Self::with_parts(shuffler, Box::new(SystemClock), config.max_shuffle_retries)
    }

    /// Construct with explicit shuffle and time sources.
    pub fn with_parts(
        mut shuffler: Box<dyn Shuffler>,
        clock: Box<dyn Clock>,
        max_shuffle_retries: u32,
    ) -> Result<Self, ShuffleError> {
        let board = generate_solvable_board(shuffler.as_mut(), max_shuffle_retries)?;
        let empty_pos = board.find_empty().unwrap_or(Position::new(0, 0));
        let started_at = clock.now();
        Ok(Self {
            board,
            empty_pos,
            solved: false,
            started_at,
            shuffler,
            clock,
            max_shuffle_retries,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn empty_position(&self) -> Position {
        self.empty_pos
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.now().saturating_sub(self.started_at).as_secs()
    }

    /// True iff `target` is on the grid and orthogonally adjacent to the
    /// empty cell.
    pub fn is_legal_move(&self, target: Position) -> bool {
        target.in_bounds() && target.is_adjacent(self.empty_pos)
    }

    /// Handle a click on `target`. Illegal targets and clicks after the
    /// session is solved are silent no-ops.
    pub fn on_cell_clicked(&mut self, target: Position) -> MoveOutcome {
        if self.solved || !self.is_legal_move(target) {
            return MoveOutcome { moved: false, solved: self.solved };
        }
        self.board.swap(self.empty_pos, target);
        self.empty_pos = target;
        if self.board.is_solved() {
            self.solved = true;
            info!(elapsed_secs = self.elapsed_seconds(), "puzzle solved");
        }
        MoveOutcome { moved: true, solved: self.solved }
    }

    /// Periodic tick: `Some(elapsed)` while active, `None` once solved. The
    /// `None` is the caller's cue to stop rescheduling the tick.
    pub fn tick(&self) -> Option<u64> {
        if self.solved {
            None
        } else {
            Some(self.elapsed_seconds())
        }
    }

    /// Discard the current board and timestamp and start a fresh session
    /// from a newly generated solvable shuffle.
    pub fn restart(&mut self) -> Result<(), ShuffleError> {
        self.board = generate_solvable_board(self.shuffler.as_mut(), self.max_shuffle_retries)?;
        self.empty_pos = self.board.find_empty().unwrap_or(Position::new(0, 0));
        self.solved = false;
        self.started_at = self.clock.now();
        info!("session restarted");
        Ok(())
    }

    /// Push the current grid (and the solved banner, if terminal) to the
    /// presentation layer.
    pub fn render_to(&self, renderer: &mut dyn Renderer) {
        renderer.render(&self.board, self.empty_pos);
        if self.solved {
            renderer.render_solved();
        }
    }

    /// Drive one timer tick. Returns whether the caller should reschedule.
    pub fn tick_to(&self, renderer: &mut dyn Renderer) -> bool {
        match self.tick() {
            Some(elapsed) => {
                renderer.render_timer(elapsed);
                true
            }
            None => false,
        }
    }
}
