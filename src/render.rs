use crate::board::{Board, Position};

/// Contract the presentation layer implements. The engine pushes state; the
/// layer owns widgets, click wiring, and scheduling of the once-per-second
/// timer tick.
pub trait Renderer {
    /// Redraw the full grid. Cells adjacent to `empty` are the clickable
    /// ones; the empty cell itself displays blank.
    fn render(&mut self, board: &Board, empty: Position);
    /// Shown once when the session becomes solved.
    fn render_solved(&mut self);
    /// Elapsed-time display, invoked on each tick while the session is
    /// active.
    fn render_timer(&mut self, elapsed_seconds: u64);
}

/// Renderer that captures state as plain text, for demos and tests.
#[derive(Default)]
pub struct TextRenderer {
    pub frame: String,
    pub solved_banner: bool,
    pub last_elapsed: Option<u64>,
}

impl Renderer for TextRenderer {
    fn render(&mut self, board: &Board, _empty: Position) {
        self.frame = board.board_text();
    }

    fn render_solved(&mut self) {
        self.solved_banner = true;
    }

    fn render_timer(&mut self, elapsed_seconds: u64) {
        self.last_elapsed = Some(elapsed_seconds);
    }
}
