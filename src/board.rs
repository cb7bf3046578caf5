use serde::{Deserialize, Serialize};

/// Grid width of the playable board.
pub const SIZE: usize = 4;
/// Number of cells, the empty one included.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Goal ordering: 1..15 row-major, empty cell (0) last.
pub const GOAL: [u8; CELL_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

/// A (row, column) pair, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index into the cell array.
    #[inline]
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// True iff the two positions are orthogonal neighbors (Manhattan
    /// distance exactly 1); diagonals do not count.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// Row-major 4x4 board as a flat array. Value 0 marks the empty cell; the
/// multiset of values is always exactly {0..15}. The only mutation is the
/// swap of the empty cell with an adjacent tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cells: [u8; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl Board {
    /// The solved configuration.
    pub fn goal() -> Self {
        Self { cells: GOAL }
    }

    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Self {
        let mut cells = [0u8; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r * SIZE + c] = v;
            }
        }
        Self { cells }
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Swap the values at two positions. Board state never changes any other
    /// way; no value is created or destroyed.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.cells.swap(a.index(), b.index());
    }

    /// Scan for the empty cell. Always present on a well-formed board.
    pub fn find_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .map(|i| Position::new(i / SIZE, i % SIZE))
    }

    /// True iff the board equals the goal ordering element-wise.
    pub fn is_solved(&self) -> bool {
        self.cells == GOAL
    }

    pub fn is_solvable(&self) -> bool {
        is_solvable(&self.cells, SIZE)
    }

    /// Render a fixed-format text view, blank for the empty cell.
    pub fn board_text(&self) -> String {
        let mut out = String::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let v = self.cells[row * SIZE + col];
                if v == 0 {
                    out.push_str("   ");
                } else {
                    out.push_str(&format!("{:>2} ", v));
                }
            }
            if row + 1 < SIZE {
                out.push('\n');
            }
        }
        out
    }
}

/// Count pairs of tiles appearing out of ascending order in the row-major
/// flattening; the empty cell is skipped on both sides of each pair.
pub fn count_inversions(flat: &[u8]) -> usize {
    flat.iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, &v)| {
            flat[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < v)
                .count()
        })
        .sum()
}

/// Standard parity predicate for an even-width sliding puzzle: flatten
/// row-major, count inversions, take the 1-indexed row of the empty cell,
/// and require (inversions + empty_row) to be even. The 1-indexing and the
/// row-major order both matter; do not swap in an equivalent formula.
pub fn is_solvable(flat: &[u8], width: usize) -> bool {
    let Some(zero_at) = flat.iter().position(|&v| v == 0) else {
        return false;
    };
    let empty_row = zero_at / width + 1;
    (count_inversions(flat) + empty_row) % 2 == 0
}
