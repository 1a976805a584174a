//! Four-in-a-row detection.
//!
//! [`find_winning_line`] is the exhaustive reference: every cell is tried as
//! the start of a run in each of the four directions. [`line_through`] only
//! looks at runs passing through one cell and is what the engine calls after
//! each drop. Both report a win for exactly the same boards.

use serde::Serialize;

use super::board::{Board, Cell, Dimensions, Position};
use super::player::Player;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Direction a line extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row, col) step
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// Four same-player cells starting at `start` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    pub start: Position,
    pub direction: Direction,
}

impl WinningLine {
    pub fn positions(&self) -> [Position; WIN_LENGTH] {
        let (dr, dc) = self.direction.delta();
        std::array::from_fn(|k| {
            let k = k as isize;
            Position::new(
                (self.start.row as isize + dr * k) as usize,
                (self.start.col as isize + dc * k) as usize,
            )
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Position `k` steps from `pos` along `direction`, if still on the board.
fn step(dims: Dimensions, pos: Position, direction: Direction, k: isize) -> Option<Position> {
    let (dr, dc) = direction.delta();
    let row = pos.row as isize + dr * k;
    let col = pos.col as isize + dc * k;
    if row < 0 || col < 0 {
        return None;
    }
    let (row, col) = (row as usize, col as usize);
    (row < dims.rows() && col < dims.cols()).then_some(Position::new(row, col))
}

fn owned_by(board: &Board, pos: Option<Position>, player: Player) -> bool {
    pos.and_then(|p| board.cell(p)) == Some(Cell::Occupied(player))
}

/// Scan the whole board for a line of `player`'s pieces.
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    let dims = board.dimensions();
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            let start = Position::new(row, col);
            for direction in Direction::ALL {
                let wins = (0..WIN_LENGTH as isize)
                    .all(|k| owned_by(board, step(dims, start, direction, k), player));
                if wins {
                    return Some(WinningLine { start, direction });
                }
            }
        }
    }
    None
}

/// Line of four running through `pos`, for whichever player occupies it.
///
/// When the run is longer than four, the returned line starts as far back
/// along the run as it can while still covering `pos`.
pub fn line_through(board: &Board, pos: Position) -> Option<WinningLine> {
    let player = board.cell(pos)?.player()?;
    let dims = board.dimensions();

    Direction::ALL.into_iter().find_map(|direction| {
        let matches = |k: isize| owned_by(board, step(dims, pos, direction, k), player);
        let behind = (1..).take_while(|&k| matches(-k)).count();
        let ahead = (1..).take_while(|&k| matches(k)).count();

        if behind + 1 + ahead < WIN_LENGTH {
            return None;
        }
        let back = behind.min(WIN_LENGTH - 1) as isize;
        let start = step(dims, pos, direction, -back)?;
        Some(WinningLine { start, direction })
    })
}
