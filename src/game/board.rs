use std::fmt;

use serde::Serialize;

use super::player::Player;
use super::win::WIN_LENGTH;
use crate::error::{ConfigError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Size of a board, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// The classic 6-row, 7-column board.
    pub const STANDARD: Dimensions = Dimensions {
        rows: DEFAULT_ROWS,
        cols: DEFAULT_COLS,
    };

    /// Both sides must fit a full line, otherwise nobody could ever win.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < WIN_LENGTH || cols < WIN_LENGTH {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok(Dimensions { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A board coordinate. Row 0 is the top, the last row is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>, // row-major
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    pub fn standard() -> Self {
        Self::new(Dimensions::STANDARD)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dims.cols + col
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board; use [`Board::cell`] for a
    /// checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.dims.rows && col < self.dims.cols,
            "position ({row}, {col}) outside {}x{} board",
            self.dims.rows,
            self.dims.cols
        );
        self.cells[self.index(row, col)]
    }

    /// Checked lookup, `None` outside the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.dims.rows && pos.col < self.dims.cols {
            Some(self.cells[self.index(pos.row, pos.col)])
        } else {
            None
        }
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.dims.cols {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Row a piece dropped into `col` would land on.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.dims.cols {
            return None;
        }
        (0..self.dims.rows)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
    }

    /// Number of pieces stacked in a column.
    pub fn column_height(&self, col: usize) -> usize {
        match self.lowest_empty_row(col) {
            Some(row) => self.dims.rows - 1 - row,
            None if col < self.dims.cols => self.dims.rows,
            None => 0,
        }
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.dims.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.dims.cols,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.dims.cols).all(|col| self.is_column_full(col))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dims.cols)
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos.row, pos.col);
        self.cells[idx] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                let symbol = cell.player().map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: Player = Player::One;
    const P2: Player = Player::Two;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_dimensions_reject_small_boards() {
        assert!(Dimensions::new(3, 7).is_err());
        assert!(Dimensions::new(6, 3).is_err());
        assert!(Dimensions::new(0, 0).is_err());
        assert_eq!(Dimensions::new(4, 4).unwrap().cell_count(), 16);
        assert_eq!(Dimensions::default(), Dimensions::STANDARD);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, P1).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Occupied(P1));

        // Drop second piece in same column
        let row = board.drop_piece(3, P2).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Occupied(P2));
        assert_eq!(board.column_height(3), 2);
        assert_eq!(board.lowest_empty_row(3), Some(3));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, P1).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_empty_row(0), None);
        assert_eq!(board.column_height(0), DEFAULT_ROWS);
        assert_eq!(
            board.drop_piece(0, P2),
            Err(MoveError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, P1),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(board.is_column_full(7));
        assert_eq!(board.column_height(7), 0);
        assert_eq!(board.cell(Position::new(0, 7)), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..DEFAULT_COLS {
            for _ in 0..DEFAULT_ROWS {
                board.drop_piece(col, P1).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), 42);
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::new(Dimensions::new(4, 9).unwrap());
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 9);
        assert_eq!(board.drop_piece(8, P1), Ok(3));
        assert_eq!(board.iter_rows().count(), 4);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(Dimensions::new(4, 4).unwrap());
        board.drop_piece(0, P1).unwrap();
        board.drop_piece(0, P2).unwrap();
        board.drop_piece(3, P1).unwrap();
        assert_eq!(
            board.to_string(),
            ". . . .\n. . . .\nO . . .\nX . . X\n"
        );
    }
}
