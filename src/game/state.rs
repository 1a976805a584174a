use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use super::board::{Board, Dimensions, Position};
use super::events::{GameObserver, Notification};
use super::player::Player;
use super::win::{self, WinningLine};
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Won(Player),
    Tied,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won(player) => write!(f, "{} wins", player.name()),
            GameOutcome::Tied => write!(f, "it's a tie"),
        }
    }
}

/// Flat view of where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    WonBy(Player),
    Tied,
}

/// Result of an accepted drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    /// `None` while the game goes on.
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
    move_count: usize,
}

impl GameState {
    /// Create a game on an empty `rows` x `cols` board, Player 1 to move.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_dimensions(Dimensions::new(rows, cols)?))
    }

    pub fn with_dimensions(dims: Dimensions) -> Self {
        GameState {
            board: Board::new(dims),
            current_player: Player::One,
            outcome: None,
            winning_line: None,
            last_move: None,
            move_count: 0,
        }
    }

    /// Create initial game state on the 6x7 board
    pub fn standard() -> Self {
        Self::with_dimensions(Dimensions::STANDARD)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            None => GameStatus::InProgress,
            Some(GameOutcome::Won(player)) => GameStatus::WonBy(player),
            Some(GameOutcome::Tied) => GameStatus::Tied,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The four cells that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Number of accepted drops so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A rejected drop leaves the game exactly as it was. On a win or tie the
    /// current player stays the one who made the final move.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            debug!(column, "drop rejected, game already over");
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player).map_err(|err| {
            debug!(column, %err, "drop rejected");
            err
        })?;
        self.move_count += 1;
        self.last_move = Some(Position::new(row, column));
        debug!(player = player.number(), row, column, "piece placed");

        // Win takes precedence over a board that just filled up
        if let Some(line) = win::line_through(&self.board, Position::new(row, column)) {
            self.winning_line = Some(line);
            self.outcome = Some(GameOutcome::Won(player));
            info!(player = player.number(), moves = self.move_count, "game won");
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tied);
            info!(moves = self.move_count, "game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            col: column,
            player,
            outcome: self.outcome,
        })
    }

    /// Handle a column selection from the presentation layer, reporting what
    /// happened to `observer` before returning.
    pub fn column_selected<O>(
        &mut self,
        column: usize,
        observer: &mut O,
    ) -> Result<Placement, MoveError>
    where
        O: GameObserver + ?Sized,
    {
        let result = self.drop_piece(column);
        match &result {
            Ok(placement) => {
                observer.notify(&Notification::Placed {
                    row: placement.row,
                    col: placement.col,
                    player: placement.player,
                });
                if let Some(outcome) = placement.outcome {
                    observer.notify(&Notification::GameOver { outcome });
                }
            }
            Err(err) => observer.notify(&Notification::Rejected(err.clone())),
        }
        result
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
