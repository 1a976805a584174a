//! Core Connect Four game logic: board representation, win detection, player
//! types, the game state machine and the notifications it reports.

mod board;
mod events;
mod player;
mod shared;
mod state;
pub mod win;

pub use board::{Board, Cell, Dimensions, Position, DEFAULT_COLS, DEFAULT_ROWS};
pub use events::{GameObserver, Notification};
pub use player::Player;
pub use shared::SharedGame;
pub use state::{GameOutcome, GameState, GameStatus, Placement};
pub use win::{Direction, WinningLine, WIN_LENGTH};
