use std::fmt;

use serde::Serialize;

use super::player::Player;
use super::state::GameOutcome;
use crate::error::MoveError;

/// What the engine reports back after each column selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    Placed { row: usize, col: usize, player: Player },
    Rejected(MoveError),
    GameOver { outcome: GameOutcome },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Placed { row, col, player } => {
                write!(f, "{} placed at row {row}, column {col}", player.name())
            }
            Notification::Rejected(err) => write!(f, "rejected: {err}"),
            Notification::GameOver { outcome } => write!(f, "game over: {outcome}"),
        }
    }
}

/// Receiver of engine notifications, typically the presentation layer.
///
/// Notifications are delivered synchronously, in order, before
/// [`GameState::column_selected`](super::GameState::column_selected) returns.
pub trait GameObserver {
    fn notify(&mut self, notification: &Notification);
}

impl GameObserver for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

impl<F> GameObserver for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}
