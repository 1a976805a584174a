use std::sync::Arc;

use parking_lot::Mutex;

use super::events::{GameObserver, Notification};
use super::state::{GameOutcome, GameState, Placement};
use crate::error::MoveError;

/// A game that several callers can play on. Every drop goes through the one
/// lock owned by this game, so two drops never interleave.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn drop_piece(&self, column: usize) -> Result<Placement, MoveError> {
        self.inner.lock().drop_piece(column)
    }

    /// Notifications for this selection are collected under the lock and
    /// handed to `observer` once it is released, so the observer may call
    /// back into this handle (e.g. `snapshot` to redraw).
    pub fn column_selected<O>(
        &self,
        column: usize,
        observer: &mut O,
    ) -> Result<Placement, MoveError>
    where
        O: GameObserver + ?Sized,
    {
        let mut batch: Vec<Notification> = Vec::new();
        let result = self.inner.lock().column_selected(column, &mut batch);
        for notification in &batch {
            observer.notify(notification);
        }
        result
    }

    /// Copy of the current state, detached from the live game.
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().clone()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.inner.lock().outcome()
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new(GameState::standard())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::game::Player;

    #[test]
    fn test_clones_share_one_game() {
        let game = SharedGame::default();
        let other = game.clone();

        game.drop_piece(0).unwrap();
        other.drop_piece(0).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.move_count(), 2);
        assert_eq!(snapshot.board().column_height(0), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let game = SharedGame::default();
        let before = game.snapshot();
        game.drop_piece(3).unwrap();
        assert_eq!(before.move_count(), 0);
        assert_eq!(game.snapshot().move_count(), 1);
    }

    #[test]
    fn test_concurrent_drops_fill_column_exactly() {
        let game = SharedGame::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let game = game.clone();
                thread::spawn(move || {
                    (0..5)
                        .filter(|_| game.drop_piece(2).is_ok())
                        .count()
                })
            })
            .collect();

        let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // 20 attempts on a 6-high column: exactly 6 succeed, whichever thread wins
        assert_eq!(accepted, 6);
        let snapshot = game.snapshot();
        assert!(snapshot.board().is_column_full(2));
        assert_eq!(snapshot.move_count(), 6);
    }

    #[test]
    fn test_independent_games_do_not_interfere() {
        let a = SharedGame::default();
        let b = SharedGame::default();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            a.drop_piece(col).unwrap();
        }
        assert!(a.outcome().is_some());
        assert_eq!(b.outcome(), None);
        assert!(b.drop_piece(0).is_ok());
    }

    #[test]
    fn test_observer_can_read_back_through_handle() {
        let game = SharedGame::default();
        let reader = game.clone();
        let mut seen = Vec::new();
        let mut observer = |notification: &Notification| {
            // Would deadlock if the lock were still held here
            let snapshot = reader.snapshot();
            seen.push((notification.clone(), snapshot.move_count()));
        };

        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.column_selected(col, &mut observer).unwrap();
        }

        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0].1, 1);
        assert_eq!(
            seen.last(),
            Some(&(
                Notification::GameOver {
                    outcome: GameOutcome::Won(Player::One)
                },
                7
            ))
        );
    }

    #[test]
    fn test_column_selected_through_handle() {
        let game = SharedGame::default();
        let mut events: Vec<Notification> = Vec::new();
        game.column_selected(10, &mut events).unwrap_err();
        assert_eq!(
            events,
            vec![Notification::Rejected(MoveError::InvalidColumn {
                column: 10,
                cols: 7
            })]
        );
    }
}
