use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{Dimensions, GameObserver, GameOutcome, GameState, Notification};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

/// Message line fed by engine notifications.
#[derive(Debug, Default)]
struct StatusMessage {
    text: Option<String>,
}

impl GameObserver for StatusMessage {
    fn notify(&mut self, notification: &Notification) {
        self.text = match notification {
            Notification::Placed { .. } => None,
            Notification::Rejected(MoveError::ColumnFull { column }) => {
                Some(format!("Column {} is full!", column + 1))
            }
            Notification::Rejected(MoveError::InvalidColumn { .. }) => {
                Some("Invalid column!".to_string())
            }
            Notification::Rejected(MoveError::GameAlreadyOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
            Notification::GameOver { outcome } => Some(match outcome {
                GameOutcome::Won(player) => {
                    format!("{} wins! Press 'r' to play again.", player.name())
                }
                GameOutcome::Tied => "It's a tie! Press 'r' to play again.".to_string(),
            }),
        };
    }
}

pub struct App {
    game_state: GameState,
    dims: Dimensions,
    selected_column: usize,
    start_column: usize,
    show_column_numbers: bool,
    should_quit: bool,
    message: StatusMessage,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dims = config.board.dimensions()?;
        let start_column = config.start_column();
        Ok(App {
            game_state: GameState::with_dimensions(dims),
            dims,
            selected_column: start_column,
            start_column,
            show_column_numbers: config.ui.show_column_numbers,
            should_quit: false,
            message: StatusMessage::default(),
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.text.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.dims.cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.column_selected(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.dims.cols() {
                    self.selected_column = column;
                }
                self.column_selected(column);
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::with_dimensions(self.dims);
                self.selected_column = self.start_column;
                self.message.text = Some("New game started!".to_string());
                debug!("game restarted");
            }
            _ => {}
        }
    }

    /// Forward a column choice to the engine; the outcome arrives as
    /// notifications on the message line.
    fn column_selected(&mut self, column: usize) {
        debug!(column, "column selected");
        let _ = self.game_state.column_selected(column, &mut self.message);
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message.text,
            self.show_column_numbers,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(&AppConfig::default()).unwrap();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.message(), None);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.board.cols = 2;
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn test_selector_clamped_to_board() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().get(5, 3), Cell::Occupied(Player::One));
        assert_eq!(app.game_state().current_player(), Player::Two);
    }

    #[test]
    fn test_digit_keys_select_and_drop() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column(), 0);
        assert_eq!(app.game_state().board().get(5, 0), Cell::Occupied(Player::One));

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message(), Some("Invalid column!"));
        assert_eq!(app.selected_column(), 0);
        assert_eq!(app.game_state().move_count(), 1);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column 4 is full!"));
        assert_eq!(app.game_state().move_count(), 6);
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        for c in ['1', '2', '1', '2', '1', '2', '1'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.message(), Some("Player 1 wins! Press 'r' to play again."));
        assert!(screen(&app).contains("Player 1 wins"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().move_count(), 0);
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_restart_keeps_configured_size() {
        let mut config = AppConfig::default();
        config.board.rows = 4;
        config.board.cols = 5;
        let mut app = App::new(&config).unwrap();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().dimensions(), Dimensions::new(4, 5).unwrap());
        assert_eq!(app.selected_column(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_screen_shows_current_player() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        assert!(screen(&app).contains("Current Player: Player 1"));
        press(&mut app, KeyCode::Enter);
        assert!(screen(&app).contains("Current Player: Player 2"));
    }
}
