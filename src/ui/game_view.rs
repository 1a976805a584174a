use crate::game::{GameOutcome, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, player_color};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    show_column_numbers: bool,
) {
    let board_height = game_state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, show_column_numbers, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_state.board().cols(), chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.outcome() {
        None => {
            let player = game_state.current_player();
            (
                format!(
                    "Current Player: {}  |  Move {}",
                    player.name(),
                    game_state.move_count() + 1
                ),
                player_color(player),
            )
        }
        Some(GameOutcome::Won(player)) => {
            (format!("Game Over  |  {} wins", player.name()), player_color(player))
        }
        Some(GameOutcome::Tied) => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let dims = game_state.dimensions();
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four {}x{}", dims.rows(), dims.cols())),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    show_column_numbers: bool,
    area: Rect,
) {
    let lines = board_widget::board_lines(game_state, selected_column, show_column_numbers);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, cols: usize, area: Rect) {
    let last_digit = cols.min(9);
    let line = Line::from(vec![
        Span::raw("←/→: Move  |  Enter: Drop  |  "),
        Span::styled(
            format!("1-{last_digit}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Drop in column  |  R: Restart  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
