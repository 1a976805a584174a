use crate::game::{Cell, GameState, Player, Position};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Lines for the framed board: column numbers (optional), the grid, and the
/// selector arrow under `selected_column`. Each cell is three columns wide.
pub fn board_lines(
    state: &GameState,
    selected_column: usize,
    show_column_numbers: bool,
) -> Vec<Line<'static>> {
    let board = state.board();
    let cols = board.cols();
    let winning_line = state.winning_line();
    let last_move = state.last_move();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    if show_column_numbers {
        let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
        for col in 0..cols {
            let label = format!("{:^3}", col + 1);
            if col == selected_column {
                col_line.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
            } else {
                col_line.push(Span::raw(label));
            }
        }
        col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
        lines.push(Line::from(col_line));
    }

    let border = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{border}╗")));

    for (row, cells) in board.iter_rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let span = match cell {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(player) => {
                    let mut style = Style::default().fg(player_color(*player));
                    if winning_line.is_some_and(|line| line.contains(pos)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    } else if last_move == Some(pos) {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    // Selection indicator, hidden once the game is over
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column && !state.is_terminal() {
            let color = player_color(state.current_player());
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(color)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
