//! Scripted play without a terminal UI.
//!
//! A fixed list of columns is fed to a fresh game and everything the engine
//! reports is written out, either as readable lines or as JSON lines.

use std::io::{self, Write};

use serde::Serialize;
use tracing::{info, warn};

use crate::game::{Dimensions, GameOutcome, GameState, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    /// One JSON object per line, tagged by `"event"`.
    Json,
}

/// Last JSON line of a run.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename = "final_board")]
struct FinalBoard {
    rows: Vec<String>,
    outcome: Option<GameOutcome>,
    moves: usize,
}

impl FinalBoard {
    fn from_state(game: &GameState) -> Self {
        FinalBoard {
            rows: game.board().to_string().lines().map(str::to_owned).collect(),
            outcome: game.outcome(),
            moves: game.move_count(),
        }
    }
}

/// Where a scripted run ended up.
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub game: GameState,
    pub notifications: Vec<Notification>,
    /// Moves left unplayed because the game was already over.
    pub ignored: usize,
}

/// Play `moves` in order on a fresh `dims` board and write the report to `out`.
///
/// Rejected moves are reported and play continues. Once the game is over the
/// remaining moves are not forwarded to the engine.
pub fn run<W: Write>(
    dims: Dimensions,
    moves: &[usize],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<HeadlessRun> {
    let mut game = GameState::with_dimensions(dims);
    let mut notifications: Vec<Notification> = Vec::new();
    let mut ignored = 0;

    for (i, &column) in moves.iter().enumerate() {
        // Rejections arrive as notifications
        let _ = game.column_selected(column, &mut notifications);
        if game.is_terminal() && i + 1 < moves.len() {
            ignored = moves.len() - i - 1;
            warn!(ignored, "game over, ignoring remaining moves");
            break;
        }
    }

    match format {
        OutputFormat::Json => {
            for notification in &notifications {
                serde_json::to_writer(&mut *out, notification)?;
                writeln!(out)?;
            }
            serde_json::to_writer(&mut *out, &FinalBoard::from_state(&game))?;
            writeln!(out)?;
        }
        OutputFormat::Human => {
            for notification in &notifications {
                writeln!(out, "{notification}")?;
            }
            writeln!(out)?;
            write!(out, "{}", game.board())?;
            match game.outcome() {
                Some(outcome) => writeln!(out, "Result: {outcome}")?,
                None => writeln!(out, "In progress, {} to move", game.current_player().name())?,
            }
        }
    }

    info!(moves = game.move_count(), status = ?game.status(), "headless game finished");
    Ok(HeadlessRun {
        game,
        notifications,
        ignored,
    })
}
