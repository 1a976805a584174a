//! Terminal UI: a ratatui front-end that forwards column choices to the
//! engine and renders the board it reports back.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
