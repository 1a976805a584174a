//! # Connect Four
//!
//! A Connect Four rules engine with a terminal front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, player, state machine,
//!   notifications
//! - [`ui`] — Terminal UI: board rendering and key handling
//! - [`headless`] — Scripted play from a list of columns, text or JSON output
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod ui;
