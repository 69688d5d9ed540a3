//! Terminal front end for two-player tic-tac-toe.
//!
//! The presentation layer around [`tictactoe_core`]: a setup screen for
//! player names, a board screen driven by the keyboard, and a headless
//! `replay` mode for scripted move lists.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
pub mod ui;

pub use app::{App, Control, NameField, Screen, status_message};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::{BoardKey, board_key, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayError, replay, summary};
pub use terminal::run_tui;
