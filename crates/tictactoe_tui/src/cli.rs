//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match on this terminal
    Play {
        /// Default name for player one (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Default name for player two (O)
        #[arg(long)]
        player_two: Option<String>,
    },

    /// Run a list of cell indices through a fresh match and print the result
    Replay {
        /// Comma-separated cell indices (0-8), X moves first
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Name for player one (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for player two (O)
        #[arg(long)]
        player_two: Option<String>,
    },
}
