//! Tic-tac-toe - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            player_one,
            player_two,
        } => {
            let config = config.with_names(player_one, player_two);
            tictactoe_tui::init_file_logging(config.log_file())?;
            tictactoe_tui::run_tui(&config)
        }
        Command::Replay {
            moves,
            player_one,
            player_two,
        } => {
            tictactoe_tui::init_stderr_logging();
            let config = config.with_names(player_one, player_two);
            info!(?moves, "Replaying moves");
            let (engine, last) =
                tictactoe_tui::replay(config.player_one(), config.player_two(), &moves)?;
            println!("{}", tictactoe_tui::summary(&engine, last));
            Ok(())
        }
    }
}
