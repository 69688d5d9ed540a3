//! Interactive terminal session.

use crate::app::{App, Control};
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

/// Puts the terminal back in cooked mode on the main screen when dropped.
///
/// Created right after raw mode is enabled, so a failure anywhere later in
/// setup still restores the terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let steps: [(&'static str, TeardownStep<'_>); 2] = [
            ("disable raw mode", Box::new(disable_raw_mode)),
            (
                "leave alternate screen",
                Box::new(|| execute!(io::stdout(), LeaveAlternateScreen, Show)),
            ),
        ];
        if let Err(e) = run_teardown(steps) {
            error!(error = %e, "Terminal not fully restored");
        }
    }
}

type TeardownStep<'a> = Box<dyn FnOnce() -> io::Result<()> + 'a>;

/// Runs every step even if earlier ones fail; returns the first error.
fn run_teardown<'a>(
    steps: impl IntoIterator<Item = (&'static str, TeardownStep<'a>)>,
) -> io::Result<()> {
    let mut first_err = None;
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!(step = name, error = %e, "Terminal teardown step failed");
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Runs the interactive front end until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(config));
    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI closed");
    res
}

/// Redraws after every key press; events are handled one at a time.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
