//! Application state and key handling.
//!
//! `App` is the presentation state machine: a setup screen collecting two
//! names, then a board screen feeding moves to the engine. It never touches
//! the board directly; every change goes through [`GameEngine::init_game`]
//! or [`GameEngine::play_round`].

use crate::config::TuiConfig;
use crate::input::{self, BoardKey};
use crossterm::event::KeyCode;
use tictactoe_core::{GameEngine, Outcome, Position, Rejection, RoundOutcome};
use tracing::{debug, info, instrument, warn};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entering player names.
    Setup,
    /// Board visible, match running or just finished.
    Playing,
}

/// Name input that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// First player (X).
    PlayerOne,
    /// Second player (O).
    PlayerTwo,
}

impl NameField {
    fn other(self) -> Self {
        match self {
            NameField::PlayerOne => NameField::PlayerTwo,
            NameField::PlayerTwo => NameField::PlayerOne,
        }
    }
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the program.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    default_names: [String; 2],
    screen: Screen,
    names: [String; 2],
    focus: NameField,
    cursor: Position,
    status: String,
}

impl App {
    /// Creates the application on the setup screen.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            default_names: [config.player_one().clone(), config.player_two().clone()],
            screen: Screen::Setup,
            names: [String::new(), String::new()],
            focus: NameField::PlayerOne,
            cursor: Position::Center,
            status: String::new(),
        }
    }

    /// The engine driving the match.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Text typed into a name field.
    pub fn name_input(&self, field: NameField) -> &str {
        &self.names[field as usize]
    }

    /// Name used if `field` is left blank.
    pub fn default_name(&self, field: NameField) -> &str {
        &self.default_names[field as usize]
    }

    /// Name field with keyboard focus.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line shown under the board.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if key == KeyCode::Esc {
            return Control::Quit;
        }
        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_board_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyCode) -> Control {
        let field = self.focus as usize;
        match key {
            KeyCode::Char(c) => self.names[field].push(c),
            KeyCode::Backspace => {
                self.names[field].pop();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Enter => match self.focus {
                NameField::PlayerOne => self.focus = NameField::PlayerTwo,
                NameField::PlayerTwo => self.start_game(),
            },
            _ => {}
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) -> Control {
        let Some(action) = input::board_key(key) else {
            return Control::Continue;
        };
        match action {
            BoardKey::Move(rows, cols) => {
                self.cursor = input::move_cursor(self.cursor, rows, cols);
            }
            BoardKey::PlayCursor => self.play_index(self.cursor.to_index()),
            BoardKey::PlayIndex(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play_index(index);
            }
            BoardKey::Restart if self.engine.is_over() => self.restart(),
            BoardKey::Restart => debug!("Restart ignored while match is running"),
            BoardKey::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Starts a match with the typed names, falling back to defaults.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        let [one, two] = [NameField::PlayerOne, NameField::PlayerTwo].map(|field| {
            let typed = self.name_input(field).trim();
            if typed.is_empty() {
                self.default_name(field).to_string()
            } else {
                typed.to_string()
            }
        });
        info!(player_one = %one, player_two = %two, "Starting match from setup screen");

        self.engine.init_game(one, two);
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.status = status_message(&self.engine, None);
    }

    /// Sends a move to the engine and refreshes the status line.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) {
        match self.engine.play_round(index) {
            Ok(outcome) => {
                debug!(?outcome, "Round played");
                self.status = status_message(&self.engine, Some(outcome));
            }
            Err(e) => {
                warn!(error = %e, "Move index rejected");
                self.status = e.to_string();
            }
        }
    }

    /// Returns to the setup screen with empty name fields.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting");
        self.screen = Screen::Setup;
        self.names = [String::new(), String::new()];
        self.focus = NameField::PlayerOne;
        self.status.clear();
    }
}

/// Status text after a round, or for a freshly started match.
pub fn status_message(engine: &GameEngine, last: Option<RoundOutcome>) -> String {
    let current = engine
        .current_player()
        .map(|p| p.name().as_str())
        .unwrap_or_default();

    match last {
        None | Some(RoundOutcome::Continue { .. }) => format!("{}'s turn", current),
        Some(RoundOutcome::Finished(Outcome::Winner(marker))) => {
            let winner = engine
                .player(marker)
                .map(|p| p.name().as_str())
                .unwrap_or_default();
            format!("{} wins!", winner)
        }
        Some(RoundOutcome::Finished(Outcome::Tie)) => "It's a tie!".to_string(),
        Some(RoundOutcome::Rejected(Rejection::Occupied(_))) => {
            format!("That square is taken. {}'s turn", current)
        }
        Some(RoundOutcome::Rejected(Rejection::GameOver)) => "The game is over.".to_string(),
        Some(RoundOutcome::Rejected(Rejection::NotStarted)) => "Start a game first.".to_string(),
    }
}
