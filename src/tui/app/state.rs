use crate::command::{self, Response};
use crate::config::GameConfig;
use crate::game::Game;
use tracing::info;

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Char(char),
    Backspace,
    Submit,
    ClearInput,
    ToggleHelp,
    NewGame,
    Quit,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    // Core game engine instance
    pub game: Game,
    // Config of the running game; advanced on each new game
    pub config: GameConfig,
    input: String,
    log: Vec<String>,
    help_open: bool,
    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl AppState {
    /// Oldest log lines are dropped past this.
    pub const LOG_LIMIT: usize = 200;
    pub const INPUT_LIMIT: usize = 32;

    pub fn new(config: GameConfig) -> Self {
        let game = Game::with_config(&config);
        let log = command::welcome(&game);
        Self { game, config, input: String::new(), log, help_open: false, quit: false }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply one input action. Returns whether anything changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Char(c) => {
                if c.is_control() || self.input.chars().count() >= Self::INPUT_LIMIT {
                    return false;
                }
                self.input.push(c);
                true
            }
            InputAction::Backspace => self.input.pop().is_some(),
            InputAction::ClearInput => {
                if self.input.is_empty() {
                    return false;
                }
                self.input.clear();
                true
            }
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                true
            }
            InputAction::NewGame => {
                if !self.game.is_over() {
                    return false;
                }
                self.start_new_game();
                true
            }
            InputAction::Quit => {
                self.quit = true;
                true
            }
            InputAction::Submit => {
                let line = std::mem::take(&mut self.input);
                if line.trim().is_empty() {
                    return false;
                }
                self.push_log(format!("> {}", line.trim()));
                let response = command::execute(&mut self.game, &line);
                self.apply_response(response);
                true
            }
        }
    }

    fn apply_response(&mut self, response: Response) {
        for line in response.lines {
            self.push_log(line);
        }
        if response.quit {
            self.quit = true;
        }
        if response.new_game {
            self.start_new_game();
        }
    }

    fn start_new_game(&mut self) {
        self.config = self.config.next_game();
        self.game = Game::with_config(&self.config);
        info!(seed = ?self.config.seed, "new game requested");
        self.push_log(String::new());
        for line in command::welcome(&self.game) {
            self.push_log(line);
        }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > Self::LOG_LIMIT {
            let excess = self.log.len() - Self::LOG_LIMIT;
            self.log.drain(..excess);
        }
    }
}
