//! Game configuration shared by the library, the terminal UI and the CLI.

/// Which policy drives the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OpponentKind {
    /// Cheapest legal card, plain suits before trumps.
    #[default]
    Greedy,
    /// Uniformly random legal card; sometimes stops throwing in early.
    Random,
}

impl OpponentKind {
    pub fn label(self) -> &'static str {
        match self {
            OpponentKind::Greedy => "greedy",
            OpponentKind::Random => "random",
        }
    }
}

/// Settings for a new [`crate::game::Game`].
///
/// ```
/// use durak_rs::config::{GameConfig, OpponentKind};
///
/// let cfg = GameConfig::default().with_seed(7).with_opponent(OpponentKind::Random);
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Shuffle seed; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    pub opponent: OpponentKind,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    /// Config for the next game of a session: a fixed seed advances so
    /// consecutive games are reproducible but not identical.
    pub fn next_game(&self) -> Self {
        Self { seed: self.seed.map(|s| s.wrapping_add(1)), opponent: self.opponent }
    }
}
