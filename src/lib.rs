//! durak-rs: rules engine for the two-player card game Fool (Durak)
//!
//! Goals:
//! - One human against a rule-based opponent, 36-card deck, trump suit
//! - Every rejected move leaves the game untouched and returns a `Result`
//! - Deterministic games from a seed, for tests and replays
//!
//! ## Quick start: play a card
//! ```
//! use durak_rs::config::GameConfig;
//! use durak_rs::game::{Game, Player};
//!
//! let mut game = Game::with_config(&GameConfig::default().with_seed(42));
//! assert_eq!(game.to_act(), Some(Player::Human));
//!
//! // Any card opens an attack; the opponent answers straight away.
//! let card = game.hand().as_slice()[0];
//! let report = game.player_play(card).unwrap();
//! assert!(report.opponent_move().is_some());
//! assert!(game.ownership_is_consistent());
//! ```
//!
//! ## Text commands
//! The same game can be driven with the words the terminal front-ends use:
//! ```
//! use durak_rs::command::execute;
//! use durak_rs::game::Game;
//!
//! let mut game = Game::new();
//! let reply = execute(&mut game, "opponent");
//! assert_eq!(reply.lines, vec!["Opponent's cards: 6".to_string()]);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin durak-rs
//! ```

pub mod agents;
pub mod cards;
pub mod command;
pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
