//! Agents: move-selection policies for the computer opponent.
//!
//! A policy only looks at its own hand and the table; the game applies the
//! move it returns. [`play_out`] drives the human seat with a policy too,
//! which is how self-play tests and benchmarks run whole games.

use crate::cards::Card;
use crate::config::OpponentKind;
use crate::game::{Game, Move, MoveError, Outcome, Player};
use crate::hand::Hand;
use crate::table::Table;
use core::fmt;

/// Chooses a move for whoever must act at `table`.
pub trait OpponentPolicy: fmt::Debug {
    /// Return a card from `hand` the table accepts, or decline with
    /// [`Move::Pass`] / [`Move::Take`] as the table allows.
    fn choose(&mut self, hand: &Hand, table: &Table) -> Move;

    fn name(&self) -> &'static str;
}

mod bots;

pub use bots::{GreedyPolicy, RandomPolicy};

/// Cards in `hand` the table would accept right now.
pub fn legal_cards(hand: &Hand, table: &Table) -> Vec<Card> {
    hand.as_slice().iter().copied().filter(|&c| table.validate(c)).collect()
}

/// The no-card move: take while defending, pass while attacking.
pub fn decline(table: &Table) -> Move {
    if table.is_attack_turn() {
        Move::Pass
    } else {
        Move::Take
    }
}

/// Build the policy selected in a [`crate::config::GameConfig`].
pub fn policy_for(kind: OpponentKind, seed: u64) -> Box<dyn OpponentPolicy> {
    match kind {
        OpponentKind::Greedy => Box::new(GreedyPolicy),
        OpponentKind::Random => Box::new(RandomPolicy::seeded(seed)),
    }
}

/// Let `policy` play the human seat until the game ends or `max_moves`
/// human moves have been made. Returns the outcome if one was reached.
pub fn play_out(
    game: &mut Game,
    policy: &mut dyn OpponentPolicy,
    max_moves: usize,
) -> Result<Option<Outcome>, MoveError> {
    for _ in 0..max_moves {
        match game.to_act() {
            None => break,
            Some(Player::Opponent) => {
                game.resume();
            }
            Some(Player::Human) => {
                let mv = policy.choose(game.hand(), game.table());
                game.player_move(mv)?;
            }
        }
    }
    Ok(game.outcome())
}
