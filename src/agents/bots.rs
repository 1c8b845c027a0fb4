use crate::cards::Card;
use crate::game::Move;
use crate::hand::Hand;
use crate::table::Table;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{decline, legal_cards, OpponentPolicy};

/// Plays the cheapest legal card, keeping trumps back while a plain card
/// will do. Deterministic for a given hand and table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn cheapest(cards: &[Card]) -> Option<Card> {
        cards.iter().copied().min_by_key(|c| (c.rank(), c.suit().index()))
    }
}

impl OpponentPolicy for GreedyPolicy {
    fn choose(&mut self, hand: &Hand, table: &Table) -> Move {
        let trump = table.trump_suit();
        let (trumps, plain): (Vec<Card>, Vec<Card>) =
            legal_cards(hand, table).into_iter().partition(|c| c.is_trump(trump));
        Self::cheapest(&plain)
            .or_else(|| Self::cheapest(&trumps))
            .map_or_else(|| decline(table), Move::Card)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Picks any legal card at random. While throwing in it stops early with
/// probability `stop_chance`; it never takes while it can cover.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
    stop_chance: f64,
}

impl RandomPolicy {
    pub const DEFAULT_STOP_CHANCE: f64 = 0.3;

    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), stop_chance: Self::DEFAULT_STOP_CHANCE }
    }

    pub fn with_stop_chance(mut self, chance: f64) -> Self {
        self.stop_chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl OpponentPolicy for RandomPolicy {
    fn choose(&mut self, hand: &Hand, table: &Table) -> Move {
        let throwing_in = table.is_attack_turn() && !table.is_empty();
        if throwing_in && self.rng.random_bool(self.stop_chance) {
            return Move::Pass;
        }
        let legal = legal_cards(hand, table);
        legal.choose(&mut self.rng).copied().map_or_else(|| decline(table), Move::Card)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
