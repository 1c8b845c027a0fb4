use crate::cards::{Card, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Number of cards in the Fool pack (four suits, Six through Ace).
pub const DECK_SIZE: usize = 36;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
    #[error("trump card {trump} must be the bottom card, found {bottom}")]
    TrumpNotAtBottom { trump: Card, bottom: Card },
}

/// The draw pile.
///
/// Cards are drawn from the end of the internal vector; the trump card sits at
/// index 0 and therefore comes out last. It stays readable after it is drawn.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    trump: Card,
}

impl Deck {
    /// ```
    /// use durak_rs::deck::Deck;
    ///
    /// let deck = Deck::seeded(42);
    /// assert_eq!(deck.remaining(), 36);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Build and shuffle a full pack using the provided RNG.
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        cards.shuffle(rng);
        let trump = cards[0];
        Self { cards, trump }
    }

    /// A deck in a fixed order, bottom card first. `trump` is kept even when
    /// `cards` is empty so an exhausted layout can still be described.
    pub fn stacked(cards: Vec<Card>, trump: Card) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(DeckError::DuplicateCard(c));
            }
        }
        if let Some(&bottom) = cards.first() {
            if bottom != trump {
                return Err(DeckError::TrumpNotAtBottom { trump, bottom });
            }
        }
        Ok(Self { cards, trump })
    }

    pub fn trump_card(&self) -> Card {
        self.trump
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump.suit()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Undrawn cards, bottom (trump) first.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Draw one card from the top of the deck.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards; fewer (possibly none) when the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw_one()).collect()
    }
}
