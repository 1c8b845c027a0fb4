//! The shared play area for one round.
//!
//! Cards alternate attack, defense, attack, defense. An odd length means the
//! last attack is still unanswered.

use crate::cards::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    trump: Card,
    plays: Vec<Card>,
}

impl Table {
    pub fn new(trump: Card) -> Self {
        Self { trump, plays: Vec::new() }
    }

    pub fn trump_card(&self) -> Card {
        self.trump
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump.suit()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.plays
    }

    /// True when the next card is an attack (opening or throw-in).
    pub fn is_attack_turn(&self) -> bool {
        self.plays.len() % 2 == 0
    }

    /// The attack card waiting for a defense, if any.
    pub fn pending_attack(&self) -> Option<Card> {
        if self.is_attack_turn() {
            None
        } else {
            self.plays.last().copied()
        }
    }

    pub fn attacks(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().step_by(2).copied()
    }

    pub fn defenses(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().skip(1).step_by(2).copied()
    }

    /// Whether `card` may be played next.
    ///
    /// ```
    /// use durak_rs::cards::{Card, Rank, Suit};
    /// use durak_rs::table::Table;
    ///
    /// let mut table = Table::new(Card::new(Rank::Six, Suit::Hearts));
    /// assert!(table.validate(Card::new(Rank::Queen, Suit::Clubs)));
    /// assert!(table.play(Card::new(Rank::Queen, Suit::Clubs)));
    /// assert!(!table.validate(Card::new(Rank::Jack, Suit::Clubs)));
    /// assert!(table.validate(Card::new(Rank::Seven, Suit::Hearts)));
    /// ```
    pub fn validate(&self, card: Card) -> bool {
        match self.plays.last() {
            None => true,
            Some(&last) if !self.is_attack_turn() => card.covers(last, self.trump_suit()),
            Some(_) => self.plays.iter().any(|c| c.rank() == card.rank()),
        }
    }

    /// Append `card` if legal; leaves the table untouched otherwise.
    #[must_use = "a rejected card stays with the caller"]
    pub fn play(&mut self, card: Card) -> bool {
        if !self.validate(card) {
            return false;
        }
        self.plays.push(card);
        true
    }

    /// Empty the table, handing its cards to the caller (the defender takes).
    pub fn collect(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.plays)
    }

    /// Empty the table; the cards leave play.
    pub fn clear(&mut self) {
        self.plays.clear();
    }
}
