use crate::cards::{Card, Suit};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card not in hand: {0}")]
    NotFound(Card),
}

/// Cards held by one participant. Order carries no meaning.
///
/// ```
/// use durak_rs::cards::{Card, Rank, Suit};
/// use durak_rs::hand::Hand;
///
/// let mut hand = Hand::from_cards(vec![Card::new(Rank::Seven, Suit::Hearts)]);
/// assert!(hand.contains(Card::new(Rank::Seven, Suit::Hearts)));
/// hand.take(Card::new(Rank::Seven, Suit::Hearts)).unwrap();
/// assert!(hand.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Remove one copy of `card` and hand it back.
    pub fn take(&mut self, card: Card) -> Result<Card, HandError> {
        let idx = self.cards.iter().position(|&c| c == card).ok_or(HandError::NotFound(card))?;
        Ok(self.cards.swap_remove(idx))
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Non-trumps first, then trumps; each group by rank.
    pub fn sorted_for_display(&self, trump: Suit) -> Vec<Card> {
        let mut out = self.cards.clone();
        out.sort_by_key(|c| (c.is_trump(trump), c.rank(), c.suit().index()));
        out
    }
}
