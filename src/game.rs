use crate::agents::{self, OpponentPolicy};
use crate::cards::{Card, Suit};
use crate::config::GameConfig;
use crate::deck::{Deck, DeckError, DECK_SIZE};
use crate::hand::Hand;
use crate::table::Table;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Hands are topped up to this many cards between rounds.
pub const HAND_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Opponent => "Opponent",
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    HumanWins,
    OpponentWins,
    Draw,
}

impl Outcome {
    /// The player left holding cards, if any.
    pub fn fool(self) -> Option<Player> {
        match self {
            Outcome::HumanWins => Some(Player::Opponent),
            Outcome::OpponentWins => Some(Player::Human),
            Outcome::Draw => None,
        }
    }
}

/// One action by either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Card(Card),
    /// Attacker stops throwing in; the table is discarded.
    Pass,
    /// Defender gives up and picks up the table.
    Take,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Card(c) => write!(f, "{c}"),
            Move::Pass => f.write_str("pass"),
            Move::Take => f.write_str("take"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Taken,
    Passed,
    Repelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub round: u32,
    pub player: Player,
    pub mv: Move,
}

/// What happened as a consequence of one accepted player action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct MoveReport {
    /// Opponent replies, in order. Usually one; two when the opponent repels
    /// an attack with initiative and opens the next round.
    pub opponent_moves: Vec<Move>,
    /// Whether any cards were drawn from the deck.
    pub redistributed: bool,
    pub outcome: Option<Outcome>,
}

impl MoveReport {
    /// The opponent's most recent reply.
    pub fn opponent_move(&self) -> Option<Move> {
        self.opponent_moves.last().copied()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("unknown card: '{0}'")]
    UnknownCard(String),
    #[error("you do not hold {0}")]
    CardNotInHand(Card),
    #[error("{0} cannot be played now")]
    IllegalMove(Card),
    #[error("pass is only allowed after a defended attack")]
    PassNotAllowed,
    #[error("take is only allowed while defending")]
    TakeNotAllowed,
    #[error("the game is over")]
    GameOver,
    #[error("it is not your turn")]
    NotYourTurn,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("card dealt twice: {0}")]
    DuplicateCard(Card),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) deck: Deck,
    pub(crate) table: Table,
    pub(crate) human: Hand,
    pub(crate) opponent: Hand,
    pub(crate) discard: Vec<Card>,
    /// Attacker of the current round.
    pub(crate) attacker: Player,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) round: u32,
    policy: Box<dyn OpponentPolicy>,
    history: Vec<HistoryEntry>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh shuffle, greedy opponent, both hands dealt; you attack first.
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let deck = Deck::seeded(seed);
        let mut game = Self::assemble(
            deck,
            Hand::new(),
            Hand::new(),
            Vec::new(),
            Player::Human,
            agents::policy_for(config.opponent, seed),
        );
        let dealt = game.redistribute(Player::Human);
        info!(
            seed,
            trump = %game.trump_card(),
            opponent = game.policy.name(),
            dealt,
            "new game"
        );
        game
    }

    /// Build a game from an explicit position. Cards missing from `deck`,
    /// `human` and `opponent` count as already discarded.
    ///
    /// The position is taken as is: no dealing happens and, when `attacker`
    /// is the opponent, nothing moves until [`Game::resume`] is called.
    pub fn from_layout(
        deck: Deck,
        human: Hand,
        opponent: Hand,
        attacker: Player,
    ) -> Result<Self, SetupError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &c in deck.as_slice().iter().chain(human.as_slice()).chain(opponent.as_slice()) {
            if !seen.insert(c) {
                return Err(SetupError::DuplicateCard(c));
            }
        }
        let discard: Vec<Card> = Card::all().filter(|c| !seen.contains(c)).collect();
        let policy = agents::policy_for(Default::default(), 0);
        Ok(Self::assemble(deck, human, opponent, discard, attacker, policy))
    }

    fn assemble(
        deck: Deck,
        human: Hand,
        opponent: Hand,
        discard: Vec<Card>,
        attacker: Player,
        policy: Box<dyn OpponentPolicy>,
    ) -> Self {
        Self {
            table: Table::new(deck.trump_card()),
            deck,
            human,
            opponent,
            discard,
            attacker,
            outcome: None,
            round: 1,
            policy,
            history: Vec::new(),
        }
    }

    /// Replace the opponent policy.
    pub fn with_policy(mut self, policy: Box<dyn OpponentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn trump_card(&self) -> Card {
        self.deck.trump_card()
    }

    pub fn trump_suit(&self) -> Suit {
        self.deck.trump_suit()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The human player's hand.
    pub fn hand(&self) -> &Hand {
        &self.human
    }

    pub fn opponent_hand(&self) -> &Hand {
        &self.opponent
    }

    pub fn opponent_hand_size(&self) -> usize {
        self.opponent.len()
    }

    /// Cards that left play through a pass or a repelled attack.
    pub fn discarded(&self) -> &[Card] {
        &self.discard
    }

    pub fn attacker(&self) -> Player {
        self.attacker
    }

    pub fn defender(&self) -> Player {
        self.attacker.other()
    }

    /// Who must act next; `None` once the game is over.
    pub fn to_act(&self) -> Option<Player> {
        if self.outcome.is_some() {
            return None;
        }
        if self.table.is_attack_turn() {
            Some(self.attacker)
        } else {
            Some(self.defender())
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Round counter, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        let start = self.history.len().saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn player_play(&mut self, card: Card) -> Result<MoveReport, MoveError> {
        self.player_move(Move::Card(card))
    }

    /// Parse `token` as a card and play it.
    pub fn player_play_token(&mut self, token: &str) -> Result<MoveReport, MoveError> {
        let card =
            Card::from_str(token).map_err(|_| MoveError::UnknownCard(token.trim().to_string()))?;
        self.player_play(card)
    }

    pub fn player_pass(&mut self) -> Result<MoveReport, MoveError> {
        self.player_move(Move::Pass)
    }

    pub fn player_take(&mut self) -> Result<MoveReport, MoveError> {
        self.player_move(Move::Take)
    }

    /// Apply a human move, then let the opponent act until it is the human's
    /// turn again or the game ends.
    pub fn player_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let mut report = MoveReport::default();
        self.apply(Player::Human, mv, &mut report)?;
        self.run_opponent(&mut report);
        report.outcome = self.outcome;
        Ok(report)
    }

    /// Let the opponent act if it holds the move (for positions built with
    /// [`Game::from_layout`]).
    pub fn resume(&mut self) -> MoveReport {
        let mut report = MoveReport::default();
        self.run_opponent(&mut report);
        report.outcome = self.outcome;
        report
    }

    /// Reject `mv` unless `player` may make it right now.
    pub fn check_move(&self, player: Player, mv: Move) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.to_act() != Some(player) {
            return Err(MoveError::NotYourTurn);
        }
        match mv {
            Move::Card(card) => {
                if !self.hand_of(player).contains(card) {
                    return Err(MoveError::CardNotInHand(card));
                }
                if !self.table.validate(card) {
                    return Err(MoveError::IllegalMove(card));
                }
            }
            Move::Pass => {
                if !self.table.is_attack_turn() || self.table.is_empty() {
                    return Err(MoveError::PassNotAllowed);
                }
            }
            Move::Take => {
                if self.table.is_attack_turn() {
                    return Err(MoveError::TakeNotAllowed);
                }
            }
        }
        Ok(())
    }

    fn hand_of(&self, player: Player) -> &Hand {
        match player {
            Player::Human => &self.human,
            Player::Opponent => &self.opponent,
        }
    }

    fn hand_of_mut(&mut self, player: Player) -> &mut Hand {
        match player {
            Player::Human => &mut self.human,
            Player::Opponent => &mut self.opponent,
        }
    }

    fn apply(&mut self, player: Player, mv: Move, report: &mut MoveReport) -> Result<(), MoveError> {
        self.check_move(player, mv)?;
        debug!(round = self.round, ?player, mv = %mv, "move");
        self.history.push(HistoryEntry { round: self.round, player, mv });
        match mv {
            Move::Card(card) => {
                let defending = !self.table.is_attack_turn();
                let card =
                    self.hand_of_mut(player).take(card).map_err(|_| MoveError::CardNotInHand(card))?;
                if !self.table.play(card) {
                    self.hand_of_mut(player).add(card);
                    return Err(MoveError::IllegalMove(card));
                }
                if defending && (self.human.is_empty() || self.opponent.is_empty()) {
                    self.end_round(RoundEnd::Repelled, report);
                }
            }
            Move::Pass => self.end_round(RoundEnd::Passed, report),
            Move::Take => self.end_round(RoundEnd::Taken, report),
        }
        debug_assert!(self.ownership_is_consistent(), "card ownership partition broken");
        Ok(())
    }

    fn end_round(&mut self, how: RoundEnd, report: &mut MoveReport) {
        let attacker = self.attacker;
        let defender = attacker.other();
        let cards = self.table.collect();
        let next_attacker = match how {
            RoundEnd::Taken => {
                self.hand_of_mut(defender).add_all(cards);
                attacker
            }
            RoundEnd::Passed | RoundEnd::Repelled => {
                self.discard.extend(cards);
                defender
            }
        };
        let drawn = self.redistribute(attacker);
        report.redistributed |= drawn > 0;
        self.attacker = next_attacker;
        info!(
            round = self.round,
            ?how,
            drawn,
            deck = self.deck.remaining(),
            ?next_attacker,
            "round over"
        );
        self.round += 1;

        if self.deck.is_empty() {
            self.outcome = match (self.human.is_empty(), self.opponent.is_empty()) {
                (true, true) => Some(Outcome::Draw),
                (true, false) => Some(Outcome::HumanWins),
                (false, true) => Some(Outcome::OpponentWins),
                (false, false) => None,
            };
            if let Some(outcome) = self.outcome {
                info!(?outcome, "game over");
            }
        }
    }

    /// Top both hands up to [`HAND_SIZE`], one card at a time, `first` first.
    fn redistribute(&mut self, first: Player) -> usize {
        let mut drawn = 0;
        loop {
            let before = drawn;
            for p in [first, first.other()] {
                if self.hand_of(p).len() >= HAND_SIZE {
                    continue;
                }
                if let Some(card) = self.deck.draw_one() {
                    debug!(player = ?p, card = %card, "draw");
                    self.hand_of_mut(p).add(card);
                    drawn += 1;
                }
            }
            if drawn == before {
                return drawn;
            }
        }
    }

    fn run_opponent(&mut self, report: &mut MoveReport) {
        while self.to_act() == Some(Player::Opponent) {
            let mv = self.policy.choose(&self.opponent, &self.table);
            match self.apply(Player::Opponent, mv, report) {
                Ok(()) => report.opponent_moves.push(mv),
                Err(err) => {
                    warn!(%err, policy = self.policy.name(), mv = %mv, "opponent chose an illegal move");
                    let fallback = agents::decline(&self.table);
                    if self.apply(Player::Opponent, fallback, report).is_err() {
                        return;
                    }
                    report.opponent_moves.push(fallback);
                }
            }
        }
    }

    /// Deck, both hands, table and discard pile hold every card exactly once.
    pub fn ownership_is_consistent(&self) -> bool {
        let all: Vec<Card> = self
            .deck
            .as_slice()
            .iter()
            .chain(self.human.as_slice())
            .chain(self.opponent.as_slice())
            .chain(self.table.as_slice())
            .chain(&self.discard)
            .copied()
            .collect();
        let unique: HashSet<Card> = all.iter().copied().collect();
        all.len() == DECK_SIZE && unique.len() == DECK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn hand(s: &str) -> Hand {
        Hand::from_cards(parse_cards(s).unwrap())
    }

    fn empty_deck(trump: &str) -> Deck {
        Deck::stacked(Vec::new(), c(trump)).unwrap()
    }

    #[test]
    fn new_game_deals_six_each_and_human_attacks() {
        let g = Game::with_config(&GameConfig::default().with_seed(11));
        assert_eq!(g.hand().len(), HAND_SIZE);
        assert_eq!(g.opponent_hand_size(), HAND_SIZE);
        assert_eq!(g.deck_remaining(), 24);
        assert!(g.table().is_empty());
        assert_eq!(g.to_act(), Some(Player::Human));
        assert_eq!(g.attacker(), Player::Human);
        assert!(g.ownership_is_consistent());
    }

    #[test]
    fn deal_alternates_starting_with_human() {
        let g = Game::with_config(&GameConfig::default().with_seed(5));
        let deck = Deck::seeded(5);
        let order: Vec<Card> = deck.as_slice().iter().rev().copied().collect();
        assert_eq!(g.hand().as_slice()[0], order[0]);
        assert_eq!(g.opponent_hand().as_slice()[0], order[1]);
        assert_eq!(g.hand().as_slice()[1], order[2]);
    }

    #[test]
    fn opponent_without_cover_takes() {
        let mut g = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("7-hearts 8-spades"),
            hand("6-spades 9-clubs"),
            Player::Human,
        )
        .unwrap();
        let before = g.opponent_hand_size();
        let report = g.player_play(c("7-hearts")).unwrap();
        assert_eq!(report.opponent_moves, vec![Move::Take]);
        assert!(!report.redistributed);
        assert_eq!(report.outcome, None);
        assert_eq!(g.opponent_hand_size(), before + 1);
        assert!(g.table().is_empty());
        assert_eq!(g.attacker(), Player::Human);
        assert_eq!(g.to_act(), Some(Player::Human));
    }

    #[test]
    fn take_keeps_attacker_and_attacker_draws_first() {
        let mut g = Game::from_layout(
            Deck::stacked(vec![c("Ace-hearts")], c("Ace-hearts")).unwrap(),
            hand("7-hearts 8-spades"),
            hand("6-spades 9-clubs"),
            Player::Human,
        )
        .unwrap();
        let report = g.player_play(c("7-hearts")).unwrap();
        assert_eq!(report.opponent_move(), Some(Move::Take));
        assert!(report.redistributed);
        assert!(g.hand().contains(c("Ace-hearts")));
        assert_eq!(g.hand().len(), 2);
        assert_eq!(g.opponent_hand_size(), 3);
        assert_eq!(g.deck_remaining(), 0);
    }

    #[test]
    fn pass_discards_and_hands_attack_to_defender() {
        let mut g = Game::from_layout(
            Deck::stacked(vec![c("Ace-hearts"), c("King-hearts")], c("Ace-hearts")).unwrap(),
            hand("6-spades 8-diamonds 10-clubs"),
            hand("7-spades 9-diamonds Jack-clubs"),
            Player::Human,
        )
        .unwrap();
        let report = g.player_play(c("6-spades")).unwrap();
        assert_eq!(report.opponent_moves, vec![Move::Card(c("7-spades"))]);
        assert_eq!(g.table().len(), 2);
        assert_eq!(g.to_act(), Some(Player::Human));

        let report = g.player_pass().unwrap();
        assert!(report.redistributed);
        assert_eq!(report.opponent_moves, vec![Move::Card(c("9-diamonds"))]);
        assert_eq!(g.attacker(), Player::Opponent);
        assert_eq!(g.to_act(), Some(Player::Human));
        assert!(g.hand().contains(c("King-hearts")));
        assert!(g.opponent_hand().contains(c("Ace-hearts")));
        assert!(g.discarded().contains(&c("6-spades")));
        assert!(g.discarded().contains(&c("7-spades")));
    }

    #[test]
    fn defending_with_last_card_earns_initiative() {
        let mut g = Game::from_layout(
            Deck::stacked(vec![c("Ace-hearts"), c("King-clubs"), c("Queen-clubs")], c("Ace-hearts"))
                .unwrap(),
            hand("7-clubs"),
            hand("6-clubs 8-spades 9-spades"),
            Player::Opponent,
        )
        .unwrap();
        let opening = g.resume();
        assert_eq!(opening.opponent_moves, vec![Move::Card(c("6-clubs"))]);
        assert_eq!(g.to_act(), Some(Player::Human));

        let report = g.player_play(c("7-clubs")).unwrap();
        assert!(report.opponent_moves.is_empty());
        assert!(report.redistributed);
        assert_eq!(g.attacker(), Player::Human);
        assert_eq!(g.to_act(), Some(Player::Human));
        assert!(g.table().is_empty());
        // Opponent attacked, so it drew first: Queen-clubs, then King-clubs to us, then the trump.
        assert!(g.opponent_hand().contains(c("Queen-clubs")));
        assert!(g.opponent_hand().contains(c("Ace-hearts")));
        assert_eq!(g.hand().as_slice(), &[c("King-clubs")]);
    }

    #[test]
    fn opponent_repelling_with_initiative_opens_next_round() {
        let mut g = Game::from_layout(
            Deck::stacked(vec![c("Ace-hearts"), c("King-clubs"), c("Queen-clubs")], c("Ace-hearts"))
                .unwrap(),
            hand("6-clubs 8-spades 9-spades"),
            hand("7-clubs"),
            Player::Human,
        )
        .unwrap();
        let report = g.player_play(c("6-clubs")).unwrap();
        assert_eq!(report.opponent_moves.len(), 2);
        assert_eq!(report.opponent_moves[0], Move::Card(c("7-clubs")));
        assert!(matches!(report.opponent_moves[1], Move::Card(_)));
        assert!(report.redistributed);
        assert_eq!(g.attacker(), Player::Opponent);
        assert_eq!(g.table().len(), 1);
        assert_eq!(g.to_act(), Some(Player::Human));
    }

    #[test]
    fn opponent_wins_when_it_empties_with_deck_gone() {
        let mut g = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("7-clubs Ace-spades"),
            hand("6-clubs"),
            Player::Opponent,
        )
        .unwrap();
        g.resume();
        let report = g.player_play(c("7-clubs")).unwrap();
        assert_eq!(report.outcome, Some(Outcome::OpponentWins));
        assert_eq!(g.outcome().and_then(Outcome::fool), Some(Player::Human));
        assert_eq!(g.to_act(), None);
        assert_eq!(g.player_play(c("Ace-spades")), Err(MoveError::GameOver));
        assert_eq!(g.player_pass(), Err(MoveError::GameOver));
        assert_eq!(g.player_take(), Err(MoveError::GameOver));
    }

    #[test]
    fn human_wins_by_defending_with_last_card() {
        let mut g = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("7-clubs"),
            hand("6-clubs Ace-spades"),
            Player::Opponent,
        )
        .unwrap();
        g.resume();
        let report = g.player_play(c("7-clubs")).unwrap();
        assert_eq!(report.outcome, Some(Outcome::HumanWins));
        assert!(g.is_over());
    }

    #[test]
    fn both_empty_is_a_draw() {
        let mut g = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("7-clubs"),
            hand("6-clubs"),
            Player::Opponent,
        )
        .unwrap();
        g.resume();
        let report = g.player_play(c("7-clubs")).unwrap();
        assert_eq!(report.outcome, Some(Outcome::Draw));
        assert_eq!(Outcome::Draw.fool(), None);
    }

    #[test]
    fn taking_after_attacker_played_last_card_ends_game() {
        let mut g = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("6-spades 7-spades"),
            hand("King-clubs"),
            Player::Opponent,
        )
        .unwrap();
        g.resume();
        assert_eq!(g.table().as_slice(), &[c("King-clubs")]);
        let report = g.player_take().unwrap();
        assert_eq!(report.outcome, Some(Outcome::OpponentWins));
        assert_eq!(g.hand().len(), 3);
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut g = Game::from_layout(
            Deck::stacked(vec![c("Ace-hearts")], c("Ace-hearts")).unwrap(),
            hand("7-clubs 8-spades"),
            hand("6-spades 9-clubs"),
            Player::Human,
        )
        .unwrap();
        assert_eq!(g.player_pass(), Err(MoveError::PassNotAllowed));
        assert_eq!(g.player_take(), Err(MoveError::TakeNotAllowed));
        assert_eq!(g.player_play(c("Ace-clubs")), Err(MoveError::CardNotInHand(c("Ace-clubs"))));
        assert_eq!(
            g.player_play_token("Queen-cups"),
            Err(MoveError::UnknownCard("Queen-cups".into()))
        );
        assert_eq!(g.hand().len(), 2);
        assert!(g.table().is_empty());
        assert_eq!(g.history_len(), 0);

        // 9-clubs is off-suit and not trump.
        let report = g.player_play_token("8-spades").unwrap();
        assert_eq!(report.opponent_move(), Some(Move::Take));
    }

    #[test]
    fn illegal_throw_in_is_rejected() {
        let mut g = Game::from_layout(
            Deck::stacked(vec![c("Ace-hearts"), c("King-hearts")], c("Ace-hearts")).unwrap(),
            hand("6-spades 8-diamonds 10-clubs"),
            hand("7-spades 9-diamonds Jack-clubs"),
            Player::Human,
        )
        .unwrap();
        g.player_play(c("6-spades")).unwrap();
        assert_eq!(g.player_play(c("8-diamonds")), Err(MoveError::IllegalMove(c("8-diamonds"))));
        assert_eq!(g.player_take(), Err(MoveError::TakeNotAllowed));
        assert_eq!(g.table().len(), 2);
    }

    #[test]
    fn layout_rejects_duplicates() {
        let err = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("7-clubs"),
            hand("7-clubs"),
            Player::Human,
        )
        .unwrap_err();
        assert_eq!(err, SetupError::DuplicateCard(c("7-clubs")));
    }

    #[test]
    fn layout_puts_missing_cards_in_discard() {
        let g = Game::from_layout(empty_deck("Ace-hearts"), hand("7-clubs"), hand("6-clubs"), Player::Human)
            .unwrap();
        assert_eq!(g.discarded().len(), 34);
        assert!(g.ownership_is_consistent());
    }

    #[test]
    fn policy_can_be_swapped() {
        let g = Game::with_config(&GameConfig::default().with_seed(1))
            .with_policy(Box::new(agents::RandomPolicy::seeded(1)));
        assert_eq!(g.policy_name(), "random");
        assert_eq!(g.defender(), Player::Opponent);
    }

    #[test]
    fn history_records_both_sides() {
        let mut g = Game::from_layout(
            empty_deck("Ace-hearts"),
            hand("7-hearts 8-spades"),
            hand("6-spades 9-clubs"),
            Player::Human,
        )
        .unwrap();
        g.player_play(c("7-hearts")).unwrap();
        let h = g.history_recent(10);
        assert_eq!(h.len(), 2);
        assert_eq!(h[0].player, Player::Human);
        assert_eq!(h[0].mv, Move::Card(c("7-hearts")));
        assert_eq!(h[1].player, Player::Opponent);
        assert_eq!(h[1].mv, Move::Take);
        assert_eq!(h[1].round, 1);
        assert_eq!(g.round(), 2);
    }
}
