// Engine API boundary. Front-ends (command interpreter, TUI, line mode) drive
// the game through this trait and never reach into `Game` internals.

use crate::cards::Card;
use crate::game::{HistoryEntry, MoveError, MoveReport, Outcome, Player};
use crate::hand::Hand;
use crate::table::Table;

pub trait GameEngine {
    // Player actions
    fn player_play(&mut self, card: Card) -> Result<MoveReport, MoveError>;
    fn player_pass(&mut self) -> Result<MoveReport, MoveError>;
    fn player_take(&mut self) -> Result<MoveReport, MoveError>;

    // Queries
    fn trump_card(&self) -> Card;
    fn deck_remaining(&self) -> usize;
    fn opponent_hand_size(&self) -> usize;
    fn table(&self) -> &Table;
    fn hand(&self) -> &Hand;
    fn opponent_hand(&self) -> &Hand;
    fn attacker(&self) -> Player;
    fn to_act(&self) -> Option<Player>;
    fn outcome(&self) -> Option<Outcome>;
    fn history_recent(&self, n: usize) -> Vec<HistoryEntry>;
}

impl GameEngine for crate::game::Game {
    fn player_play(&mut self, card: Card) -> Result<MoveReport, MoveError> {
        self.player_play(card)
    }
    fn player_pass(&mut self) -> Result<MoveReport, MoveError> {
        self.player_pass()
    }
    fn player_take(&mut self) -> Result<MoveReport, MoveError> {
        self.player_take()
    }

    fn trump_card(&self) -> Card {
        self.trump_card()
    }
    fn deck_remaining(&self) -> usize {
        self.deck_remaining()
    }
    fn opponent_hand_size(&self) -> usize {
        self.opponent_hand_size()
    }
    fn table(&self) -> &Table {
        self.table()
    }
    fn hand(&self) -> &Hand {
        self.hand()
    }
    fn opponent_hand(&self) -> &Hand {
        self.opponent_hand()
    }
    fn attacker(&self) -> Player {
        self.attacker()
    }
    fn to_act(&self) -> Option<Player> {
        self.to_act()
    }
    fn outcome(&self) -> Option<Outcome> {
        self.outcome()
    }
    fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        self.history_recent(n)
    }
}
