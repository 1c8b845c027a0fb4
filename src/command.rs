//! Text command interpreter.
//!
//! Maps one line of user input to an engine call and renders the result as
//! text lines. Commands are looked up in a static table; anything shaped like
//! a card (`Queen-clubs`, `7-h`, `Qc`) is played from the hand. The terminal
//! UI and the line-mode REPL share this module.

use crate::cards::{Card, Rank, Suit};
use crate::engine::GameEngine;
use crate::game::{Move, MoveError, MoveReport, Outcome, Player, HAND_SIZE};
use tracing::warn;

/// Text produced by one command plus session-level requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Response {
    pub lines: Vec<String>,
    /// Leave the session.
    pub quit: bool,
    /// Start a fresh game (only granted once the current one is over).
    pub new_game: bool,
}

impl Response {
    fn text(lines: Vec<String>) -> Self {
        Self { lines, ..Self::default() }
    }
}

const HISTORY_LINES: usize = 10;

type Handler = fn(&mut dyn GameEngine) -> Vec<String>;

struct Command {
    name: &'static str,
    aliases: &'static [&'static str],
    summary: &'static str,
    listed: bool,
    run: Handler,
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        aliases: &["commands", "?"],
        summary: "list commands",
        listed: true,
        run: cmd_help,
    },
    Command {
        name: "rules",
        aliases: &["game"],
        summary: "short rules of the game",
        listed: true,
        run: cmd_rules,
    },
    Command { name: "ranks", aliases: &[], summary: "card ranks, low to high", listed: true, run: cmd_ranks },
    Command { name: "suits", aliases: &[], summary: "card suits", listed: true, run: cmd_suits },
    Command { name: "trump", aliases: &[], summary: "the trump card", listed: true, run: cmd_trump },
    Command { name: "deck", aliases: &[], summary: "cards left in the deck", listed: true, run: cmd_deck },
    Command {
        name: "opponent",
        aliases: &[],
        summary: "how many cards the opponent holds",
        listed: true,
        run: cmd_opponent,
    },
    Command { name: "table", aliases: &[], summary: "cards on the table", listed: true, run: cmd_table },
    Command { name: "hand", aliases: &[], summary: "your cards", listed: true, run: cmd_hand },
    Command {
        name: "info",
        aliases: &["status"],
        summary: "trump, deck, opponent, table and hand at once",
        listed: true,
        run: cmd_info,
    },
    Command {
        name: "pass",
        aliases: &[],
        summary: "stop throwing in; the table is discarded",
        listed: true,
        run: cmd_pass,
    },
    Command {
        name: "take",
        aliases: &[],
        summary: "stop defending and pick up the table",
        listed: true,
        run: cmd_take,
    },
    Command { name: "history", aliases: &[], summary: "the last few moves", listed: true, run: cmd_history },
    Command { name: "about", aliases: &[], summary: "about this program", listed: true, run: cmd_about },
    Command { name: "cheat", aliases: &[], summary: "peek at the opponent", listed: false, run: cmd_cheat },
];

fn lookup(word: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == word || c.aliases.contains(&word))
}

/// Run one line of input against `engine`.
///
/// ```
/// use durak_rs::command::execute;
/// use durak_rs::config::GameConfig;
/// use durak_rs::game::Game;
///
/// let mut game = Game::with_config(&GameConfig::default().with_seed(1));
/// let out = execute(&mut game, "deck");
/// assert_eq!(out.lines, vec!["Cards in deck: 24".to_string()]);
/// ```
pub fn execute(engine: &mut dyn GameEngine, input: &str) -> Response {
    let word = input.trim();
    if word.is_empty() {
        return Response::default();
    }
    let lower = word.to_lowercase();
    match lower.as_str() {
        "quit" | "exit" => {
            return Response { lines: vec!["Bye.".to_string()], quit: true, new_game: false };
        }
        "new" => {
            if engine.outcome().is_some() {
                return Response {
                    lines: vec!["Shuffling a new deck.".to_string()],
                    quit: false,
                    new_game: true,
                };
            }
            return Response::text(vec!["Finish the current game first.".to_string()]);
        }
        _ => {}
    }
    if let Some(cmd) = lookup(&lower) {
        return Response::text((cmd.run)(engine));
    }
    if word.contains('-') || word.parse::<Card>().is_ok() {
        let result = word
            .parse::<Card>()
            .map_err(|_| MoveError::UnknownCard(word.to_string()))
            .and_then(|card| engine.player_play(card));
        return Response::text(move_lines(engine, result));
    }
    warn!(input = word, "unknown command");
    Response::text(vec![format!("Unknown command '{word}'. Type 'help' for the list.")])
}

/// Greeting shown when a game starts.
pub fn welcome(engine: &dyn GameEngine) -> Vec<String> {
    vec![
        "Welcome to Fool (Durak)!".to_string(),
        format!(
            "The deck is shuffled, {HAND_SIZE} cards each are dealt, the trump is {}.",
            engine.trump_card()
        ),
        "You attack first. Type 'help' for commands.".to_string(),
        hand_line(engine),
    ]
}

/// One line telling the human what is expected of them.
pub fn prompt_line(engine: &dyn GameEngine) -> String {
    if let Some(outcome) = engine.outcome() {
        return outcome_line(outcome).to_string();
    }
    let table = engine.table();
    match engine.to_act() {
        Some(Player::Human) if table.is_empty() => "Your attack: play any card.".to_string(),
        Some(Player::Human) => match table.pending_attack() {
            Some(card) => format!("Defend against {card}: play a covering card or 'take'."),
            None => "Throw in a card whose rank is on the table, or 'pass'.".to_string(),
        },
        _ => "Waiting for the opponent.".to_string(),
    }
}

pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HumanWins => "Game over: you win, the opponent is the Fool!",
        Outcome::OpponentWins => "Game over: you are left holding cards. You are the Fool.",
        Outcome::Draw => "Game over: both hands ran out together. It's a draw.",
    }
}

fn move_lines(engine: &dyn GameEngine, result: Result<MoveReport, MoveError>) -> Vec<String> {
    match result {
        Ok(report) => report_lines(engine, &report),
        Err(err) => {
            warn!(error = %err, "move rejected");
            vec![format!("Rejected: {err}.")]
        }
    }
}

fn report_lines(engine: &dyn GameEngine, report: &MoveReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .opponent_moves
        .iter()
        .map(|mv| match mv {
            Move::Card(card) => format!("Opponent plays {card}."),
            Move::Pass => "Opponent passes.".to_string(),
            Move::Take => "Opponent takes the table.".to_string(),
        })
        .collect();
    if let Some(outcome) = report.outcome {
        lines.push(outcome_line(outcome).to_string());
        lines.push("Type 'new' for another game or 'quit' to leave.".to_string());
        return lines;
    }
    if report.redistributed {
        lines.push("Cards dealt.".to_string());
        lines.push(hand_line(engine));
    }
    lines.push(prompt_line(engine));
    lines
}

fn hand_line(engine: &dyn GameEngine) -> String {
    let cards = engine.hand().sorted_for_display(engine.trump_card().suit());
    let names: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("Your hand: [{}]", names.join(", "))
}

fn table_lines(engine: &dyn GameEngine) -> Vec<String> {
    let table = engine.table();
    if table.is_empty() {
        return vec!["The table is empty.".to_string()];
    }
    let join = |cards: Vec<Card>| cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" | ");
    let attacker = engine.attacker();
    vec![
        format!("Attack ({}):  {}", attacker.label(), join(table.attacks().collect())),
        format!("Defense ({}): {}", attacker.other().label(), join(table.defenses().collect())),
    ]
}

fn cmd_help(_: &mut dyn GameEngine) -> Vec<String> {
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(COMMANDS.iter().filter(|c| c.listed).map(|c| format!("  {:<9} {}", c.name, c.summary)));
    lines.push("  new       start another game once this one is over".to_string());
    lines.push("  quit      leave the game".to_string());
    lines.push("  Rank-suit play a card, e.g. Queen-clubs or 7-hearts".to_string());
    lines
}

fn cmd_rules(_: &mut dyn GameEngine) -> Vec<String> {
    let ranks: Vec<&str> = Rank::ALL.iter().map(|r| r.name()).collect();
    vec![
        format!("Each player starts with {HAND_SIZE} cards; players take turns placing cards on the table."),
        "Name your move as Rank-suit, for example \"Queen-spades\" or \"7-diamonds\".".to_string(),
        "An attack may open with any card; further attack cards must match a rank already on the table.".to_string(),
        "If you cannot or do not want to continue the attack, type 'pass'.".to_string(),
        "Defend by covering the attack card with a higher card of the same suit.".to_string(),
        format!("Ranks from low to high: {}.", ranks.join(", ")),
        "Any trump covers any non-trump card, so the trump Ace cannot be beaten.".to_string(),
        "The trump suit is chosen at random; the card that set it is the last card of the deck.".to_string(),
        "If you cannot or do not want to defend, type 'take': the table goes into your hand".to_string(),
        "and the attacker attacks again. After a pass the defender attacks next.".to_string(),
        format!("After each round hands are topped up to {HAND_SIZE} cards, one at a time, attacker first."),
        "Repel an attack with your last card and you attack next.".to_string(),
        "The game ends once the deck is empty and a hand runs out; whoever still holds cards is the Fool.".to_string(),
    ]
}

fn cmd_ranks(_: &mut dyn GameEngine) -> Vec<String> {
    let names: Vec<&str> = Rank::ALL.iter().map(|r| r.name()).collect();
    vec![format!("{}.", names.join(", "))]
}

fn cmd_suits(_: &mut dyn GameEngine) -> Vec<String> {
    let names: Vec<&str> = Suit::ALL.iter().map(|s| s.name()).collect();
    vec![format!("{}. Suits have no order.", names.join(", "))]
}

fn cmd_trump(engine: &mut dyn GameEngine) -> Vec<String> {
    vec![format!("Trump: {}", engine.trump_card())]
}

fn cmd_deck(engine: &mut dyn GameEngine) -> Vec<String> {
    vec![format!("Cards in deck: {}", engine.deck_remaining())]
}

fn cmd_opponent(engine: &mut dyn GameEngine) -> Vec<String> {
    vec![format!("Opponent's cards: {}", engine.opponent_hand_size())]
}

fn cmd_table(engine: &mut dyn GameEngine) -> Vec<String> {
    table_lines(engine)
}

fn cmd_hand(engine: &mut dyn GameEngine) -> Vec<String> {
    vec![hand_line(engine)]
}

fn cmd_info(engine: &mut dyn GameEngine) -> Vec<String> {
    let mut lines = cmd_trump(engine);
    lines.extend(cmd_deck(engine));
    lines.extend(cmd_opponent(engine));
    lines.extend(table_lines(engine));
    lines.push(hand_line(engine));
    lines.push(prompt_line(engine));
    lines
}

fn cmd_pass(engine: &mut dyn GameEngine) -> Vec<String> {
    let result = engine.player_pass();
    move_lines(engine, result)
}

fn cmd_take(engine: &mut dyn GameEngine) -> Vec<String> {
    let result = engine.player_take();
    move_lines(engine, result)
}

fn cmd_history(engine: &mut dyn GameEngine) -> Vec<String> {
    let entries = engine.history_recent(HISTORY_LINES);
    if entries.is_empty() {
        return vec!["No moves yet.".to_string()];
    }
    entries
        .iter()
        .map(|e| {
            let what = match e.mv {
                Move::Card(card) => format!("played {card}"),
                Move::Pass => "passed".to_string(),
                Move::Take => "took the table".to_string(),
            };
            format!("Round {}: {} {what}", e.round, e.player.label())
        })
        .collect()
}

fn cmd_cheat(engine: &mut dyn GameEngine) -> Vec<String> {
    let cards = engine.opponent_hand().sorted_for_display(engine.trump_card().suit());
    let names: Vec<String> = cards.iter().map(Card::to_string).collect();
    vec![format!("Opponent's hand: [{}]", names.join(", "))]
}

fn cmd_about(_: &mut dyn GameEngine) -> Vec<String> {
    vec![
        format!("durak-rs {}", crate::VERSION),
        "The card game Fool (Durak) against a simple rule-based opponent.".to_string(),
    ]
}
