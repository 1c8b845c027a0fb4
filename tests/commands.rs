use durak_rs::agents::{decline, legal_cards, GreedyPolicy, OpponentPolicy};
use durak_rs::command::{execute, outcome_line};
use durak_rs::config::GameConfig;
use durak_rs::engine::GameEngine;
use durak_rs::game::{Game, Move};

#[test]
fn whole_game_through_text_commands() {
    let mut game = Game::with_config(&GameConfig::default().with_seed(77));
    let mut bot = GreedyPolicy;
    let mut last = Vec::new();
    for _ in 0..2_000 {
        if game.outcome().is_some() {
            break;
        }
        let word = match bot.choose(game.hand(), game.table()) {
            Move::Card(card) => card.to_string(),
            Move::Pass => "pass".to_string(),
            Move::Take => "take".to_string(),
        };
        last = execute(&mut game, &word).lines;
        assert!(!last.iter().any(|l| l.starts_with("Rejected")), "{word}: {last:?}");
    }
    let outcome = game.outcome().expect("game finished");
    assert!(last.contains(&outcome_line(outcome).to_string()));
    assert!(execute(&mut game, "new").new_game);
    assert!(execute(&mut game, "pass").lines[0].starts_with("Rejected"));
}

#[test]
fn info_lists_everything_at_once() {
    let mut game = Game::with_config(&GameConfig::default().with_seed(8));
    let lines = execute(&mut game, "Info").lines;
    assert!(lines[0].starts_with("Trump: "));
    assert_eq!(lines[1], "Cards in deck: 24");
    assert_eq!(lines[2], "Opponent's cards: 6");
    assert_eq!(lines[3], "The table is empty.");
    assert!(lines[4].starts_with("Your hand: ["));
    assert_eq!(lines[5], "Your attack: play any card.");
}

#[test]
fn table_shows_attack_and_defense_rows() {
    let mut game = Game::with_config(&GameConfig::default().with_seed(8));
    let engine: &mut dyn GameEngine = &mut game;
    let card = legal_cards(engine.hand(), engine.table())[0];
    let reply = execute(engine, &card.short()).lines;
    if engine.table().is_empty() {
        assert_eq!(reply[0], "Opponent takes the table.");
    } else {
        let rows = execute(engine, "table").lines;
        assert!(rows[0].starts_with("Attack (You):"));
        assert!(rows[0].contains(&card.to_string()));
        assert!(rows[1].starts_with("Defense (Opponent):"));
        assert_eq!(decline(engine.table()), Move::Pass);
    }
}

#[test]
fn reference_words_answer_without_moving() {
    let mut game = Game::with_config(&GameConfig::default().with_seed(9));
    for word in ["help", "commands", "rules", "ranks", "suits", "about", "RULES"] {
        let out = execute(&mut game, word);
        assert!(!out.lines.is_empty(), "{word}");
        assert!(!out.quit && !out.new_game);
    }
    assert_eq!(execute(&mut game, "ranks").lines, vec!["6, 7, 8, 9, 10, Jack, Queen, King, Ace."]);
    assert_eq!(game.history_len(), 0);
}
