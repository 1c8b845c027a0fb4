use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use durak_rs::config::GameConfig;
use durak_rs::tui::app::{AppState, InputAction};
use durak_rs::tui::controller::handle_key;

fn setup_app() -> AppState {
    AppState::new(GameConfig::default().with_seed(4))
}

fn press(app: &mut AppState, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_str(app: &mut AppState, text: &str) {
    for c in text.chars() {
        let _ = press(app, KeyCode::Char(c));
    }
}

#[test]
fn typing_and_submitting_a_query() {
    let mut app = setup_app();
    type_str(&mut app, "trump");
    assert_eq!(app.input(), "trump");
    assert!(press(&mut app, KeyCode::Backspace));
    assert_eq!(app.input(), "trum");
    type_str(&mut app, "p");
    assert!(press(&mut app, KeyCode::Enter));
    assert!(app.input().is_empty());
    let last = app.log().last().cloned().unwrap_or_default();
    assert_eq!(last, format!("Trump: {}", app.game.trump_card()));
}

#[test]
fn escape_clears_the_input_line() {
    let mut app = setup_app();
    type_str(&mut app, "tak");
    assert!(press(&mut app, KeyCode::Esc));
    assert!(app.input().is_empty());
}

#[test]
fn help_overlay_swallows_keys() {
    let mut app = setup_app();
    assert!(press(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    assert!(!press(&mut app, KeyCode::Char('x')));
    assert!(app.input().is_empty());
    assert!(press(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
}

#[test]
fn playing_a_card_from_the_keyboard() {
    let mut app = setup_app();
    let card = app.game.hand().as_slice()[0];
    type_str(&mut app, &card.to_string());
    assert!(press(&mut app, KeyCode::Enter));
    assert_eq!(app.game.history_recent(2)[0].mv, durak_rs::game::Move::Card(card));
    assert!(app.log().iter().any(|l| l.starts_with("Opponent")));
}

#[test]
fn ctrl_c_quits_and_ctrl_n_waits_for_game_over() {
    let mut app = setup_app();
    assert!(!handle_key(&mut app, KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
    assert!(!app.should_quit());
    assert!(handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn input_actions_without_keys() {
    let mut app = setup_app();
    assert!(app.handle_input(InputAction::ToggleHelp));
    assert!(app.handle_input(InputAction::ToggleHelp));
    assert!(!app.help_open());
    assert!(!app.handle_input(InputAction::Backspace));
    assert!(app.handle_input(InputAction::Quit));
    assert!(app.should_quit());
}
