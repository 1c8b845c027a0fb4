use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too.
                if key.kind == KeyEventKind::Press {
                    let _ = handle_key(app, key);
                }
            }
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Translate a key press into an [`InputAction`]. Returns whether the app
/// state changed.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.handle_input(InputAction::Quit),
            KeyCode::Char('n') => app.handle_input(InputAction::NewGame),
            _ => false,
        };
    }
    if app.help_open() {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc => app.handle_input(InputAction::ToggleHelp),
            _ => false,
        };
    }
    match key.code {
        KeyCode::Char('?') => app.handle_input(InputAction::ToggleHelp),
        KeyCode::Enter => app.handle_input(InputAction::Submit),
        KeyCode::Esc => app.handle_input(InputAction::ClearInput),
        KeyCode::Backspace => app.handle_input(InputAction::Backspace),
        KeyCode::Char(c) => app.handle_input(InputAction::Char(c)),
        _ => false,
    }
}
