use crate::cards::{Card, Suit};
use crate::command;
use crate::game::Player;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const CARD_WIDTH: u16 = 7;
const CARD_HEIGHT: u16 = 3;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let [header_area, table_area, hand_area, log_area, input_area] = Layout::vertical([
        Constraint::Length(5),                   // header: 3 lines + borders
        Constraint::Length(CARD_HEIGHT * 2 + 2), // attack row over defense row
        Constraint::Length(CARD_HEIGHT + 2),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(f.area());

    let game = &app.game;
    let trump = game.trump_card();
    let header_lines = vec![
        Line::from(vec![
            Span::raw("Trump: "),
            Span::styled(trump.short(), suit_style(trump.suit())),
            Span::raw(format!(
                "   Deck: {}   Opponent: {} cards   Round: {}",
                game.deck_remaining(),
                game.opponent_hand_size(),
                game.round()
            )),
        ]),
        Line::from(format!(
            "Attacker: {}   Opponent plays {}",
            game.attacker().label(),
            game.policy_name()
        )),
        Line::from(Span::styled(
            command::prompt_line(game),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("durak-rs").borders(Borders::ALL));
    f.render_widget(header, header_area);

    // Defense cards sit under the attack they cover.
    let title = match game.attacker() {
        Player::Human => "Table (you attack)",
        Player::Opponent => "Table (you defend)",
    };
    f.render_widget(Block::default().title(title).borders(Borders::ALL), table_area);
    let [attack_row, defense_row] =
        Layout::vertical([Constraint::Length(CARD_HEIGHT), Constraint::Length(CARD_HEIGHT)])
            .areas(inner(table_area));
    let attacks: Vec<Card> = game.table().attacks().collect();
    let defenses: Vec<Card> = game.table().defenses().collect();
    render_card_row(f, attack_row, &attacks, Some(Color::Yellow), trump.suit());
    render_card_row(f, defense_row, &defenses, Some(Color::Green), trump.suit());

    let hand = game.hand().sorted_for_display(trump.suit());
    f.render_widget(
        Block::default().title(format!("Your hand ({})", hand.len())).borders(Borders::ALL),
        hand_area,
    );
    render_card_row(f, inner(hand_area), &hand, Some(Color::Cyan), trump.suit());

    let visible = usize::from(log_area.height.saturating_sub(2));
    let log = app.log();
    let start = log.len().saturating_sub(visible);
    let log_lines: Vec<Line> = log[start..].iter().map(String::as_str).map(log_line).collect();
    let log_para = Paragraph::new(log_lines)
        .block(Block::default().title("Log").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(log_para, log_area);

    let input = Paragraph::new(Line::from(vec![
        Span::raw("> "),
        Span::raw(app.input()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(Block::default().title("Command (? help)").borders(Borders::ALL));
    f.render_widget(input, input_area);
}

fn log_line(text: &str) -> Line<'_> {
    let style = if text.starts_with("> ") {
        Style::default().fg(Color::DarkGray)
    } else if text.starts_with("Rejected") || text.starts_with("Unknown command") {
        Style::default().fg(Color::Red)
    } else if text.starts_with("Game over") {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(text, style))
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Moves:", bold)),
        Line::from("- Rank-suit: play a card (Queen-clubs, 7-hearts, 10d, Qc)"),
        Line::from("- pass: stop throwing in after a defended attack"),
        Line::from("- take: pick up the table instead of defending"),
        Line::from(""),
        Line::from(Span::styled("Queries:", bold)),
        Line::from("- info, hand, table, trump, deck, opponent"),
        Line::from("- history, rules, ranks, suits, about, help"),
        Line::from(""),
        Line::from(Span::styled("Keys:", bold)),
        Line::from("- Enter: submit   Esc: clear input"),
        Line::from("- Ctrl-N or 'new': new game once this one is over"),
        Line::from("- Ctrl-C or 'quit': leave"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn render_card_row(f: &mut Frame, area: Rect, cards: &[Card], border: Option<Color>, trump: Suit) {
    let fit = usize::from(area.width / CARD_WIDTH);
    let slots =
        Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); cards.len().min(fit)]).split(area);
    for (slot, &card) in slots.iter().zip(cards) {
        let edge = if card.is_trump(trump) { Some(Color::Magenta) } else { border };
        render_card_widget(f, *slot, card, edge);
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Card, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = Line::from(Span::styled(card.short(), suit_style(card.suit())));
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
