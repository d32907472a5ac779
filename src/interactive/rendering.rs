//! TUI rendering with ratatui
//!
//! Board grid, countdown, found words and input line.

use super::app::{App, MessageStyle};
use crate::core::{Board, Position};
use crate::game::{GamePhase, Round};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Countdown
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_countdown(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD FINDER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Time ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let (ratio, label, color) = match (app.game.phase(), app.game.round()) {
        (GamePhase::Playing, Some(round)) => {
            let total = round.duration().as_secs_f64();
            let ratio = if total > 0.0 {
                round.remaining().as_secs_f64() / total
            } else {
                0.0
            };
            let color = if ratio < 0.2 { Color::Red } else { Color::Green };
            (ratio, round.countdown().to_string(), color)
        }
        (GamePhase::Over, _) => (0.0, "Time's up".to_string(), Color::Red),
        (GamePhase::Loading, _) => (1.0, "Loading...".to_string(), Color::DarkGray),
        _ => (0.0, "No round".to_string(), Color::DarkGray),
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, area);
}

fn board_text(board: &Board) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.height() * 2);
    for row in 0..board.height() {
        let spans: Vec<Span> = (0..board.width())
            .filter_map(|column| board.cell(Position::new(row, column)))
            .map(|cell| {
                let style = if cell.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                };
                Span::styled(format!(" {} ", cell.letter.to_ascii_uppercase()), style)
            })
            .flat_map(|span| [span, Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match (app.game.phase(), app.game.board()) {
        (GamePhase::Loading, _) => vec![Line::from(Span::styled(
            "Finding every word on a fresh board...",
            Style::default().fg(Color::DarkGray),
        ))],
        (_, Some(board)) => board_text(board),
        (_, None) => vec![Line::from("Press Ctrl-N to start")],
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_found_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let found = app.game.round().map(Round::words_found).unwrap_or_default();

    let mut lines: Vec<Line> = found
        .iter()
        .rev()
        .map(|word| {
            Line::from(Span::styled(
                word.to_uppercase(),
                Style::default().fg(Color::Green),
            ))
        })
        .collect();

    // Reveal what was missed once the round is over
    if app.game.phase() == GamePhase::Over {
        let missed: Vec<&str> = app
            .game
            .findable_words()
            .iter()
            .filter(|word| !found.contains(*word))
            .map(String::as_str)
            .collect();
        if !missed.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Missed: {}", missed.join(", ")),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let title = format!(" Found {}/{} ", found.len(), app.game.findable_words().len());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.game.phase() {
        GamePhase::Playing if app.input.is_empty() => (" Type a word ", Color::Yellow),
        GamePhase::Playing if app.preview.is_some() => (" Enter to submit ", Color::Green),
        GamePhase::Playing => (" Not on the board ", Color::Red),
        GamePhase::Loading => (" Please wait ", Color::DarkGray),
        GamePhase::Over | GamePhase::Idle => (" Ctrl-N for a new board ", Color::DarkGray),
    };

    let input = Paragraph::new(app.input.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "Round {} | Dictionary: {} words | Enter: Submit | Esc: Clear/Quit | Ctrl-N: New | Ctrl-C: Quit",
        app.rounds_played,
        app.game.dictionary().len()
    );
    let help = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
