//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::Path;
use crate::game::{Game, GameEvent, GamePhase};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// How long to wait for a key before polling the game again
const INPUT_POLL: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: Game,
    pub input: String,
    /// Path of the current input, if it traces
    pub preview: Option<Path>,
    pub messages: Vec<Message>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            input: String::new(),
            preview: None,
            messages: vec![Message {
                text: "Chain adjacent letters to spell words. Enter submits.".to_string(),
                style: MessageStyle::Info,
            }],
            rounds_played: 0,
            should_quit: false,
        }
    }

    /// Create an app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        Ok(Self::new(Game::with_seed(config, seed)?))
    }

    pub fn new_round(&mut self) {
        self.clear_input();
        match self.game.new_round() {
            Ok(id) => {
                info!(%id, "round requested");
                self.add_message("Shuffling a new board...", MessageStyle::Info);
            }
            Err(err) => {
                error!(%err, "could not start search");
                self.add_message(&format!("Could not start search: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Apply any finished search or clock expiry
    pub fn update(&mut self, now: Instant) {
        let Some(event) = self.game.poll(now) else {
            return;
        };

        match event {
            GameEvent::RoundStarted { findable } => {
                self.rounds_played += 1;
                self.add_message(
                    &format!("Go! {findable} words are hiding on this board."),
                    MessageStyle::Success,
                );
                self.refresh_preview();
            }
            GameEvent::RoundEnded { found, findable } => {
                self.clear_input();
                self.add_message(
                    &format!("Time's up! You found {found} of {findable}."),
                    MessageStyle::Info,
                );
                self.add_message("Ctrl-N for a new board, Esc to quit.", MessageStyle::Info);
            }
            GameEvent::SearchFailed { reason, retrying } => {
                let text = if retrying {
                    format!("Search failed ({reason}), trying another board")
                } else {
                    format!("Search failed ({reason}). Ctrl-N to try again.")
                };
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.game.phase() == GamePhase::Playing {
                    self.input.push(c.to_ascii_lowercase());
                    self.refresh_preview();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.refresh_preview();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.clear_input();
                }
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let input = std::mem::take(&mut self.input);
        match self.game.try_submit(&input) {
            Ok(word) => {
                self.add_message(&format!("+ {}", word.to_uppercase()), MessageStyle::Success);
            }
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
        self.refresh_preview();
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        self.preview = self.game.preview(&self.input);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(INPUT_POLL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::Dictionary;
    use std::sync::Arc;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn playing_app() -> App {
        let config = GameConfig::default()
            .with_dictionary(Arc::new(Dictionary::new(["cat", "cats", "sat", "act"])));
        let mut game = Game::with_seed(config, Some(5)).unwrap();
        game.load_board(Board::parse("ca/ts").unwrap()).unwrap();
        game.wait_for_search(Duration::from_secs(10)).unwrap();
        App::new(game)
    }

    #[test]
    fn typing_updates_preview() {
        let mut app = playing_app();
        type_word(&mut app, "CA");
        assert_eq!(app.input, "ca");
        assert_eq!(app.preview.as_ref().map(Path::len), Some(2));

        type_word(&mut app, "x");
        assert!(app.preview.is_none());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.preview.as_ref().map(Path::len), Some(2));
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut app = playing_app();
        type_word(&mut app, "cat");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert!(app.preview.is_none());
        assert_eq!(app.game.round().unwrap().words_found(), &["cat"]);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);

        type_word(&mut app, "cat");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn escape_clears_then_quits() {
        let mut app = playing_app();
        type_word(&mut app, "ca");
        press(&mut app, KeyCode::Esc);
        assert!(app.input.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = playing_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input.is_empty());
    }

    #[test]
    fn typing_ignored_while_loading() {
        let config = GameConfig::default().with_dictionary(Arc::new(Dictionary::new(["cat"])));
        let mut app = App::from_config(config, Some(1)).unwrap();
        type_word(&mut app, "cat");
        assert!(app.input.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = playing_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
