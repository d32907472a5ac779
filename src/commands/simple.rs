//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. The clock is checked whenever a line is
//! entered, so an expired round is reported on the next input.

use crate::config::GameConfig;
use crate::game::{Game, GameEvent, GamePhase, Round, RoundHooks};
use crate::output::formatters::countdown_bar;
use crate::output::{print_board, print_round_summary};
use colored::Colorize;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const SEARCH_POLL: Duration = Duration::from_millis(100);
const TIME_BAR_WIDTH: usize = 30;

/// One line of player input
///
/// Commands start with `:` so that any bare word, including "new" or
/// "board", can still be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Quit,
    NewBoard,
    Words,
    Board,
    Unknown(String),
    Word(String),
}

fn parse_entry(input: &str) -> Entry {
    let input = input.trim().to_lowercase();
    let Some(command) = input.strip_prefix(':') else {
        return Entry::Word(input);
    };
    match command.trim() {
        "quit" | "q" | "exit" => Entry::Quit,
        "new" | "n" => Entry::NewBoard,
        "words" | "w" => Entry::Words,
        "board" | "b" => Entry::Board,
        other => Entry::Unknown(other.to_string()),
    }
}

/// Countdown bar plus `m:ss`, as of the round's last tick
fn time_left(round: &Round) -> String {
    format!(
        "[{}] {}",
        countdown_bar(round.remaining(), round.duration(), TIME_BAR_WIDTH),
        round.countdown()
    )
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if there's an I/O error
/// reading user input, or if no board could be searched.
pub fn run_simple(config: GameConfig, seed: Option<u64>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Finder - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find words by chaining adjacent letters (diagonals count).");
    println!("Each cell may be used once per word.\n");
    println!("Commands: ':quit' to exit, ':new' for a new board, ':words' to list your finds,");
    println!("          ':board' to show the board and time left\n");

    let hooks = RoundHooks::new()
        .on_round_start(|| println!("{}", "⏱  Round started!".bright_green().bold()))
        .on_round_end(|| println!("\n{}", "⏰ Time's up!".bright_red().bold()));

    let mut game = Game::with_seed(config, seed)
        .map_err(|e| e.to_string())?
        .with_hooks(hooks);

    start_round(&mut game)?;

    loop {
        let input = get_user_input("Word")?;
        let now = Instant::now();

        if let Some(GameEvent::RoundEnded { .. }) = game.poll(now) {
            show_summary(&game);
            if !play_again()? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            start_round(&mut game)?;
            continue;
        }

        match parse_entry(&input) {
            Entry::Quit => {
                if game.phase() == GamePhase::Playing {
                    show_summary(&game);
                }
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Entry::NewBoard => {
                println!("\n🔄 New board!\n");
                start_round(&mut game)?;
            }
            Entry::Words => {
                if let Some(round) = game.round() {
                    let found = round.words_found();
                    if found.is_empty() {
                        println!("No words found yet.\n");
                    } else {
                        println!("Found so far: {}\n", found.join(", "));
                    }
                }
            }
            Entry::Board => {
                if let Some(board) = game.board() {
                    print_board(board);
                }
                if let Some(round) = game.round() {
                    println!("Time left: {}\n", time_left(round));
                }
            }
            Entry::Unknown(command) => {
                println!("{} Unknown command ':{command}'\n", "✗".red());
            }
            Entry::Word(word) => match game.try_submit_at(&word, now) {
                Ok(word) => {
                    let found = game.round().map_or(0, |r| r.words_found().len());
                    println!(
                        "{} {} ({found}/{})\n",
                        "✓".green().bold(),
                        word.to_uppercase().bright_white().bold(),
                        game.findable_words().len()
                    );
                }
                Err(rejection) => println!("{} {rejection}\n", "✗".red()),
            },
        }
    }
}

/// Generate a board and block until its word search finishes
fn start_round(game: &mut Game) -> Result<(), String> {
    game.new_round().map_err(|e| e.to_string())?;
    println!("Searching the board...");

    loop {
        match game.wait_for_search(SEARCH_POLL) {
            Some(GameEvent::RoundStarted { findable }) => {
                if let Some(board) = game.board() {
                    print_board(board);
                }
                println!("{findable} words to find.\n");
                return Ok(());
            }
            Some(GameEvent::SearchFailed { reason, retrying }) => {
                println!("{} {reason}", "Search failed:".red());
                if !retrying {
                    return Err(format!("Could not search the board: {reason}"));
                }
                println!("Trying a new board...");
            }
            Some(GameEvent::RoundEnded { .. }) | None => {}
        }
    }
}

fn show_summary(game: &Game) {
    if let Some(round) = game.round() {
        print_round_summary(round.words_found(), game.findable_words());
    }
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
