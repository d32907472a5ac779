//! Word Finder - CLI
//!
//! Timed word-search game with TUI and CLI modes, plus board tracing and
//! search tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wordfind::{
    commands::{BenchmarkSetup, find_words, run_benchmark, run_simple, trace_word},
    config::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_ROUND_DURATION, GameConfig},
    core::Board,
    dictionary::{Dictionary, loader::load_from_file},
    logging,
    output::{print_benchmark_result, print_find_result, print_trace_result},
};

#[derive(Parser)]
#[command(
    name = "wordfind",
    about = "Timed word-search game on a grid of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board width in cells
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Round length in seconds
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROUND_DURATION.as_secs())]
    duration: u64,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the only log output in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Trace a word on a board and show its path
    Trace {
        /// The word to trace
        word: String,

        /// Board rows separated by '/' (random board if omitted)
        #[arg(short, long)]
        board: Option<String>,
    },

    /// List every dictionary word on a board
    Find {
        /// Board rows separated by '/' (random board if omitted)
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Benchmark the word search on random boards
    Benchmark {
        /// Number of random boards to search
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    if wordlist == "embedded" {
        return Ok(Dictionary::embedded());
    }

    let words = load_from_file(wordlist)
        .with_context(|| format!("Failed to read wordlist {wordlist}"))?;
    let dictionary = Dictionary::new(words);
    if dictionary.is_empty() {
        anyhow::bail!("Wordlist {wordlist} contains no usable words");
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    logging::init(cli.verbose, cli.log_file.as_deref(), tui)?;

    let dictionary = load_dictionary(&cli.wordlist)?;
    info!(words = dictionary.len(), wordlist = %cli.wordlist, "dictionary loaded");

    let config = GameConfig::default()
        .with_board_size(cli.width, cli.height)
        .with_round_duration(Duration::from_secs(cli.duration))
        .with_dictionary(Arc::new(dictionary));
    config.validate().context("Invalid game configuration")?;

    match command {
        Commands::Play => run_play_command(config, cli.seed),
        Commands::Simple => run_simple(config, cli.seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Trace { word, board } => {
            let board = resolve_board(board.as_deref(), &config, cli.seed)?;
            let result =
                trace_word(&board, &word, &config.dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_trace_result(&result);
            Ok(())
        }
        Commands::Find { board } => {
            let board = resolve_board(board.as_deref(), &config, cli.seed)?;
            let result = find_words(board, &config.dictionary);
            print_find_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(&config, count, cli.seed),
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Parse `--board`, or generate a random board from the config
fn resolve_board(text: Option<&str>, config: &GameConfig, seed: Option<u64>) -> Result<Board> {
    if let Some(text) = text {
        return Board::parse(text).with_context(|| format!("Invalid board '{text}'"));
    }

    let sampler = config.sampler()?;
    Ok(sampler.generate_board(
        config.board_width,
        config.board_height,
        &mut seeded_rng(seed),
    ))
}

fn run_benchmark_command(config: &GameConfig, count: usize, seed: Option<u64>) -> Result<()> {
    println!(
        "Running benchmark on {count} random {}x{} boards...",
        config.board_width, config.board_height
    );

    let sampler = config.sampler()?;
    let setup = BenchmarkSetup {
        sampler: &sampler,
        width: config.board_width,
        height: config.board_height,
        dictionary: &config.dictionary,
    };
    let result = run_benchmark(&setup, count, &mut seeded_rng(seed), true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    use wordfind::interactive::{App, run_tui};

    let app = App::from_config(config, seed)?;
    run_tui(app)
}
