//! Display functions for command results

use super::formatters::{board_lines, path_arrows};
use crate::commands::{BenchmarkResult, FindResult, TraceResult};
use crate::core::Board;
use colored::Colorize;

/// Print a board, highlighting selected cells
pub fn print_board(board: &Board) {
    let width = board.width() * 3 + 2;
    println!("\n  ┌{}┐", "─".repeat(width));
    for line in board_lines(board) {
        let letters: Vec<char> = line.chars().collect();
        let rendered: String = letters
            .chunks(3)
            .map(|cell| {
                let text: String = cell.iter().collect();
                if cell[0] == '[' {
                    text.bright_yellow().bold().to_string()
                } else {
                    text.bright_white().to_string()
                }
            })
            .collect();
        println!("  │ {rendered} │");
    }
    println!("  └{}┘\n", "─".repeat(width));
}

/// Print the result of tracing a word
pub fn print_trace_result(result: &TraceResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tracing: {}",
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_board(&result.board);

    match &result.path {
        Some(path) => {
            println!(
                "{}",
                format!("✅ Found: {}", path_arrows(&result.board, path))
                    .green()
                    .bold()
            );
            println!("   Cells: {path}");
        }
        None => println!("{}", "❌ Not on this board".red().bold()),
    }

    if result.in_dictionary {
        println!("   Dictionary: {}", "yes".green());
    } else {
        println!("   Dictionary: {}", "no".yellow());
    }
}

/// Print every word found on a board
pub fn print_find_result(result: &FindResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDS ON BOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_board(&result.board);

    if result.words.is_empty() {
        println!("No dictionary words on this board.");
    } else {
        for (length, words) in result.by_length() {
            println!(
                "{} {}",
                format!("{length:2} letters:").bright_cyan(),
                words.join(", ")
            );
        }
    }

    println!(
        "\n📊 {} words from {} searched in {:.2}ms",
        result.words.len().to_string().bright_yellow().bold(),
        result.dictionary_size,
        result.duration.as_secs_f64() * 1000.0
    );
    if let Some(longest) = result.longest() {
        println!("   Longest: {}", longest.to_uppercase().bright_green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards searched:  {}", result.total_boards);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.total_boards > 0 {
        println!("\n📈 {}", "Longest word per board:".bright_cyan().bold());
        let mut lengths: Vec<_> = result.longest_distribution.iter().collect();
        lengths.sort_unstable();
        for (&length, &count) in lengths {
            let pct = (count as f64 / result.total_boards as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {length:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if let Some((board, words)) = &result.best_board {
        println!("\n🏆 {} ({words} words)", "Richest board:".bright_cyan().bold());
        print_board(board);
    }
}

/// Print found and missed words at the end of a round
pub fn print_round_summary(found: &[String], findable: &[String]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        " {} {}/{} ",
        "ROUND OVER:".bright_cyan().bold(),
        found.len().to_string().bright_yellow().bold(),
        findable.len()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    if found.is_empty() {
        println!("\n  No words found.");
    } else {
        println!("\n  {}", "You found:".green().bold());
        for word in found {
            println!("    • {}", word.to_uppercase().bright_white().bold());
        }
    }

    let missed: Vec<&str> = findable
        .iter()
        .filter(|word| !found.contains(*word))
        .map(String::as_str)
        .collect();
    if !missed.is_empty() {
        println!("\n  {} {}", "Missed:".yellow(), missed.join(", "));
    }
    println!();
}
