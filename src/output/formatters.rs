//! Formatting utilities for terminal output

use crate::core::{Board, Path, Position};
use std::time::Duration;

/// Render a board as text rows, one per board row
///
/// Selected cells are bracketed: `[C]`; others are padded: ` C `.
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    (0..board.height())
        .map(|row| {
            (0..board.width())
                .filter_map(|column| board.cell(Position::new(row, column)))
                .map(|cell| {
                    let letter = cell.letter.to_ascii_uppercase();
                    if cell.selected {
                        format!("[{letter}]")
                    } else {
                        format!(" {letter} ")
                    }
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining round time as a bar
#[must_use]
pub fn countdown_bar(remaining: Duration, total: Duration, width: usize) -> String {
    create_progress_bar(remaining.as_secs_f64(), total.as_secs_f64(), width)
}

/// Path letters joined with arrows, e.g. `C → A → T`
#[must_use]
pub fn path_arrows(board: &Board, path: &Path) -> String {
    path.positions()
        .iter()
        .filter_map(|&position| board.letter_at(position))
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
