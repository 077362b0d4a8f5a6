//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterState, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter drawn as a coloured tile; unknown letters are left plain
#[must_use]
pub fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One evaluated row as tiles
#[must_use]
pub fn feedback_tiles(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| tile(char::from(letter), Some(state)).to_string())
        .collect()
}

/// A row being typed, padded with underscores
#[must_use]
pub fn pending_row(input: &str, width: usize) -> String {
    let mut row: Vec<String> = input.chars().map(|c| format!(" {c} ")).collect();
    row.resize(width.max(row.len()), " _ ".to_string());
    row.concat()
}

/// The keyboard with each letter coloured by its best-known state
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|b| tile(char::from(b), keyboard.state(b)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
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
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
