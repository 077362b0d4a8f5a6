//! Shareable plain-text summaries of finished games

use super::wordle::GuessRow;
use chrono::NaiveDate;

const WORDLE_FOOTER: &str = "puzzlegrove.com";
const WORD_SEARCH_FOOTER: &str = "Play at Puzzle Grove!";
const FOUND_COLOURS: [char; 4] = ['🟦', '🟩', '🟪', '🟨'];
const UNFOUND: char = '⬜';
const WORDS_PER_LINE: usize = 4;

/// Wordle summary: score line, one emoji row per guess, footer
///
/// # Examples
/// ```
/// use puzzle_grove::core::{evaluate, Word};
/// use puzzle_grove::game::{share_text, GuessRow};
///
/// let target = Word::new("crane").unwrap();
/// let rows = vec![GuessRow { feedback: evaluate(&target, &target), word: target }];
/// assert_eq!(
///     share_text(&rows, true, 6),
///     "Puzzle Grove Wordle: 1/6\n\n🟩🟩🟩🟩🟩\n\npuzzlegrove.com"
/// );
/// ```
#[must_use]
pub fn share_text(rows: &[GuessRow], won: bool, max_rows: usize) -> String {
    let score = if won {
        rows.len().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Puzzle Grove Wordle: {score}/{max_rows}\n\n");
    for row in rows {
        text.push_str(&row.feedback.to_emoji());
        text.push('\n');
    }
    text.push('\n');
    text.push_str(WORDLE_FOOTER);
    text
}

/// Word-search summary; `found` holds one flag per theme word, in list order
#[must_use]
pub fn word_search_share_text(
    theme: &str,
    date: NaiveDate,
    found: &[bool],
    hints_used: u32,
) -> String {
    let found_count = found.iter().filter(|&&f| f).count();
    let mut text = format!(
        "Word Strands ({})\nTheme: {theme}\nWords Found: {found_count}/{}\nHints Used: {hints_used}\n\n",
        date.format("%-m/%-d/%y"),
        found.len()
    );

    for (i, &is_found) in found.iter().enumerate() {
        text.push(if is_found {
            FOUND_COLOURS[i % FOUND_COLOURS.len()]
        } else {
            UNFOUND
        });
        if (i + 1) % WORDS_PER_LINE == 0 {
            text.push('\n');
        }
    }

    text.push('\n');
    text.push_str(WORD_SEARCH_FOOTER);
    text
}
