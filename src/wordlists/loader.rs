//! Word list loading utilities
//!
//! Word lists are plain text, one word per line, in any case.

use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Parse a plain-text word list
///
/// Lines are trimmed and uppercased; blank lines and entries with anything
/// other than ASCII letters are skipped. With `length` set, only words of that
/// many letters are kept.
///
/// # Examples
/// ```
/// use puzzle_grove::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n\nSlate\nox\nno-go\n", Some(5));
/// assert_eq!(words, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn parse_word_list(text: &str, length: Option<usize>) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_alphabetic()))
        .filter(|line| length.is_none_or(|len| line.len() == len))
        .map(str::to_ascii_uppercase)
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use puzzle_grove::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle_words.txt", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: Option<usize>) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content, length);
    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Load five-letter Wordle words, falling back to [`super::FALLBACK_WORDS`]
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_wordle_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let loaded = load_from_file(path, Some(WORD_LENGTH))?;
    let words = words_from_slice(loaded.as_slice());
    if words.is_empty() {
        tracing::warn!("no valid 5-letter words found, using fallback words");
        return Ok(words_from_slice(super::FALLBACK_WORDS));
    }
    Ok(words)
}

/// Convert string slices to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use puzzle_grove::wordlists::loader::words_from_slice;
/// use puzzle_grove::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice.iter().filter_map(|s| Word::new(s.as_ref()).ok()).collect()
}
