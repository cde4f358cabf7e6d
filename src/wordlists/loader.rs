//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Blank lines and entries that are not plain ASCII words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use sql_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("terms.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-delimited text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                SecretWord::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to word vector
///
/// # Examples
/// ```
/// use sql_hangman::wordlists::loader::words_from_slice;
/// use sql_hangman::wordlists::DATABASE_TERMS;
///
/// let words = words_from_slice(DATABASE_TERMS);
/// assert_eq!(words.len(), DATABASE_TERMS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}
