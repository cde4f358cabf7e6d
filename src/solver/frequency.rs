//! Letter-frequency guessing
//!
//! Narrows the word list to words consistent with what the board shows, then
//! guesses the unused letter that appears in the most of them.

use crate::core::{Letter, SecretWord, Snapshot};
use rustc_hash::FxHashMap;

/// English letters from most to least common, used when no word fits
pub const ENGLISH_FREQUENCY: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Picks letters by how many remaining candidates contain them
pub struct FrequencySolver<'a> {
    words: &'a [SecretWord],
}

impl<'a> FrequencySolver<'a> {
    #[must_use]
    pub const fn new(words: &'a [SecretWord]) -> Self {
        Self { words }
    }

    /// Words that could still be the secret given the snapshot
    ///
    /// A word fits if it has the same length, matches every revealed
    /// position, and has no used letter at a hidden position.
    #[must_use]
    pub fn candidates(&self, snapshot: &Snapshot) -> Vec<&'a SecretWord> {
        self.words
            .iter()
            .filter(|word| is_consistent(word, snapshot))
            .collect()
    }

    /// Next letter to guess, or `None` if every letter has been used
    ///
    /// # Examples
    /// ```
    /// use sql_hangman::core::{Letter, Round, SecretWord};
    /// use sql_hangman::solver::FrequencySolver;
    /// use sql_hangman::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["MYSQL", "TABLA", "SQL"]);
    /// let solver = FrequencySolver::new(&words);
    ///
    /// let mut round = Round::new(SecretWord::new("SQL").unwrap());
    /// let letter = solver.next_letter(&round.snapshot()).unwrap();
    /// assert!(round.guess(letter));
    /// ```
    #[must_use]
    pub fn next_letter(&self, snapshot: &Snapshot) -> Option<Letter> {
        let candidates = self.candidates(snapshot);

        let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();
        for word in &candidates {
            let mut seen: Vec<Letter> = Vec::with_capacity(word.len());
            for &letter in word.letters() {
                if !snapshot.is_used(letter) && !seen.contains(&letter) {
                    seen.push(letter);
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        // Highest count wins; ties go to the earlier letter.
        let best = Letter::alphabet()
            .filter_map(|letter| counts.get(&letter).map(|&count| (letter, count)))
            .max_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then(l2.cmp(l1)))
            .map(|(letter, _)| letter);

        best.or_else(|| fallback_letter(snapshot))
    }
}

fn is_consistent(word: &SecretWord, snapshot: &Snapshot) -> bool {
    word.len() == snapshot.revealed.len()
        && word
            .letters()
            .iter()
            .zip(&snapshot.revealed)
            .all(|(&letter, slot)| match slot {
                Some(shown) => *shown == letter,
                None => !snapshot.is_used(letter),
            })
}

fn fallback_letter(snapshot: &Snapshot) -> Option<Letter> {
    ENGLISH_FREQUENCY
        .iter()
        .filter_map(|&b| Letter::new(b as char).ok())
        .find(|&letter| !snapshot.is_used(letter))
}
