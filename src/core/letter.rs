//! A single guessable letter
//!
//! Letters are stored as uppercase ASCII bytes so comparisons against the
//! secret word are a plain byte compare.

use std::fmt;

/// An uppercase ASCII letter (A-Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for characters that are not letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not an ASCII letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use sql_hangman::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    ///
    /// assert!(Letter::new('7').is_err());
    /// assert!(Letter::new('ñ').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// The uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_normalized() {
        assert_eq!(Letter::new('s').unwrap(), Letter::new('S').unwrap());
        assert_eq!(Letter::new('s').unwrap().as_char(), 'S');
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(Letter::new('1'), Err(LetterError::NotAlphabetic('1')));
        assert!(Letter::new(' ').is_err());
        assert!(Letter::new('_').is_err());
        assert!(Letter::new('é').is_err());
    }

    #[test]
    fn alphabet_is_ordered() {
        let letters: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn display() {
        let letter = Letter::try_from('k').unwrap();
        assert_eq!(format!("{letter}"), "K");
    }
}
