//! Plugboard: symmetric pairwise letter swaps at both ends of the rotor stack.

use crate::alphabet::{Letter, SIZE};
use crate::error::EnigmaError;

/// Swaps `symbol` with its partner in `pairs`, or returns it unchanged.
///
/// Linear reference form of [`Plugboard::swap`]; the board itself uses a
/// precomputed table.
pub fn swap(symbol: Letter, pairs: &[(Letter, Letter)]) -> Letter {
    for &(a, b) in pairs {
        if symbol == a {
            return b;
        }
        if symbol == b {
            return a;
        }
    }
    symbol
}

/// A set of disjoint letter pairs (0 to 13).
///
/// `swap` is its own inverse for every letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; SIZE],
    pairs: Vec<(Letter, Letter)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// Creates a plugboard with no pairs; every letter maps to itself.
    pub fn empty() -> Self {
        let mut table = [0u8; SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard {
            table,
            pairs: Vec::new(),
        }
    }

    /// Creates a plugboard from character pairs.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidSymbol`] if a character is not `A`-`Z`.
    /// - [`EnigmaError::PlugSelfPaired`] if a pair joins a letter to itself.
    /// - [`EnigmaError::PlugReused`] if a letter appears in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::new(&[('A', 'B'), ('C', 'D')]).unwrap();
    /// assert_eq!(board.len(), 2);
    /// assert!(Plugboard::new(&[('A', 'B'), ('B', 'C')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut board = Self::empty();
        for &(a, b) in pairs {
            board.connect(Letter::try_from(a)?, Letter::try_from(b)?)?;
        }
        Ok(board)
    }

    /// Parses space-separated pair notation such as `"AB CD EF"`.
    ///
    /// Lowercase letters are accepted. An empty string yields an empty board.
    ///
    /// # Errors
    /// [`EnigmaError::MalformedPlugPair`] if a token is not exactly two
    /// characters, plus the errors of [`Plugboard::new`].
    pub fn parse(notation: &str) -> Result<Self, EnigmaError> {
        let mut pairs = Vec::new();
        for token in notation.split_whitespace() {
            let mut chars = token.chars().map(|c| c.to_ascii_uppercase());
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => pairs.push((a, b)),
                _ => return Err(EnigmaError::MalformedPlugPair(token.to_string())),
            }
        }
        Self::new(&pairs)
    }

    fn connect(&mut self, a: Letter, b: Letter) -> Result<(), EnigmaError> {
        if a == b {
            return Err(EnigmaError::PlugSelfPaired(a.to_char()));
        }
        for letter in [a, b] {
            if self.table[letter.index()] as usize != letter.index() {
                return Err(EnigmaError::PlugReused(letter.to_char()));
            }
        }
        self.table[a.index()] = b.index() as u8;
        self.table[b.index()] = a.index() as u8;
        self.pairs.push((a, b));
        Ok(())
    }

    /// Returns the partner of `symbol`, or `symbol` if it is not plugged.
    pub fn swap(&self, symbol: Letter) -> Letter {
        Letter::wrapping(self.table[symbol.index()] as usize)
    }

    /// Returns the configured pairs in insertion order.
    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs are configured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
