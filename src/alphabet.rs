//! The fixed 26-letter index space shared by every machine component.
//!
//! All wiring tables are stored as index arrays over this alphabet. The
//! [`Letter`] newtype carries an index that is always in `0..26`, which
//! keeps the substitution functions total.

use std::fmt;

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const SIZE: usize = 26;

/// The alphabet in index order.
pub const ALPHABET: &[u8; SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single alphabet symbol, stored as its index 0..26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Returns the letter at `index`, or `None` if `index >= 26`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE).then_some(Letter(index as u8))
    }

    /// Returns the letter for an uppercase `A`-`Z` character.
    ///
    /// Lowercase input is rejected; callers upper-case first.
    pub fn from_char(symbol: char) -> Option<Self> {
        index_of(symbol).map(|i| Letter(i as u8))
    }

    /// Returns the letter at `index` reduced modulo 26.
    pub(crate) fn wrapping(index: usize) -> Self {
        Letter((index % SIZE) as u8)
    }

    /// Returns the index of this letter (0..26).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the uppercase character for this letter.
    pub fn to_char(self) -> char {
        ALPHABET[self.index()] as char
    }

    /// Iterates over all 26 letters in alphabet order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..SIZE as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Letter::from_char(symbol).ok_or(EnigmaError::InvalidSymbol(symbol))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Returns the index (0..26) of an uppercase `A`-`Z` symbol.
pub fn index_of(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the symbol at `index`, or `None` if `index >= 26`.
pub fn symbol_at(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|&b| b as char)
}

/// Parses a 26-letter wiring string into an index permutation.
///
/// Position `i` of the result holds the output index for input index `i`.
///
/// # Errors
/// - [`EnigmaError::InvalidWiringLength`] if the string is not 26 characters.
/// - [`EnigmaError::InvalidSymbol`] if a character is not `A`-`Z`.
/// - [`EnigmaError::DuplicateWiring`] if a letter appears twice.
pub fn parse_permutation(wiring: &str) -> Result<[u8; SIZE], EnigmaError> {
    let count = wiring.chars().count();
    if count != SIZE {
        return Err(EnigmaError::InvalidWiringLength(count));
    }

    let mut table = [0u8; SIZE];
    let mut seen = [false; SIZE];
    for (slot, symbol) in table.iter_mut().zip(wiring.chars()) {
        let letter = Letter::try_from(symbol)?;
        if seen[letter.index()] {
            return Err(EnigmaError::DuplicateWiring(symbol));
        }
        seen[letter.index()] = true;
        *slot = letter.0;
    }
    Ok(table)
}

/// Returns the inverse of an index permutation.
pub(crate) fn invert(table: &[u8; SIZE]) -> [u8; SIZE] {
    let mut inverse = [0u8; SIZE];
    for (i, &out) in table.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_symbol_bijection() {
        for i in 0..SIZE {
            let symbol = symbol_at(i).unwrap();
            assert_eq!(index_of(symbol), Some(i));
        }
    }

    #[test]
    fn test_out_of_alphabet() {
        assert_eq!(index_of('a'), None);
        assert_eq!(index_of('1'), None);
        assert_eq!(index_of('Ä'), None);
        assert_eq!(symbol_at(26), None);
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn test_letter_conversions() {
        let q = Letter::try_from('Q').unwrap();
        assert_eq!(q.index(), 16);
        assert_eq!(char::from(q), 'Q');
        assert_eq!(q.to_string(), "Q");
        assert_eq!(Letter::try_from('q'), Err(EnigmaError::InvalidSymbol('q')));
        assert_eq!(Letter::wrapping(27), Letter::from_index(1).unwrap());
    }

    #[test]
    fn test_all_letters_in_order() {
        let text: String = Letter::all().map(Letter::to_char).collect();
        assert_eq!(text.as_bytes(), ALPHABET);
    }

    #[test]
    fn test_parse_permutation_identity() {
        let table = parse_permutation("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        for (i, &v) in table.iter().enumerate() {
            assert_eq!(v as usize, i);
        }
    }

    #[test]
    fn test_parse_permutation_errors() {
        assert_eq!(
            parse_permutation("ABC"),
            Err(EnigmaError::InvalidWiringLength(3))
        );
        assert_eq!(
            parse_permutation("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(EnigmaError::DuplicateWiring('A'))
        );
        assert_eq!(
            parse_permutation("aBCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(EnigmaError::InvalidSymbol('a'))
        );
    }

    #[test]
    fn test_invert_roundtrip() {
        let table = parse_permutation("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        let inverse = invert(&table);
        for i in 0..SIZE {
            assert_eq!(inverse[table[i] as usize] as usize, i);
            assert_eq!(table[inverse[i] as usize] as usize, i);
        }
    }
}
