//! Rotor: a stepping single-letter substitution.
//!
//! A Rotor holds a wiring permutation, a notch letter, a fixed ring
//! setting and a position that advances once per encrypted letter.
//! The forward path runs from the keyboard side towards the reflector;
//! the backward path is its exact inverse for every position and ring
//! setting.

use crate::alphabet::{self, Letter, SIZE};
use crate::catalog::{RotorDefinition, RotorKind};
use crate::error::EnigmaError;

/// A single rotor with its exclusively owned position counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: [u8; SIZE],
    inverse: [u8; SIZE],
    notch: Letter,
    ring_setting: u8,
    position: u8,
}

/// Checks that `value` is a valid ring setting or position.
fn check_range(what: &'static str, value: u8) -> Result<u8, EnigmaError> {
    if (value as usize) < SIZE {
        Ok(value)
    } else {
        Err(EnigmaError::OutOfRange { what, value })
    }
}

impl Rotor {
    /// Creates a rotor from a wiring string and a notch letter.
    ///
    /// # Parameters
    /// - `wiring`: 26 letters; position `i` is the output for input `i`.
    /// - `notch`: Letter whose window position makes the neighbor step.
    /// - `ring_setting`: Fixed offset (0..25).
    /// - `position`: Initial rotation (0..25).
    ///
    /// # Errors
    /// Returns an error if the wiring is not a permutation, the notch is not
    /// `A`-`Z`, or `ring_setting`/`position` are outside 0..25.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let rotor = Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q', 0, 16).unwrap();
    /// assert!(rotor.at_notch());
    /// ```
    pub fn new(
        wiring: &str,
        notch: char,
        ring_setting: u8,
        position: u8,
    ) -> Result<Self, EnigmaError> {
        let table = alphabet::parse_permutation(wiring)?;
        Ok(Rotor {
            name: String::new(),
            wiring: table,
            inverse: alphabet::invert(&table),
            notch: Letter::try_from(notch)?,
            ring_setting: check_range("Ring setting", ring_setting)?,
            position: check_range("Position", position)?,
        })
    }

    /// Creates a rotor from a catalog definition.
    pub fn from_definition(
        def: &RotorDefinition,
        ring_setting: u8,
        position: u8,
    ) -> Result<Self, EnigmaError> {
        let mut rotor = Self::new(def.wiring, def.notch, ring_setting, position)?;
        rotor.name = def.name.to_string();
        Ok(rotor)
    }

    /// Creates a catalog rotor by kind.
    pub fn from_kind(kind: RotorKind, ring_setting: u8, position: u8) -> Result<Self, EnigmaError> {
        Self::from_definition(kind.definition(), ring_setting, position)
    }

    /// Catalog name, or an empty string for custom wirings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current rotation (0..25).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting fixed at construction (0..25).
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Notch letter.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Letter showing in the window at the current position.
    pub fn window(&self) -> Letter {
        Letter::wrapping(self.position as usize)
    }

    /// Advances the position by one, wrapping 25 to 0.
    pub fn step(&mut self) {
        self.position = ((self.position as usize + 1) % SIZE) as u8;
    }

    /// Returns `true` if the current position shows the notch letter.
    pub fn at_notch(&self) -> bool {
        self.window() == self.notch
    }

    /// Input offset into the wiring for the current position and ring.
    fn offset(&self) -> usize {
        self.position as usize + SIZE - self.ring_setting as usize
    }

    /// Maps a letter travelling towards the reflector.
    pub fn forward(&self, symbol: Letter) -> Letter {
        let shifted = (symbol.index() + self.offset()) % SIZE;
        Letter::wrapping(self.wiring[shifted] as usize)
    }

    /// Maps a letter travelling back from the reflector.
    ///
    /// Inverse of [`forward`](Self::forward) at the same position.
    pub fn backward(&self, symbol: Letter) -> Letter {
        let idx = self.inverse[symbol.index()] as usize;
        Letter::wrapping(idx + SIZE - self.offset() % SIZE)
    }
}
