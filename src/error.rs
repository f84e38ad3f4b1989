//! Error types for the Enigma library.

use thiserror::Error;

/// Errors produced by the Enigma library.
///
/// Every variant is a configuration error raised while a component is
/// being built. Once a [`Machine`](crate::Machine) exists its pipeline is
/// infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Character is not one of the 26 letters A-Z.
    #[error("Symbol {0:?} is not in the alphabet A-Z")]
    InvalidSymbol(char),
    /// Wiring string does not have exactly 26 letters.
    #[error("Wiring must contain exactly 26 letters, got {0}")]
    InvalidWiringLength(usize),
    /// Wiring maps two inputs to the same letter.
    #[error("Wiring is not a permutation: {0} appears more than once")]
    DuplicateWiring(char),
    /// Reflector wiring is not its own inverse.
    #[error("Reflector is not involutive: {from} maps to {to} but {to} does not map back")]
    NotInvolutive { from: char, to: char },
    /// A plugboard letter is used by more than one pair.
    #[error("Plugboard letter {0} is used in more than one pair")]
    PlugReused(char),
    /// A plugboard pair connects a letter to itself.
    #[error("Plugboard pair connects {0} to itself")]
    PlugSelfPaired(char),
    /// Plugboard notation could not be split into letter pairs.
    #[error("Malformed plugboard pair {0:?}")]
    MalformedPlugPair(String),
    /// Ring setting or position is outside 0..26.
    #[error("{what} must be between 0 and 25, got {value}")]
    OutOfRange { what: &'static str, value: u8 },
    /// Machine was configured without rotors.
    #[error("Machine needs at least one rotor")]
    NoRotors,
    /// Per-rotor settings do not match the number of rotors.
    #[error("Expected {expected} rotor settings, got {actual}")]
    SettingsLengthMismatch { expected: usize, actual: usize },
    /// Name does not match any catalog entry.
    #[error("Unknown catalog entry {0:?}")]
    UnknownCatalogEntry(String),
}
