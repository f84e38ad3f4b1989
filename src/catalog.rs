//! Fixed catalog of rotor and reflector definitions.
//!
//! Definitions are plain data: a wiring string and, for rotors, a single
//! notch letter. A [`Rotor`](crate::Rotor) or [`Reflector`](crate::Reflector)
//! is built from a definition; there is no per-model behavior.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;

/// Wiring and notch of a catalog rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorDefinition {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notch: char,
}

/// Wiring of a catalog reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorDefinition {
    pub name: &'static str,
    pub wiring: &'static str,
}

/// Rotors I to V, in catalog order.
pub static ROTORS: [RotorDefinition; 5] = [
    RotorDefinition {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorDefinition {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorDefinition {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorDefinition {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorDefinition {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: 'Z',
    },
];

/// Reflectors B and C.
pub static REFLECTORS: [ReflectorDefinition; 2] = [
    ReflectorDefinition {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorDefinition {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Selects one of the catalog rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorKind {
    /// All rotor kinds in catalog order.
    pub const ALL: [RotorKind; 5] = [
        RotorKind::I,
        RotorKind::II,
        RotorKind::III,
        RotorKind::IV,
        RotorKind::V,
    ];

    /// Returns the catalog definition for this rotor.
    pub fn definition(self) -> &'static RotorDefinition {
        &ROTORS[self as usize]
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

impl FromStr for RotorKind {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorKind::ALL
            .into_iter()
            .find(|kind| kind.definition().name.eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnigmaError::UnknownCatalogEntry(s.to_string()))
    }
}

/// Selects one of the catalog reflectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectorKind {
    #[default]
    B,
    C,
}

impl ReflectorKind {
    /// Returns the catalog definition for this reflector.
    pub fn definition(self) -> &'static ReflectorDefinition {
        &REFLECTORS[self as usize]
    }
}

impl fmt::Display for ReflectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

impl FromStr for ReflectorKind {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ReflectorKind::B, ReflectorKind::C]
            .into_iter()
            .find(|kind| kind.definition().name.eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnigmaError::UnknownCatalogEntry(s.to_string()))
    }
}
