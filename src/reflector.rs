//! Reflector: a fixed involutive permutation with no moving state.

use crate::alphabet::{self, Letter, SIZE};
use crate::catalog::{ReflectorDefinition, ReflectorKind};
use crate::error::EnigmaError;

/// Turns the signal back through the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: [u8; SIZE],
}

impl Default for Reflector {
    fn default() -> Self {
        Self::from_kind(ReflectorKind::default())
    }
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns an error if the wiring is not a permutation, or
    /// [`EnigmaError::NotInvolutive`] if `r[r[i]] != i` for some `i`.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let table = alphabet::parse_permutation(wiring)?;
        for (i, &out) in table.iter().enumerate() {
            if table[out as usize] as usize != i {
                return Err(EnigmaError::NotInvolutive {
                    from: Letter::wrapping(i).to_char(),
                    to: Letter::wrapping(out as usize).to_char(),
                });
            }
        }
        Ok(Reflector {
            name: String::new(),
            wiring: table,
        })
    }

    /// Creates a reflector from a catalog definition.
    pub fn from_definition(def: &ReflectorDefinition) -> Result<Self, EnigmaError> {
        let mut reflector = Self::new(def.wiring)?;
        reflector.name = def.name.to_string();
        Ok(reflector)
    }

    /// Creates a catalog reflector by kind.
    pub fn from_kind(kind: ReflectorKind) -> Self {
        let def = kind.definition();
        Reflector {
            name: def.name.to_string(),
            wiring: reflector_table(def.wiring),
        }
    }

    /// Catalog name, or an empty string for custom wirings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reflects a letter.
    pub fn reflect(&self, symbol: Letter) -> Letter {
        Letter::wrapping(self.wiring[symbol.index()] as usize)
    }
}

/// Index table of a catalog wiring, which is known to be valid.
fn reflector_table(wiring: &str) -> [u8; SIZE] {
    let mut table = [0u8; SIZE];
    for (slot, b) in table.iter_mut().zip(wiring.bytes()) {
        *slot = b - b'A';
    }
    table
}
