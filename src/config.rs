//! Machine configuration.
//!
//! [`MachineConfig`] is plain serde data describing a key setting: which
//! catalog rotors sit in the machine and where, their ring settings, the
//! reflector and the plugboard pairs. [`MachineConfig::build`] validates it
//! and produces a ready [`Machine`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{ReflectorKind, RotorKind};
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Placement of one catalog rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSettings {
    pub kind: RotorKind,
    #[serde(default)]
    pub ring_setting: u8,
    #[serde(default)]
    pub position: u8,
}

impl RotorSettings {
    /// Rotor of `kind` at ring setting 0 and position 0.
    pub fn new(kind: RotorKind) -> Self {
        RotorSettings {
            kind,
            ring_setting: 0,
            position: 0,
        }
    }
}

/// Full key setting of a machine.
///
/// The default is rotors I-II-III at position and ring setting 0,
/// reflector B and an empty plugboard.
///
/// # Examples
///
/// ```
/// use enigma::{MachineConfig, RotorKind};
///
/// let config = MachineConfig::new(&[RotorKind::I, RotorKind::II, RotorKind::III])
///     .with_positions(&[0, 0, 0])
///     .unwrap()
///     .with_plugboard(&[('A', 'B')]);
///
/// let mut sender = config.build().unwrap();
/// let mut receiver = config.build().unwrap();
/// let ciphertext = sender.process("ATTACK AT DAWN");
/// assert_eq!(receiver.process(&ciphertext), "ATTACK AT DAWN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Rotor stack, leftmost first.
    pub rotors: Vec<RotorSettings>,
    pub reflector: ReflectorKind,
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new(&[RotorKind::I, RotorKind::II, RotorKind::III])
    }
}

impl MachineConfig {
    /// Rotors of the given kinds, all at ring setting 0 and position 0,
    /// with reflector B and no plugs.
    pub fn new(kinds: &[RotorKind]) -> Self {
        MachineConfig {
            rotors: kinds.iter().copied().map(RotorSettings::new).collect(),
            reflector: ReflectorKind::default(),
            plugboard: Vec::new(),
        }
    }

    fn check_len(&self, actual: usize) -> Result<(), EnigmaError> {
        if actual != self.rotors.len() {
            return Err(EnigmaError::SettingsLengthMismatch {
                expected: self.rotors.len(),
                actual,
            });
        }
        Ok(())
    }

    /// Sets initial positions, leftmost first.
    ///
    /// # Errors
    /// [`EnigmaError::SettingsLengthMismatch`] if `positions` does not have
    /// one entry per rotor.
    pub fn with_positions(mut self, positions: &[u8]) -> Result<Self, EnigmaError> {
        self.check_len(positions.len())?;
        for (rotor, &pos) in self.rotors.iter_mut().zip(positions) {
            rotor.position = pos;
        }
        Ok(self)
    }

    /// Sets initial positions from window letters, e.g. `"ADU"`.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] for a character outside `A`-`Z`, or
    /// [`EnigmaError::SettingsLengthMismatch`].
    pub fn with_window(self, window: &str) -> Result<Self, EnigmaError> {
        let positions = window
            .chars()
            .map(|c| {
                crate::alphabet::index_of(c.to_ascii_uppercase())
                    .map(|i| i as u8)
                    .ok_or(EnigmaError::InvalidSymbol(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        self.with_positions(&positions)
    }

    /// Sets ring settings, leftmost first.
    ///
    /// # Errors
    /// [`EnigmaError::SettingsLengthMismatch`] if `rings` does not have one
    /// entry per rotor.
    pub fn with_ring_settings(mut self, rings: &[u8]) -> Result<Self, EnigmaError> {
        self.check_len(rings.len())?;
        for (rotor, &ring) in self.rotors.iter_mut().zip(rings) {
            rotor.ring_setting = ring;
        }
        Ok(self)
    }

    /// Replaces the plugboard pairs.
    pub fn with_plugboard(mut self, pairs: &[(char, char)]) -> Self {
        self.plugboard = pairs.to_vec();
        self
    }

    /// Replaces the reflector.
    pub fn with_reflector(mut self, reflector: ReflectorKind) -> Self {
        self.reflector = reflector;
        self
    }

    /// Validates the configuration and builds a machine.
    ///
    /// Each call returns an independent machine at the configured start
    /// positions.
    ///
    /// # Errors
    /// Any configuration error: no rotors, ring setting or position out of
    /// range, invalid or reused plugboard letters.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        self.try_build()
            .inspect_err(|err| debug!(%err, "machine configuration rejected"))
    }

    fn try_build(&self) -> Result<Machine, EnigmaError> {
        let rotors = self
            .rotors
            .iter()
            .map(|s| Rotor::from_kind(s.kind, s.ring_setting, s.position))
            .collect::<Result<Vec<_>, _>>()?;
        let plugboard = Plugboard::new(&self.plugboard)?;
        Machine::new(rotors, plugboard, Reflector::from_kind(self.reflector))
    }
}

impl Machine {
    /// Builds a machine from a configuration. See [`MachineConfig::build`].
    pub fn from_config(config: &MachineConfig) -> Result<Self, EnigmaError> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MachineConfig::default();
        assert_eq!(config.rotors.len(), 3);
        assert_eq!(config.rotors[0].kind, RotorKind::I);
        assert_eq!(config.rotors[2].kind, RotorKind::III);
        assert_eq!(config.reflector, ReflectorKind::B);
        assert!(config.plugboard.is_empty());

        let machine = config.build().unwrap();
        assert_eq!(machine.window(), "AAA");
        assert_eq!(machine.reflector().name(), "B");
    }

    #[test]
    fn test_with_window_sets_positions() {
        let machine = MachineConfig::default()
            .with_window("adu")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(machine.positions(), vec![0, 3, 20]);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            MachineConfig::default().with_positions(&[1, 2]),
            Err(EnigmaError::SettingsLengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(MachineConfig::default().with_ring_settings(&[0; 4]).is_err());
        assert_eq!(
            MachineConfig::default().with_window("A1A"),
            Err(EnigmaError::InvalidSymbol('1'))
        );
    }

    #[test]
    fn test_build_rejects_bad_settings() {
        let config = MachineConfig::default().with_positions(&[0, 26, 0]).unwrap();
        assert_eq!(
            config.build(),
            Err(EnigmaError::OutOfRange {
                what: "Position",
                value: 26
            })
        );

        let config = MachineConfig::default().with_plugboard(&[('A', 'B'), ('B', 'C')]);
        assert_eq!(config.build(), Err(EnigmaError::PlugReused('B')));

        assert_eq!(MachineConfig::new(&[]).build(), Err(EnigmaError::NoRotors));
    }

    #[test]
    fn test_builds_are_independent() {
        let config = MachineConfig::default();
        let mut first = config.build().unwrap();
        first.process("ABC");
        let second = Machine::from_config(&config).unwrap();
        assert_eq!(first.positions(), vec![0, 0, 3]);
        assert_eq!(second.positions(), vec![0, 0, 0]);
    }
}
