//! Enigma rotor cipher machine simulator.
//!
//! A keystream of substitutions is produced by a stack of stepping rotors,
//! a fixed involutive reflector and a plugboard applied on the way in and
//! on the way out. The machine is reciprocal: decrypting is encrypting
//! again with a machine in the same starting configuration.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (A-Z index space, Letter newtype)
//!     ↓
//! Plugboard  Rotor  Reflector   (built from catalog definitions)
//!     ↓
//! Machine    (stepping rule + plugboard → rotors → reflector → rotors → plugboard)
//!     ↑
//! MachineConfig (serde key setting → validated Machine)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::MachineConfig;
//!
//! let config = MachineConfig::default();
//!
//! let mut encoder = config.build().unwrap();
//! let ciphertext = encoder.process("HELLO");
//! assert_eq!(ciphertext, "VNACA");
//!
//! let mut decoder = config.build().unwrap();
//! assert_eq!(decoder.process(&ciphertext), "HELLO");
//! ```
//!
//! Configure rotors, ring settings and plugboard:
//!
//! ```
//! use enigma::{MachineConfig, ReflectorKind, RotorKind};
//!
//! let config = MachineConfig::new(&[RotorKind::IV, RotorKind::V, RotorKind::I])
//!     .with_positions(&[5, 10, 15])
//!     .unwrap()
//!     .with_ring_settings(&[1, 2, 3])
//!     .unwrap()
//!     .with_plugboard(&[('Q', 'W'), ('E', 'R')])
//!     .with_reflector(ReflectorKind::B);
//!
//! let mut machine = config.build().unwrap();
//! assert_eq!(machine.process("the quick brown fox"), "GQW ILXEF NTFSZ GZC");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod plugboard;

mod config;
mod machine;
mod reflector;
mod rotor;

pub use alphabet::Letter;
pub use catalog::{ReflectorKind, RotorKind};
pub use config::{MachineConfig, RotorSettings};
pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
