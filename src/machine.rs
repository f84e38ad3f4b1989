//! Machine: rotor stack, plugboard and reflector with the stepping rule.
//!
//! Orchestrates an ordered stack of [`Rotor`]s (leftmost first), one
//! [`Plugboard`] and one [`Reflector`]. Each encrypted letter first steps
//! the rotors, then travels:
//!
//! ```text
//! plugboard → rotors right..left (forward) → reflector
//!           → rotors left..right (backward) → plugboard
//! ```
//!
//! The whole pipeline is reciprocal: a fresh machine with the same
//! configuration turns the ciphertext back into the plaintext.

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Rotor cipher machine.
///
/// A Machine exclusively owns its components. Rotor positions advance
/// with every encrypted letter and there is no reset; build a new Machine
/// from the same configuration to start another message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Never empty.
    rotors: Vec<Rotor>,
    plugboard: Plugboard,
    reflector: Reflector,
}

impl Machine {
    /// Creates a machine from its components.
    ///
    /// # Parameters
    /// - `rotors`: Rotor stack, leftmost first (conventionally 3).
    /// - `plugboard`: Swap table applied at both ends.
    /// - `reflector`: Involutive reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NoRotors`] if `rotors` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Machine, Plugboard, Reflector, Rotor, RotorKind};
    ///
    /// let rotors = vec![
    ///     Rotor::from_kind(RotorKind::I, 0, 0).unwrap(),
    ///     Rotor::from_kind(RotorKind::II, 0, 0).unwrap(),
    ///     Rotor::from_kind(RotorKind::III, 0, 0).unwrap(),
    /// ];
    /// let mut machine = Machine::new(rotors, Plugboard::empty(), Reflector::default()).unwrap();
    /// assert_eq!(machine.process("HELLO"), "VNACA");
    /// ```
    pub fn new(
        rotors: Vec<Rotor>,
        plugboard: Plugboard,
        reflector: Reflector,
    ) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::NoRotors);
        }
        let machine = Machine {
            rotors,
            plugboard,
            reflector,
        };
        debug!(
            rotors = %machine.rotor_names(),
            window = %machine.window(),
            plugs = machine.plugboard.len(),
            reflector = machine.reflector.name(),
            "machine built"
        );
        Ok(machine)
    }

    /// Rotor stack, leftmost first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Current rotor positions, leftmost first.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Letters showing in the rotor windows, leftmost first.
    pub fn window(&self) -> String {
        self.rotors.iter().map(|r| r.window().to_char()).collect()
    }

    fn rotor_names(&self) -> String {
        self.rotors
            .iter()
            .map(|r| if r.name().is_empty() { "?" } else { r.name() })
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Advances the rotor stack by one keystroke.
    ///
    /// Notches are read before anything moves. A middle rotor sitting on
    /// its notch steps together with its left neighbor (double step);
    /// otherwise the middle rotor steps when the rightmost is on its
    /// notch. The rightmost rotor always steps.
    ///
    /// "Middle" is the second rotor from the right and "left" the third;
    /// rotors further left never move.
    pub fn step_rotors(&mut self) {
        let n = self.rotors.len();
        let right = n - 1;
        let right_at_notch = self.rotors[right].at_notch();
        let middle_at_notch = n >= 2 && self.rotors[n - 2].at_notch();

        if middle_at_notch {
            if n >= 3 {
                self.rotors[n - 3].step();
            }
            self.rotors[n - 2].step();
        } else if right_at_notch && n >= 2 {
            self.rotors[n - 2].step();
        }
        self.rotors[right].step();
    }

    /// Rotor and reflector path without stepping or plugboard.
    pub(crate) fn scramble(&self, symbol: Letter) -> Letter {
        let mut s = symbol;
        for rotor in self.rotors.iter().rev() {
            s = rotor.forward(s);
        }
        s = self.reflector.reflect(s);
        for rotor in self.rotors.iter() {
            s = rotor.backward(s);
        }
        s
    }

    /// Steps the rotors and encrypts one letter.
    pub fn encrypt_letter(&mut self, symbol: Letter) -> Letter {
        self.step_rotors();
        let s = self.plugboard.swap(symbol);
        let s = self.scramble(s);
        self.plugboard.swap(s)
    }

    /// Encrypts a single letter; lowercase ASCII is upper-cased first.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] for anything outside `A`-`Z`;
    /// the rotors do not move in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let mut machine = MachineConfig::default().build().unwrap();
    /// assert_eq!(machine.encrypt_char('h'), Ok('V'));
    /// assert!(machine.encrypt_char('!').is_err());
    /// ```
    pub fn encrypt_char(&mut self, symbol: char) -> Result<char, EnigmaError> {
        let letter = Letter::try_from(symbol.to_ascii_uppercase())
            .map_err(|_| EnigmaError::InvalidSymbol(symbol))?;
        Ok(self.encrypt_letter(letter).to_char())
    }

    /// Encrypts a message.
    ///
    /// ASCII letters are upper-cased and encrypted, one rotor step each.
    /// Every other character is copied unchanged and does not step the
    /// rotors. Output has the same length and order as the input.
    pub fn process(&mut self, message: &str) -> String {
        let output: String = message
            .chars()
            .map(|c| match Letter::from_char(c.to_ascii_uppercase()) {
                Some(letter) => self.encrypt_letter(letter).to_char(),
                None => c,
            })
            .collect();
        trace!(len = message.len(), window = %self.window(), "message processed");
        output
    }

    /// Decrypts a message. Same operation as [`process`](Self::process).
    pub fn decrypt(&mut self, ciphertext: &str) -> String {
        self.process(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ReflectorKind, RotorKind};

    fn test_machine(positions: [u8; 3], rings: [u8; 3], plugs: &[(char, char)]) -> Machine {
        let kinds = [RotorKind::I, RotorKind::II, RotorKind::III];
        let rotors = kinds
            .iter()
            .zip(positions.iter().zip(rings.iter()))
            .map(|(&kind, (&pos, &ring))| Rotor::from_kind(kind, ring, pos).unwrap())
            .collect();
        Machine::new(
            rotors,
            Plugboard::new(plugs).unwrap(),
            Reflector::from_kind(ReflectorKind::B),
        )
        .unwrap()
    }

    fn l(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn test_rejects_empty_stack() {
        let result = Machine::new(Vec::new(), Plugboard::empty(), Reflector::default());
        assert_eq!(result, Err(EnigmaError::NoRotors));
    }

    #[test]
    fn test_right_rotor_always_steps() {
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[]);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![0, 0, 1]);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![0, 0, 2]);
    }

    #[test]
    fn test_middle_steps_when_right_at_notch() {
        // III notches at V (21)
        let mut machine = test_machine([0, 0, 21], [0, 0, 0], &[]);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![0, 1, 22]);
    }

    #[test]
    fn test_double_step_when_middle_at_notch() {
        // II notches at E (4)
        let mut machine = test_machine([0, 4, 0], [0, 0, 0], &[]);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![1, 5, 1]);
    }

    #[test]
    fn test_double_step_sequence() {
        let mut machine = test_machine([0, 3, 21], [0, 0, 0], &[]);
        assert_eq!(machine.window(), "ADV");
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.window(), "AEW");
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.window(), "BFX");
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.window(), "BFY");
    }

    #[test]
    fn test_single_rotor_stack() {
        let rotor = Rotor::from_kind(RotorKind::I, 0, 16).unwrap();
        let mut machine = Machine::new(vec![rotor], Plugboard::empty(), Reflector::default()).unwrap();
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![17]);
    }

    #[test]
    fn test_two_rotor_stack_middle_notch() {
        let rotors = vec![
            Rotor::from_kind(RotorKind::II, 0, 4).unwrap(),
            Rotor::from_kind(RotorKind::III, 0, 0).unwrap(),
        ];
        let mut machine = Machine::new(rotors, Plugboard::empty(), Reflector::default()).unwrap();
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![5, 1]);
    }

    #[test]
    fn test_fourth_rotor_never_steps() {
        let rotors = vec![
            Rotor::from_kind(RotorKind::IV, 0, 0).unwrap(),
            Rotor::from_kind(RotorKind::I, 0, 0).unwrap(),
            Rotor::from_kind(RotorKind::II, 0, 4).unwrap(),
            Rotor::from_kind(RotorKind::III, 0, 0).unwrap(),
        ];
        let mut machine = Machine::new(rotors, Plugboard::empty(), Reflector::default()).unwrap();
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.positions(), vec![0, 1, 5, 1]);
    }

    #[test]
    fn test_invalid_char_does_not_step() {
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[]);
        assert_eq!(machine.encrypt_char('3'), Err(EnigmaError::InvalidSymbol('3')));
        assert_eq!(machine.encrypt_char('é'), Err(EnigmaError::InvalidSymbol('é')));
        assert_eq!(machine.positions(), vec![0, 0, 0]);
    }

    #[test]
    fn test_hello_known_ciphertext() {
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[]);
        assert_eq!(machine.process("HELLO"), "VNACA");
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[]);
        assert_eq!(machine.decrypt("VNACA"), "HELLO");
    }

    #[test]
    fn test_pass_through_and_uppercase() {
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[]);
        assert_eq!(machine.process("hello, world 123!"), "VNACA, DJZRA 123!");
        // five letters + five letters
        assert_eq!(machine.positions(), vec![0, 0, 10]);
    }

    #[test]
    fn test_empty_message() {
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[]);
        assert_eq!(machine.process(""), "");
        assert_eq!(machine.positions(), vec![0, 0, 0]);
    }

    #[test]
    fn test_ring_settings_change_output() {
        let mut plain = test_machine([0, 0, 0], [0, 0, 0], &[]);
        let mut ringed = test_machine([0, 0, 0], [1, 2, 3], &[]);
        assert_eq!(plain.process("TEST"), "ZNNU");
        assert_eq!(ringed.process("TEST"), "OGWJ");
    }

    #[test]
    fn test_plugboard_applied_on_both_passes() {
        let mut machine = test_machine([0, 0, 0], [0, 0, 0], &[('A', 'Z')]);
        machine.step_rotors();
        let inbound = machine.plugboard().swap(l('T'));
        let single_pass = machine.scramble(inbound);
        let double_pass = machine.plugboard().swap(single_pass);
        assert_eq!(single_pass, l('Z'));
        assert_eq!(double_pass, l('A'));

        let mut fresh = test_machine([0, 0, 0], [0, 0, 0], &[('A', 'Z')]);
        assert_eq!(fresh.encrypt_char('T'), Ok('A'));
    }

    #[test]
    fn test_plugboard_pair_roundtrip() {
        let mut enc = test_machine([0, 0, 0], [0, 0, 0], &[('A', 'Z')]);
        let result = enc.encrypt_char('A').unwrap();
        assert_ne!(result, 'A');
        assert_eq!(result, 'T');

        let mut dec = test_machine([0, 0, 0], [0, 0, 0], &[('A', 'Z')]);
        assert_eq!(dec.encrypt_char(result), Ok('A'));
    }

    #[test]
    fn test_no_letter_encrypts_to_itself() {
        let mut machine = test_machine([7, 3, 20], [1, 0, 5], &[('Q', 'W'), ('E', 'R')]);
        for _ in 0..4 {
            for s in Letter::all() {
                assert_ne!(machine.encrypt_letter(s), s);
            }
        }
    }
}
