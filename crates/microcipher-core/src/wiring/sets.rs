// crates/microcipher-core/src/wiring/sets.rs
//
// Built-in wheel sets.
// - Plain: every wheel wired A..Z; the reflector reads A..Z backwards (A<->Z, B<->Y, ...).
// - Historical: three fixed rotor wirings (fast, medium, slow) plus a reflector wiring.

use crate::key::key::WheelSet;
use crate::wiring::table::WiringTable;

pub const HISTORICAL_FAST: WiringTable = WiringTable::from_static(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
pub const HISTORICAL_MEDIUM: WiringTable = WiringTable::from_static(b"AJDKSIRUXBLHWTMCQGZNPYFVOE");
pub const HISTORICAL_SLOW: WiringTable = WiringTable::from_static(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");
pub const HISTORICAL_REFLECTOR: WiringTable = WiringTable::from_static(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

/// The four tables one engine ciphers with. The reflector entry is the
/// reflector's wiring; the pipeline reads it reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorTableSet {
    pub fast: WiringTable,
    pub medium: WiringTable,
    pub slow: WiringTable,
    pub reflector: WiringTable,
}

impl RotorTableSet {
    pub const PLAIN: RotorTableSet = RotorTableSet {
        fast: WiringTable::identity(),
        medium: WiringTable::identity(),
        slow: WiringTable::identity(),
        reflector: WiringTable::identity(),
    };

    pub const HISTORICAL: RotorTableSet = RotorTableSet {
        fast: HISTORICAL_FAST,
        medium: HISTORICAL_MEDIUM,
        slow: HISTORICAL_SLOW,
        reflector: HISTORICAL_REFLECTOR,
    };

    pub fn new(
        fast: WiringTable,
        medium: WiringTable,
        slow: WiringTable,
        reflector: WiringTable,
    ) -> Self {
        Self {
            fast,
            medium,
            slow,
            reflector,
        }
    }

    pub fn plain() -> Self {
        Self::PLAIN
    }

    pub fn historical() -> Self {
        Self::HISTORICAL
    }

    pub fn for_wheels(wheels: WheelSet) -> Self {
        match wheels {
            WheelSet::Plain => Self::PLAIN,
            WheelSet::Historical => Self::HISTORICAL,
        }
    }

    /// (role name, table) in fast, medium, slow, reflector order.
    pub fn roles(&self) -> [(&'static str, &WiringTable); 4] {
        [
            ("fast", &self.fast),
            ("medium", &self.medium),
            ("slow", &self.slow),
            ("reflector", &self.reflector),
        ]
    }
}

impl Default for RotorTableSet {
    fn default() -> Self {
        Self::PLAIN
    }
}
