// crates/microcipher-core/src/wiring/table.rs

use std::fmt;

use crate::error::Result;
use crate::validate::validate_wiring;

pub const ALPHABET_LEN: usize = 26;

/// One rotor's (or the reflector's) substitution at offset zero:
/// index i maps to the letter stored at i.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WiringTable([u8; ALPHABET_LEN]);

impl WiringTable {
    pub fn new(wiring: &str) -> Result<Self> {
        validate_wiring(wiring)?;
        let mut t = [0u8; ALPHABET_LEN];
        t.copy_from_slice(wiring.as_bytes());
        Ok(Self(t))
    }

    /// Build a table in const context. An invalid wiring fails compilation.
    pub const fn from_static(wiring: &[u8; ALPHABET_LEN]) -> Self {
        let mut seen = [false; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let b = wiring[i];
            assert!(b >= b'A' && b <= b'Z', "wiring must be uppercase A..Z");
            let slot = (b - b'A') as usize;
            assert!(!seen[slot], "wiring letters must be distinct");
            seen[slot] = true;
            i += 1;
        }
        Self(*wiring)
    }

    /// A..Z in order.
    pub const fn identity() -> Self {
        let mut t = [0u8; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            t[i] = b'A' + i as u8;
            i += 1;
        }
        Self(t)
    }

    pub fn index_of(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.0.iter().position(|&b| b == letter as u8)
    }

    /// Letter at `index`, reduced mod 26.
    #[inline]
    pub fn letter_at(&self, index: usize) -> char {
        self.0[index % ALPHABET_LEN] as char
    }

    #[inline]
    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        self.0[index % ALPHABET_LEN]
    }

    /// The table read end-to-end backwards.
    pub fn reversed(&self) -> Self {
        let mut t = self.0;
        t.reverse();
        Self(t)
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}

impl Default for WiringTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for WiringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
