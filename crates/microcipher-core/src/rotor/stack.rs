// crates/microcipher-core/src/rotor/stack.rs
//
// Odometer stepping for the three wheels.
//
// After every ciphered letter (never after a space):
//   1. fast += 1; if fast % 26 == 0 { medium += 1; fast = 0 }
//   2. if medium % 26 == 0 && fast % 26 != 0 && medium >= 25 { slow += 1; medium = 1 }
//
// Rule 2 lets the medium wheel sit at 26 for one letter after it wraps and then
// lands it on 1, not 0, when the slow wheel advances. Output compatibility
// depends on that quirk; keep it.

use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::validate::validate_settings;
use crate::wiring::table::ALPHABET_LEN;

/// Lowest user-facing dial setting.
pub const SETTING_MIN: u32 = 1;
/// Highest user-facing dial setting.
pub const SETTING_MAX: u32 = ALPHABET_LEN as u32;

const LEN: u32 = ALPHABET_LEN as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotorRole {
    Fast,
    Medium,
    Slow,
}

impl fmt::Display for RotorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RotorRole::Fast => "fast",
            RotorRole::Medium => "medium",
            RotorRole::Slow => "slow",
        })
    }
}

/// What a single step carried into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Carry {
    None,
    Medium,
    Slow,
}

/// Rotor positions. `fast` and `medium` hold the raw values the carry rule
/// reads (medium may briefly be 26); `slow` is kept reduced mod 26.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotorStack {
    fast: u32,
    medium: u32,
    slow: u32,
}

impl RotorStack {
    /// From 1-based dial settings (1..=26).
    pub fn new(fast: u32, medium: u32, slow: u32) -> Result<Self> {
        validate_settings(fast, medium, slow)?;
        Ok(Self::from_offsets(fast - 1, medium - 1, slow - 1))
    }

    /// From 0-based offsets, each reduced mod 26.
    pub fn from_offsets(fast: u32, medium: u32, slow: u32) -> Self {
        Self {
            fast: fast % LEN,
            medium: medium % LEN,
            slow: slow % LEN,
        }
    }

    /// Re-seed from 1-based settings. On error the stack is left unchanged.
    pub fn reset(&mut self, fast: u32, medium: u32, slow: u32) -> Result<()> {
        *self = Self::new(fast, medium, slow)?;
        Ok(())
    }

    /// Advance after one ciphered letter.
    pub fn step(&mut self) -> Carry {
        let mut carry = Carry::None;

        self.fast += 1;
        if self.fast % LEN == 0 {
            self.medium += 1;
            self.fast = 0;
            carry = Carry::Medium;
        }

        if self.medium % LEN == 0 && self.fast % LEN != 0 && self.medium >= LEN - 1 {
            self.slow = (self.slow + 1) % LEN;
            self.medium = 1;
            carry = Carry::Slow;
        }

        if carry != Carry::None {
            trace!(?carry, fast = self.fast, medium = self.medium, slow = self.slow, "rotor carry");
        }
        carry
    }

    /// Offsets used for permutation, each in 0..26: [fast, medium, slow].
    pub fn offsets(&self) -> [usize; 3] {
        [
            (self.fast % LEN) as usize,
            (self.medium % LEN) as usize,
            (self.slow % LEN) as usize,
        ]
    }

    pub fn offset(&self, role: RotorRole) -> usize {
        let [f, m, s] = self.offsets();
        match role {
            RotorRole::Fast => f,
            RotorRole::Medium => m,
            RotorRole::Slow => s,
        }
    }

    /// Un-normalized values: [fast, medium, slow].
    pub fn raw(&self) -> [u32; 3] {
        [self.fast, self.medium, self.slow]
    }
}

impl Default for RotorStack {
    fn default() -> Self {
        Self::from_offsets(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn settings_are_one_based() {
        let s = RotorStack::new(1, 13, 26).unwrap();
        assert_eq!(s.offsets(), [0, 12, 25]);
    }

    #[test]
    fn out_of_range_setting_is_rejected() {
        assert_eq!(
            RotorStack::new(1, 27, 1),
            Err(CipherError::InvalidRotorSetting {
                role: RotorRole::Medium,
                value: 27
            })
        );
        assert!(matches!(
            RotorStack::new(0, 1, 1),
            Err(CipherError::InvalidRotorSetting {
                role: RotorRole::Fast,
                ..
            })
        ));
    }

    #[test]
    fn fast_wheel_advances_each_step() {
        let mut s = RotorStack::default();
        assert_eq!(s.step(), Carry::None);
        assert_eq!(s.raw(), [1, 0, 0]);
    }

    #[test]
    fn reset_failure_keeps_state() {
        let mut s = RotorStack::from_offsets(5, 6, 7);
        assert!(s.reset(1, 1, 40).is_err());
        assert_eq!(s.raw(), [5, 6, 7]);
        s.reset(2, 3, 4).unwrap();
        assert_eq!(s.raw(), [1, 2, 3]);
    }
}
