// crates/microcipher-core/src/key/key.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, Result};
use crate::validate::validate_settings;

/// Which wiring every wheel carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WheelSet {
    /// A..Z on every wheel.
    #[default]
    Plain,
    /// Three fixed historical rotors and a fixed reflector.
    Historical,
}

impl WheelSet {
    pub fn name(self) -> &'static str {
        match self {
            WheelSet::Plain => "plain",
            WheelSet::Historical => "historical",
        }
    }

    /// Single-letter code used in key strings.
    pub fn code(self) -> char {
        match self {
            WheelSet::Plain => 'P',
            WheelSet::Historical => 'H',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(WheelSet::Plain),
            "H" => Some(WheelSet::Historical),
            _ => None,
        }
    }
}

impl fmt::Display for WheelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WheelSet {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(WheelSet::Plain),
            "historical" => Ok(WheelSet::Historical),
            other => Err(CipherError::KeyFormat(format!("unknown wheel set: {other}"))),
        }
    }
}

/// Everything needed to rebuild an engine at its starting positions.
/// Settings are the 1-based dial values (1..=26).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub wheels: WheelSet,
    pub fast: u32,
    pub medium: u32,
    pub slow: u32,
}

impl Key {
    pub fn new(wheels: WheelSet, fast: u32, medium: u32, slow: u32) -> Result<Self> {
        let key = Self {
            wheels,
            fast,
            medium,
            slow,
        };
        key.validate()?;
        Ok(key)
    }

    pub fn validate(&self) -> Result<()> {
        validate_settings(self.fast, self.medium, self.slow)
    }

    /// [fast, medium, slow]
    pub fn settings(&self) -> [u32; 3] {
        [self.fast, self.medium, self.slow]
    }
}

impl Default for Key {
    fn default() -> Self {
        crate::key::defaults::default_key()
    }
}
