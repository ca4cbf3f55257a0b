// crates/microcipher-core/src/validate.rs

use crate::error::{CipherError, Result};
use crate::rotor::stack::{RotorRole, SETTING_MAX, SETTING_MIN};
use crate::wiring::table::ALPHABET_LEN;

pub const SPACE: char = ' ';

pub fn validate_setting(role: RotorRole, value: u32) -> Result<()> {
    if !(SETTING_MIN..=SETTING_MAX).contains(&value) {
        return Err(CipherError::InvalidRotorSetting { role, value });
    }
    Ok(())
}

pub fn validate_settings(fast: u32, medium: u32, slow: u32) -> Result<()> {
    validate_setting(RotorRole::Fast, fast)?;
    validate_setting(RotorRole::Medium, medium)?;
    validate_setting(RotorRole::Slow, slow)?;
    Ok(())
}

/// Whole-string check run before any character is ciphered, so a bad
/// character never leaves partial output or moved rotors behind.
pub fn validate_text(text: &str) -> Result<()> {
    match text
        .chars()
        .enumerate()
        .find(|&(_, ch)| ch != SPACE && !ch.is_ascii_uppercase())
    {
        Some((pos, ch)) => Err(CipherError::InvalidCharacter { ch, pos }),
        None => Ok(()),
    }
}

/// A wiring must be a bijection over A..Z.
pub fn validate_wiring(wiring: &str) -> Result<()> {
    let bytes = wiring.as_bytes();
    if bytes.len() != ALPHABET_LEN {
        return Err(CipherError::InvalidWiring(format!(
            "expected {ALPHABET_LEN} letters, got {}",
            wiring.chars().count()
        )));
    }

    let mut seen = [false; ALPHABET_LEN];
    for (i, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_uppercase() {
            return Err(CipherError::InvalidWiring(format!(
                "non-letter {:?} at index {i}",
                b as char
            )));
        }
        let slot = (b - b'A') as usize;
        if seen[slot] {
            return Err(CipherError::InvalidWiring(format!(
                "letter {:?} appears more than once",
                b as char
            )));
        }
        seen[slot] = true;
    }

    Ok(())
}
