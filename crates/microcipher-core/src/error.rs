use thiserror::Error;

use crate::rotor::stack::RotorRole;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid rotor setting: {role} wheel = {value} (expected 1..=26)")]
    InvalidRotorSetting { role: RotorRole, value: u32 },

    #[error("invalid character {ch:?} at position {pos} (expected 'A'..='Z' or space)")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("invalid wiring table: {0}")]
    InvalidWiring(String),

    #[error("key format error: {0}")]
    KeyFormat(String),
}
