// crates/microcipher-core/src/rotor/engine.rs

use tracing::debug;

use crate::error::Result;
use crate::key::key::{Key, WheelSet};
use crate::rotor::pipeline::cipher_one;
use crate::rotor::stack::RotorStack;
use crate::validate::{validate_text, SPACE};
use crate::wiring::sets::RotorTableSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub calls: u64,
    pub letters: u64,
    pub spaces: u64,
}

/// One character of a traced run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceStep {
    pub input: char,
    pub output: char,
    /// [fast, medium, slow] offsets the character was ciphered at.
    pub offsets: [usize; 3],
}

/// Owns one table set and one rotor stack.
///
/// Rotor state streams across `transform` calls: ciphering "AB" once gives
/// the same result as ciphering "A" then "B". Use `rewind`, `reset` or
/// `oneshot` to start from known positions. Not meant to be shared between
/// threads; give each caller its own engine.
#[derive(Clone, Debug)]
pub struct Engine {
    tables: RotorTableSet,
    stack: RotorStack,
    origin: RotorStack,
    pub stats: Counters,
}

impl Engine {
    /// Plain-wheel engine from 1-based settings.
    pub fn new(fast: u32, medium: u32, slow: u32) -> Result<Self> {
        Self::with_tables(RotorTableSet::plain(), fast, medium, slow)
    }

    pub fn with_tables(tables: RotorTableSet, fast: u32, medium: u32, slow: u32) -> Result<Self> {
        let stack = RotorStack::new(fast, medium, slow)?;
        debug!(offsets = ?stack.offsets(), "engine ready");
        Ok(Self {
            tables,
            stack,
            origin: stack,
            stats: Counters::default(),
        })
    }

    pub fn from_key(key: &Key) -> Result<Self> {
        key.validate()?;
        debug!(wheels = %key.wheels, "engine from key");
        Self::with_tables(
            RotorTableSet::for_wheels(key.wheels),
            key.fast,
            key.medium,
            key.slow,
        )
    }

    pub fn historical(fast: u32, medium: u32, slow: u32) -> Result<Self> {
        Self::from_key(&Key::new(WheelSet::Historical, fast, medium, slow)?)
    }

    /// Cipher `text` left to right, continuing from the current rotor state.
    ///
    /// The whole string is checked first; on `InvalidCharacter` nothing is
    /// ciphered and the rotors do not move.
    pub fn transform(&mut self, text: &str) -> Result<String> {
        validate_text(text)?;

        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            out.push(self.cipher_char(ch)?);
        }

        self.stats.calls += 1;
        debug!(
            len = text.len(),
            offsets = ?self.stack.offsets(),
            "transform done"
        );
        Ok(out)
    }

    /// Like `transform`, recording the offsets each character was ciphered at.
    pub fn trace(&mut self, text: &str) -> Result<Vec<TraceStep>> {
        validate_text(text)?;

        let mut steps = Vec::with_capacity(text.len());
        for input in text.chars() {
            let offsets = self.stack.offsets();
            let output = self.cipher_char(input)?;
            steps.push(TraceStep {
                input,
                output,
                offsets,
            });
        }

        self.stats.calls += 1;
        Ok(steps)
    }

    /// Cipher from the construction-time positions without touching this
    /// engine's live state.
    pub fn oneshot(&self, text: &str) -> Result<String> {
        let mut scratch = Self {
            tables: self.tables,
            stack: self.origin,
            origin: self.origin,
            stats: Counters::default(),
        };
        scratch.transform(text)
    }

    /// Back to the construction-time (or last `reset`) positions.
    pub fn rewind(&mut self) {
        self.stack = self.origin;
    }

    /// Re-seed from new 1-based settings; they also become the rewind point.
    pub fn reset(&mut self, fast: u32, medium: u32, slow: u32) -> Result<()> {
        let stack = RotorStack::new(fast, medium, slow)?;
        self.stack = stack;
        self.origin = stack;
        Ok(())
    }

    pub fn positions(&self) -> &RotorStack {
        &self.stack
    }

    pub fn tables(&self) -> &RotorTableSet {
        &self.tables
    }

    fn cipher_char(&mut self, ch: char) -> Result<char> {
        if ch == SPACE {
            self.stats.spaces += 1;
        } else {
            self.stats.letters += 1;
        }
        cipher_one(ch, &mut self.stack, &self.tables)
    }
}
