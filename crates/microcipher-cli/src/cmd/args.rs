// crates/microcipher-cli/src/cmd/args.rs
//
// Key selection shared by every command that builds an engine.
// Precedence: --key, then --key-file, then --wheels/--fast/--medium/--slow
// (each falling back to the default key).

use anyhow::Result;
use clap::Args;
use microcipher_core::key::defaults::default_key;
use microcipher_core::key::format::decode_key;
use microcipher_core::{Key, WheelSet};

use crate::io::key_file;

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Key string (MCK1:...)
    #[arg(long, conflicts_with_all = ["key_file", "wheels", "fast", "medium", "slow"])]
    pub key: Option<String>,

    /// File holding one key string
    #[arg(long, conflicts_with_all = ["wheels", "fast", "medium", "slow"])]
    pub key_file: Option<String>,

    /// Wheel set: "plain" or "historical"
    #[arg(long)]
    pub wheels: Option<WheelSet>,

    /// Fast wheel setting (1..=26)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=26))]
    pub fast: Option<u32>,

    /// Medium wheel setting (1..=26)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=26))]
    pub medium: Option<u32>,

    /// Slow wheel setting (1..=26)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=26))]
    pub slow: Option<u32>,
}

impl KeyArgs {
    pub fn resolve(&self) -> Result<Key> {
        if let Some(s) = self.key.as_deref() {
            return Ok(decode_key(s)?);
        }
        if let Some(p) = self.key_file.as_deref() {
            return key_file::load_key(p);
        }

        let d = default_key();
        let key = Key::new(
            self.wheels.unwrap_or(d.wheels),
            self.fast.unwrap_or(d.fast),
            self.medium.unwrap_or(d.medium),
            self.slow.unwrap_or(d.slow),
        )?;
        Ok(key)
    }
}
