// crates/microcipher-cli/src/io/key_file.rs

use anyhow::{Context, Result};
use microcipher_core::key::format::{decode_key, encode_key};
use microcipher_core::Key;

/// Load a key file (one MCK1 key string) into a Key.
pub fn load_key(path: &str) -> Result<Key> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read key {path}"))?;
    let key = decode_key(&s).with_context(|| format!("decode key {path}"))?;
    Ok(key)
}

/// Save a Key as a one-line key file.
pub fn save_key(path: &str, key: &Key) -> Result<()> {
    let s = format!("{}\n", encode_key(key));
    std::fs::write(path, s).with_context(|| format!("write key {path}"))?;
    Ok(())
}
