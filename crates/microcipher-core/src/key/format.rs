// crates/microcipher-core/src/key/format.rs
//
// Textual key form (one line, copy/paste friendly):
//   MCK1:<W>-<FF>-<MM>-<SS>-<CRC>
//
// W    wheel set code (P = plain, H = historical)
// FF.. fast/medium/slow dial settings, two decimal digits, 01..26
// CRC  crc32 of everything before the final '-', 8 lowercase hex digits

use crate::error::{CipherError, Result};
use crate::key::key::{Key, WheelSet};

const PREFIX: &str = "MCK1:";

pub fn encode_key(key: &Key) -> String {
    let body = format!(
        "{PREFIX}{}-{:02}-{:02}-{:02}",
        key.wheels.code(),
        key.fast,
        key.medium,
        key.slow
    );
    let c = crc32(body.as_bytes());
    format!("{body}-{c:08x}")
}

pub fn decode_key(s: &str) -> Result<Key> {
    let s = s.trim();
    let fields = s
        .strip_prefix(PREFIX)
        .ok_or_else(|| CipherError::KeyFormat("missing MCK1: prefix".into()))?;

    let (head, crc_hex) = s
        .rsplit_once('-')
        .ok_or_else(|| CipherError::KeyFormat("missing checksum".into()))?;
    if crc_hex.len() != 8 {
        return Err(CipherError::KeyFormat("checksum must be 8 hex digits".into()));
    }
    let crc_expected = u32::from_str_radix(crc_hex, 16)
        .map_err(|_| CipherError::KeyFormat(format!("bad checksum digits: {crc_hex}")))?;
    if crc32(head.as_bytes()) != crc_expected {
        return Err(CipherError::KeyFormat("crc32 mismatch".into()));
    }

    let parts: Vec<&str> = fields.split('-').collect();
    if parts.len() != 5 {
        return Err(CipherError::KeyFormat(format!(
            "expected 5 fields, got {}",
            parts.len()
        )));
    }

    let wheels = WheelSet::from_code(parts[0])
        .ok_or_else(|| CipherError::KeyFormat(format!("unknown wheel code: {}", parts[0])))?;
    let fast = read_setting(parts[1])?;
    let medium = read_setting(parts[2])?;
    let slow = read_setting(parts[3])?;

    Key::new(wheels, fast, medium, slow)
}

fn read_setting(field: &str) -> Result<u32> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::KeyFormat(format!(
            "setting must be two digits: {field:?}"
        )));
    }
    field
        .parse()
        .map_err(|_| CipherError::KeyFormat(format!("bad setting: {field:?}")))
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
