// crates/microcipher-core/src/rotor/permute.rs
//
// Rotated views of a wiring table. Pure functions of (table, offset);
// offsets are reduced mod 26 here so callers may pass raw rotor values.

use crate::wiring::table::{WiringTable, ALPHABET_LEN};

/// A wiring table rotated by some offset. Recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermutedAlphabet([u8; ALPHABET_LEN]);

impl PermutedAlphabet {
    #[inline]
    pub fn at(&self, index: usize) -> char {
        self.0[index % ALPHABET_LEN] as char
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}

/// Cyclic right rotation: `out[i] = table[(i - offset) mod 26]`.
pub fn forward_permute(table: &WiringTable, offset: usize) -> PermutedAlphabet {
    let off = offset % ALPHABET_LEN;
    let mut out = [0u8; ALPHABET_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = table.byte_at(i + ALPHABET_LEN - off);
    }
    PermutedAlphabet(out)
}

/// Cyclic left rotation: `out[i] = table[(i + offset) mod 26]`.
pub fn inverse_permute(table: &WiringTable, offset: usize) -> PermutedAlphabet {
    let off = offset % ALPHABET_LEN;
    let mut out = [0u8; ALPHABET_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = table.byte_at(i + off);
    }
    PermutedAlphabet(out)
}
