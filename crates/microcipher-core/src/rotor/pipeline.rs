// crates/microcipher-core/src/rotor/pipeline.rs
//
// One letter through the machine:
//   fast -> medium -> slow (forward_permute), reflector, slow -> medium -> fast (inverse_permute)
//
// Every rotor stage looks its input up in its own wiring table and reads the
// rotated table at that index. The inverse pass undoes each stage exactly and
// the reflector is an involution, so the whole map is its own inverse for a
// fixed set of offsets.

use crate::error::{CipherError, Result};
use crate::rotor::permute::{forward_permute, inverse_permute, PermutedAlphabet};
use crate::rotor::stack::RotorStack;
use crate::validate::SPACE;
use crate::wiring::sets::RotorTableSet;
use crate::wiring::table::WiringTable;

/// Cipher one character and advance the rotors if it was a letter.
///
/// A space comes back unchanged and leaves the rotors where they are.
/// Anything else that is not in A..Z fails with `InvalidCharacter` at
/// position 0 and leaves the rotors untouched.
pub fn cipher_one(letter: char, stack: &mut RotorStack, tables: &RotorTableSet) -> Result<char> {
    if letter == SPACE {
        return Ok(SPACE);
    }
    let out = substitute(letter, stack.offsets(), tables)?;
    stack.step();
    Ok(out)
}

/// The substitution for `letter` at fixed offsets [fast, medium, slow].
pub fn substitute(letter: char, offsets: [usize; 3], tables: &RotorTableSet) -> Result<char> {
    let [f, m, s] = offsets;
    let invalid = || CipherError::InvalidCharacter { ch: letter, pos: 0 };

    let mut t = letter;
    t = stage(&tables.fast, f, t, forward_permute).ok_or_else(invalid)?;
    t = stage(&tables.medium, m, t, forward_permute).ok_or_else(invalid)?;
    t = stage(&tables.slow, s, t, forward_permute).ok_or_else(invalid)?;

    t = reflect(&tables.reflector, t).ok_or_else(invalid)?;

    t = stage(&tables.slow, s, t, inverse_permute).ok_or_else(invalid)?;
    t = stage(&tables.medium, m, t, inverse_permute).ok_or_else(invalid)?;
    t = stage(&tables.fast, f, t, inverse_permute).ok_or_else(invalid)?;

    Ok(t.to_ascii_uppercase())
}

fn stage(
    table: &WiringTable,
    offset: usize,
    letter: char,
    permute: fn(&WiringTable, usize) -> PermutedAlphabet,
) -> Option<char> {
    let i = table.index_of(letter)?;
    Some(permute(table, offset).at(i))
}

/// Reflector: the wiring read backwards, indexed by the wiring itself.
/// Never rotates and never maps a letter to itself (26 is even).
fn reflect(reflector: &WiringTable, letter: char) -> Option<char> {
    let i = reflector.index_of(letter)?;
    Some(reflector.reversed().letter_at(i))
}
