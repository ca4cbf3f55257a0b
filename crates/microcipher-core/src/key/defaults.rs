// crates/microcipher-core/src/key/defaults.rs

use crate::key::key::{Key, WheelSet};

/// Plain wheels, every dial at 1.
pub fn default_key() -> Key {
    Key {
        wheels: WheelSet::Plain,
        fast: 1,
        medium: 1,
        slow: 1,
    }
}
