pub mod error;
pub mod validate;

pub mod wiring;
pub mod rotor;
pub mod key;

pub use crate::error::CipherError;
pub use crate::key::key::{Key, WheelSet};
pub use crate::rotor::engine::Engine;
pub use crate::rotor::stack::RotorStack;
pub use crate::wiring::sets::RotorTableSet;
pub use crate::wiring::table::WiringTable;
