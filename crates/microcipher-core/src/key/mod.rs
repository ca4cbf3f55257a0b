pub mod defaults;
pub mod format;
pub mod key;
