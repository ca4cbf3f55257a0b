// crates/microcipher-cli/src/cmd/mod.rs

pub mod args;
pub mod cipher;
pub mod key;
pub mod tables;
pub mod trace;
