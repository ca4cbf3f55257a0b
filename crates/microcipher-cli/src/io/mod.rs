pub mod key_file;
pub mod text;
