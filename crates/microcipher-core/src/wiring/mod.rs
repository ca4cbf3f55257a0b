pub mod sets;
pub mod table;
