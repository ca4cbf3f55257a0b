pub mod engine;
pub mod permute;
pub mod pipeline;
pub mod stack;
