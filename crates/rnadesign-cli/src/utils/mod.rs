pub mod progress;
pub mod structure;
