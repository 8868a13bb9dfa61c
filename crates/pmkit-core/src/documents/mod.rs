mod document;
mod generator;
pub mod prompts;

pub use document::{DocKind, Document};
pub use generator::DocumentGenerator;
