//! CSV reading utilities.

mod tokenizer;

pub use tokenizer::tokenize;
