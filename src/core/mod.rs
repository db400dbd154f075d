pub mod bigram;
pub mod classifier;
pub mod engine;
pub mod frequency;
pub mod inventory;
pub mod syllabicity;
pub mod tokenizer;
pub mod types;
