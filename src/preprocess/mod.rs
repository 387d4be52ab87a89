//! C3: directory walk, parallel tokenization, deterministic merge

pub mod codeblocks;
pub mod preprocessor;
pub mod walker;

pub use preprocessor::preprocess;
