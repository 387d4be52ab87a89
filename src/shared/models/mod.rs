//! Shared, read-only data model
//!
//! These types are produced once (by the preprocessor, or by
//! verification) and afterwards shared by reference across all
//! worker threads. Nothing here holds interior mutability.

pub mod code_block;
pub mod pair;
pub mod span;
pub mod token_sequence;

pub use code_block::{CodeBlockRecord, FunctionMetadata};
pub use pair::ClonePairResult;
pub use span::Span;
pub use token_sequence::TokenSequence;
