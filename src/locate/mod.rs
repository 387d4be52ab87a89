//! C6: candidate location against a partition's inverted index

pub mod locator;

pub use locator::{locate, Candidate};
