//! C5: per-partition inverted index

pub mod inverted_index;

pub use inverted_index::{InvertedIndex, Posting};
