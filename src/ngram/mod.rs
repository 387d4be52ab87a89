//! C4: N-gram multiset construction

pub mod builder;

pub use builder::{build_ngram_multiset, ngram_count, NGramHash};
