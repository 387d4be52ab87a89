//! C7/C8: filtration and LCS verification

pub mod filtration;
pub mod lcs;

pub use filtration::ngram_similarity;
pub use lcs::{lcs_length, lcs_similarity};
