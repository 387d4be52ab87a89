//! Clone pair results

use serde::{Deserialize, Serialize};

/// An accepted clone pair: `(id1, id2, nGramSimilarity, lcsSimilarity?)`.
///
/// `id1 < id2` always — see `spec.md` §4.6's ordering rule, which
/// guarantees every unordered pair is considered at most once.
/// `lcs_similarity` is absent when the pair was accepted by the
/// fast path (N-gram similarity already at or above the verification
/// threshold — `spec.md` §4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClonePairResult {
    pub id1: u32,
    pub id2: u32,
    pub ngram_similarity: u8,
    pub lcs_similarity: Option<u8>,
}

impl ClonePairResult {
    /// Construct a pair, normalizing the two ids to satisfy `id1 < id2`.
    pub fn new(a: u32, b: u32, ngram_similarity: u8, lcs_similarity: Option<u8>) -> Self {
        let (id1, id2) = if a < b { (a, b) } else { (b, a) };
        Self {
            id1,
            id2,
            ngram_similarity,
            lcs_similarity,
        }
    }

    /// Render one line per `spec.md` §6:
    /// `id1,id2,ngramSim[,lcsSim]`
    pub fn to_csv_line(&self) -> String {
        match self.lcs_similarity {
            Some(lcs) => format!("{},{},{},{}", self.id1, self.id2, self.ngram_similarity, lcs),
            None => format!("{},{},{}", self.id1, self.id2, self.ngram_similarity),
        }
    }
}
