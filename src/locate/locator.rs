//! Location (C6)
//!
//! Walks a query's N-gram multiset against a partition's inverted
//! index, accumulating a shared-N-gram count per candidate. The
//! accumulator is thread-local and cleared (not reallocated) between
//! queries, per `spec.md` §9's explicit call-out — this runs once per
//! `q` inside the parallel fan-out in C9, so reallocating per call
//! would show up directly in wall-clock time on large partitions.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::index::InvertedIndex;
use crate::ngram::build_ngram_multiset;

thread_local! {
    static SHARED_COUNTS: RefCell<HashMap<u32, u32>> = RefCell::new(HashMap::new());
}

/// One located candidate: a global sequence id strictly less than the
/// query id, and the number of N-grams shared with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub shared: u32,
}

/// Locate every candidate `c < query_id` in `index` that shares at
/// least one N-gram with `query_tokens`, ordered by `c` ascending
/// (`spec.md` §4.6's tie-break rule).
pub fn locate(index: &InvertedIndex, query_tokens: &[u32], query_id: u32, n: usize) -> Vec<Candidate> {
    let query_multiset = build_ngram_multiset(query_tokens, n);
    if query_multiset.is_empty() {
        return Vec::new();
    }

    SHARED_COUNTS.with(|cell| {
        let mut shared = cell.borrow_mut();
        shared.clear();

        for (hash, m_q) in &query_multiset {
            for &(local_id, multiplicity) in index.postings_for(*hash) {
                let candidate_id = index.global_id(local_id);
                if candidate_id >= query_id {
                    continue;
                }
                let contribution = (*m_q).min(multiplicity);
                *shared.entry(candidate_id).or_insert(0) += contribution;
            }
        }

        let mut out: Vec<Candidate> = shared
            .iter()
            .map(|(&id, &shared)| Candidate { id, shared })
            .collect();
        out.sort_unstable_by_key(|c| c.id);
        out
    })
}
