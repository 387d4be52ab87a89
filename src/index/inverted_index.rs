//! Inverted index (C5)
//!
//! Flat postings array plus a hash-indexed offset/length table
//! (`spec.md` §9: "prefer a flat representation ... avoids per-bucket
//! allocation and plays well with cache prefetch during location"),
//! grounded on the teacher's `TokenHashIndex` bucket-then-scan shape
//! in `infrastructure/token_hash_index.rs`, generalized from exact-hash
//! buckets to N-gram postings with multiplicity.
//!
//! Built once per partition via two passes: count postings per hash,
//! then fill a single pre-sized array — no per-bucket `Vec` growth.

use std::collections::HashMap;

use crate::ngram::{build_ngram_multiset, NGramHash};
use crate::shared::models::TokenSequence;

/// One posting: a partition-local sequence id and how many times the
/// N-gram recurs in that sequence.
pub type Posting = (u32, u32);

pub struct InvertedIndex {
    /// Global id of the first sequence in this partition.
    pub partition_start: u32,
    /// Number of sequences covered, `[partition_start, partition_start + partition_len)`.
    pub partition_len: usize,
    offsets: HashMap<NGramHash, (u32, u32)>,
    postings: Vec<Posting>,
}

impl InvertedIndex {
    /// Build the index over `sequences[partition_start .. partition_start + len)`.
    /// `sequences` is the full frozen global list; only the partition
    /// slice is indexed (`spec.md` §3's `InvertedIndex` invariant).
    pub fn build(sequences: &[TokenSequence], partition_start: u32, len: usize, n: usize) -> Self {
        let slice = &sequences[partition_start as usize..partition_start as usize + len];

        let multisets: Vec<Vec<(NGramHash, u32)>> = slice
            .iter()
            .map(|seq| build_ngram_multiset(&seq.tokens, n))
            .collect();

        let mut counts: HashMap<NGramHash, u32> = HashMap::new();
        for multiset in &multisets {
            for (hash, _) in multiset {
                *counts.entry(*hash).or_insert(0) += 1;
            }
        }

        let mut offsets = HashMap::with_capacity(counts.len());
        let mut cursor: HashMap<NGramHash, u32> = HashMap::with_capacity(counts.len());
        let mut next_offset = 0u32;
        for (hash, count) in &counts {
            offsets.insert(*hash, (next_offset, *count));
            cursor.insert(*hash, next_offset);
            next_offset += count;
        }

        let mut postings = vec![(0u32, 0u32); next_offset as usize];
        for (local_id, multiset) in multisets.into_iter().enumerate() {
            for (hash, multiplicity) in multiset {
                let pos = cursor.get_mut(&hash).expect("hash counted in pass 1");
                postings[*pos as usize] = (local_id as u32, multiplicity);
                *pos += 1;
            }
        }

        Self {
            partition_start,
            partition_len: len,
            offsets,
            postings,
        }
    }

    /// Postings for one N-gram hash, ordered by local id ascending.
    pub fn postings_for(&self, hash: NGramHash) -> &[Posting] {
        match self.offsets.get(&hash) {
            Some((start, len)) => &self.postings[*start as usize..(*start + *len) as usize],
            None => &[],
        }
    }

    /// Convert a global sequence id into this partition's local id,
    /// `None` if outside the partition's range.
    pub fn local_id(&self, global_id: u32) -> Option<u32> {
        if global_id >= self.partition_start
            && (global_id as usize) < self.partition_start as usize + self.partition_len
        {
            Some(global_id - self.partition_start)
        } else {
            None
        }
    }

    pub fn global_id(&self, local_id: u32) -> u32 {
        self.partition_start + local_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Span;

    fn seq(id: u32, tokens: Vec<u32>) -> TokenSequence {
        TokenSequence::new(id, format!("f{id}.py"), Span::new(1, 0, 10, 0), tokens)
    }

    #[test]
    fn test_build_and_lookup_postings() {
        let sequences = vec![
            seq(0, vec![1, 2, 3, 4, 5]),
            seq(1, vec![1, 2, 3, 4, 5]),
            seq(2, vec![9, 9, 9, 9, 9]),
        ];
        let index = InvertedIndex::build(&sequences, 0, 3, 2);

        let multiset = build_ngram_multiset(&[1, 2, 3, 4, 5], 2);
        let (first_hash, _) = multiset[0];
        let postings = index.postings_for(first_hash);
        // sequences 0 and 1 share this hash, each with multiplicity 1
        assert_eq!(postings, &[(0, 1), (1, 1)]);
    }

    #[test]
    fn test_partition_offset_and_local_id_roundtrip() {
        let sequences = vec![
            seq(0, vec![1, 2, 3]),
            seq(1, vec![1, 2, 3]),
            seq(2, vec![1, 2, 3]),
            seq(3, vec![1, 2, 3]),
        ];
        // Partition starting at global id 2, covering [2, 4)
        let index = InvertedIndex::build(&sequences, 2, 2, 2);
        assert_eq!(index.local_id(2), Some(0));
        assert_eq!(index.local_id(3), Some(1));
        assert_eq!(index.local_id(1), None);
        assert_eq!(index.global_id(0), 2);
    }

    #[test]
    fn test_unknown_hash_yields_empty_postings() {
        let sequences = vec![seq(0, vec![1, 2, 3])];
        let index = InvertedIndex::build(&sequences, 0, 1, 2);
        assert!(index.postings_for(u64::MAX).is_empty());
    }

    #[test]
    fn test_multiplicity_recorded() {
        let sequences = vec![seq(0, vec![1, 1, 1])];
        let index = InvertedIndex::build(&sequences, 0, 1, 2);
        let multiset = build_ngram_multiset(&[1, 1, 1], 2);
        let (hash, mult) = multiset[0];
        assert_eq!(mult, 2);
        assert_eq!(index.postings_for(hash), &[(0, 2)]);
    }
}
