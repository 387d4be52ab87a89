//! N-gram builder (C4)
//!
//! Turns a token sequence into the multiset of its length-N N-grams,
//! each represented by a 64-bit rolling polynomial hash so order
//! within the N-gram matters (`spec.md` §4.4). The rolling formulation
//! avoids recomputing a fresh hash per window: each successive N-gram
//! hash derives from the previous one in O(1) instead of O(N).

/// Fixed prime base for the polynomial hash. Large and odd so powers
/// don't degenerate under wraparound in `u64` arithmetic.
const BASE: u64 = 1_000_000_007;

/// One N-gram's hash plus how many times it recurred so far in the
/// multiset (assigned by `build`, not by this type).
pub type NGramHash = u64;

/// Build the multiset of N-gram hashes for `tokens`, returned as
/// `(hash, multiplicity)` pairs sorted by hash for deterministic
/// iteration. `tokens.len() < n` yields the empty multiset — such
/// sequences cannot participate in location (`spec.md` §4.4).
pub fn build_ngram_multiset(tokens: &[u32], n: usize) -> Vec<(NGramHash, u32)> {
    let hashes = rolling_hashes(tokens, n);
    if hashes.is_empty() {
        return Vec::new();
    }

    let mut counts: std::collections::HashMap<NGramHash, u32> = std::collections::HashMap::new();
    for h in hashes {
        *counts.entry(h).or_insert(0) += 1;
    }

    let mut out: Vec<(NGramHash, u32)> = counts.into_iter().collect();
    out.sort_unstable_by_key(|(h, _)| *h);
    out
}

/// Number of N-grams a sequence of `len` tokens has for width `n`.
pub fn ngram_count(len: usize, n: usize) -> usize {
    if n == 0 || len < n {
        0
    } else {
        len - n + 1
    }
}

/// Compute every length-`n` sliding-window hash over `tokens`, in
/// order, via a rolling polynomial hash: `h(tokens[i..i+n])`.
fn rolling_hashes(tokens: &[u32], n: usize) -> Vec<u64> {
    let len = tokens.len();
    if n == 0 || len < n {
        return Vec::new();
    }

    // BASE^(n-1), needed to peel off the leading term when sliding.
    let mut high_power: u64 = 1;
    for _ in 0..n - 1 {
        high_power = high_power.wrapping_mul(BASE);
    }

    let mut hashes = Vec::with_capacity(len - n + 1);
    let mut hash: u64 = 0;
    for &t in &tokens[0..n] {
        hash = hash.wrapping_mul(BASE).wrapping_add(t as u64);
    }
    hashes.push(hash);

    for i in n..len {
        let leaving = tokens[i - n] as u64;
        let entering = tokens[i] as u64;
        hash = hash.wrapping_sub(leaving.wrapping_mul(high_power));
        hash = hash.wrapping_mul(BASE).wrapping_add(entering);
        hashes.push(hash);
    }

    hashes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_count() {
        assert_eq!(ngram_count(5, 2), 4);
        assert_eq!(ngram_count(1, 2), 0);
        assert_eq!(ngram_count(0, 1), 0);
    }

    #[test]
    fn test_short_sequence_yields_empty_multiset() {
        assert!(build_ngram_multiset(&[1, 2], 5).is_empty());
    }

    #[test]
    fn test_identical_sequences_yield_identical_multisets() {
        let a = build_ngram_multiset(&[1, 2, 3, 4, 5], 2);
        let b = build_ngram_multiset(&[1, 2, 3, 4, 5], 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_matters() {
        let a = build_ngram_multiset(&[1, 2, 3], 2);
        let b = build_ngram_multiset(&[3, 2, 1], 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_multiplicity_counts_repeats() {
        // tokens [1,1,1]: n=2 grams are (1,1) and (1,1) -> multiplicity 2
        let m = build_ngram_multiset(&[1, 1, 1], 2);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].1, 2);
    }

    #[test]
    fn test_n_equals_one_degenerate() {
        let m = build_ngram_multiset(&[7], 1);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].1, 1);
    }

    #[test]
    fn test_rolling_hash_matches_recompute() {
        let tokens = [10u32, 20, 30, 40, 50, 60];
        let n = 3;
        let rolled = rolling_hashes(&tokens, n);

        let recomputed: Vec<u64> = (0..=tokens.len() - n)
            .map(|i| {
                let mut h: u64 = 0;
                for &t in &tokens[i..i + n] {
                    h = h.wrapping_mul(BASE).wrapping_add(t as u64);
                }
                h
            })
            .collect();

        assert_eq!(rolled, recomputed);
    }
}
