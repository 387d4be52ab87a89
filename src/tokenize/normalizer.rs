//! Token normalizer (C1)
//!
//! Operates on the raw token stream of one function. Drops negligible
//! tokens (language-specific: whitespace/comments), then splits what's
//! left at boundaries between letter/digit runs and single punctuation
//! characters, so `foo(bar)` becomes `foo`, `(`, `bar`, `)` regardless
//! of how aggressively the source tokenizer aggregated it.

/// Split a single raw token into its constituent lexical pieces.
///
/// A punctuation character (anything that's neither alphanumeric nor
/// `_`) always starts a new piece and is emitted alone; runs of
/// letters/digits/underscores stay together.
pub fn split_token(raw: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
        } else {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            // Each punctuation character is its own token.
            pieces.push(ch.to_string());
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Stable 32-bit hash of a normalized token's UTF-8 bytes (FNV-1a).
/// Pure and seed-free: equal text always yields the equal integer,
/// across threads and across runs, matching the invariant in
/// `spec.md` §4.1.
pub fn stable_token_hash(token: &str) -> u32 {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    let mut hash = FNV_OFFSET;
    for byte in token.as_bytes() {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Normalize one function's raw token stream into the integer hash
/// sequence a `TokenSequence` stores: drop negligible tokens, split
/// the rest, hash each piece.
pub fn normalize(raw_tokens: &[String], is_negligible: impl Fn(&str) -> bool) -> Vec<u32> {
    raw_tokens
        .iter()
        .filter(|t| !t.is_empty() && !is_negligible(t))
        .flat_map(|t| split_token(t))
        .map(|piece| stable_token_hash(&piece))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token_call_expression() {
        assert_eq!(
            split_token("foo(bar)"),
            vec!["foo", "(", "bar", ")"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_split_token_pure_identifier() {
        assert_eq!(split_token("foo_bar1"), vec!["foo_bar1"]);
    }

    #[test]
    fn test_split_token_pure_punctuation() {
        assert_eq!(
            split_token("=="),
            vec!["=", "="].into_iter().map(String::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_stable_hash_deterministic() {
        assert_eq!(stable_token_hash("foo"), stable_token_hash("foo"));
        assert_ne!(stable_token_hash("foo"), stable_token_hash("bar"));
    }

    #[test]
    fn test_normalize_drops_negligible_and_splits() {
        let raw = vec!["foo(bar)".to_string(), "// comment".to_string(), "".to_string()];
        let normalized = normalize(&raw, |t| t.starts_with("//"));
        // foo, (, bar, ) -> 4 hashes
        assert_eq!(normalized.len(), 4);
    }
}
