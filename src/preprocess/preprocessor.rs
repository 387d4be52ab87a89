//! Preprocessor (C3)
//!
//! Walks the source tree, tokenizes every file in parallel across a
//! dedicated rayon pool sized to `config.threads`, then merges results
//! sequentially in deterministic order (files in walk order, functions
//! in source order) to assign dense `TokenSequence` ids — mirroring
//! the teacher's "parallel map, sequential merge" shape used for
//! cross-file IR assembly in `pipeline/orchestrator.rs`.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::warn;

use crate::config::DetectorConfig;
use crate::error::CloneError;
use crate::shared::models::{CodeBlockRecord, FunctionMetadata, TokenSequence};
use crate::shared::ports::{FunctionSpan, TokenizerRegistry};
use crate::tokenize::normalizer;

use super::codeblocks::CodeBlocksWriter;
use super::walker::walk_source_files;

/// Per-file tokenization result: `None` means the file failed to
/// parse (`PARSE_ERROR`, recovered locally — logged, file skipped).
fn tokenize_file(path: &Path, registry: &TokenizerRegistry) -> Option<Vec<FunctionSpan>> {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "failed to read source file, skipping");
            return None;
        }
    };
    Some(registry.tokenizer().walk_functions(&source))
}

/// Run C3 end to end: tokenize every accepted file under `source_root`
/// in parallel, merge deterministically, and persist a code-blocks
/// side record per accepted `TokenSequence`.
///
/// Returns the frozen, dense-id, global ordered list of sequences.
pub fn preprocess(
    source_root: &Path,
    registry: &TokenizerRegistry,
    config: &DetectorConfig,
    codeblocks_path: &Path,
) -> Result<Vec<TokenSequence>, CloneError> {
    let files = walk_source_files(source_root, registry)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| CloneError::Config(format!("failed to build thread pool: {e}")))?;

    let per_file: Vec<(PathBuf, Option<Vec<FunctionSpan>>)> = pool.install(|| {
        files
            .par_iter()
            .map(|path| (path.clone(), tokenize_file(path, registry)))
            .collect()
    });

    let mut sequences = Vec::new();
    let mut writer = CodeBlocksWriter::create(codeblocks_path)?;
    let tokenizer = registry.tokenizer();

    for (path, spans) in per_file {
        let Some(spans) = spans else { continue };
        let file_path = path.to_string_lossy().into_owned();

        for fs in spans {
            let tokens = normalizer::normalize(&fs.raw_tokens, |t| tokenizer.is_negligible(t));
            let candidate =
                TokenSequence::new(sequences.len() as u32, file_path.clone(), fs.span, tokens);

            if !candidate.meets_threshold(config.min_line, config.min_token) {
                continue;
            }

            let metadata = FunctionMetadata {
                method_name: fs.method_name,
                return_type: fs.return_type,
                param_list: fs.param_list,
                commit_hash: None,
                token_hash: Some(sequence_hash(&candidate.tokens)),
            };
            writer.write_record(&CodeBlockRecord::new(
                file_path.clone(),
                candidate.span,
                metadata,
            ))?;

            sequences.push(candidate);
        }
    }

    writer.flush()?;
    Ok(sequences)
}

/// 64-bit FNV-1a over a sequence's normalized token hashes, used as
/// the persisted `tokenHash` column — distinct from, and coarser than,
/// the per-token 32-bit hash in `tokenize::normalizer`.
fn sequence_hash(tokens: &[u32]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for &token in tokens {
        for byte in token.to_le_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}
