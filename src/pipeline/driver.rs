//! Pipeline driver (C9)
//!
//! Partition loop, parallel fan-out over query ids within each
//! partition, two-tier verification per `spec.md` §4.9. Structured the
//! same way as the preprocessor: a dedicated rayon pool sized to
//! `config.threads`, `install`ed around the parallel section.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::DetectorConfig;
use crate::error::CloneError;
use crate::index::InvertedIndex;
use crate::locate::locate;
use crate::ngram::ngram_count;
use crate::preprocess::preprocess;
use crate::shared::models::ClonePairResult;
use crate::shared::ports::TokenizerRegistry;
use crate::verify::filtration;
use crate::verify::lcs;

use super::sink::PairSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    pub total_sequences: usize,
    pub pairs_emitted: usize,
}

/// Run the full C1–C9 pipeline against `source_root`, writing the pair
/// file to `pair_file_path` and the code-blocks side output to
/// `codeblocks_path`.
///
/// `interrupted` is shared with a SIGINT handler installed by the
/// caller (the CLI harness); the driver polls it between queries and
/// between partitions and, if set, flushes the sink and returns
/// `CloneError::Interrupted`.
pub fn run_pipeline(
    source_root: &Path,
    config: &DetectorConfig,
    pair_file_path: &Path,
    codeblocks_path: &Path,
    interrupted: Arc<AtomicBool>,
) -> Result<PipelineStats, CloneError> {
    let registry = TokenizerRegistry::for_language(config.language);
    let sequences = preprocess(source_root, &registry, config, codeblocks_path)?;
    let total = sequences.len();
    info!(total_sequences = total, partition_count = config.partition_count, "preprocessing complete");

    let partition_size = total
        .checked_add(config.partition_count - 1)
        .map(|sum| sum / config.partition_count)
        .ok_or_else(|| CloneError::Config("partitionSize computation overflowed".into()))?;

    let sink = PairSink::spawn(pair_file_path)?;
    let pairs_emitted = Arc::new(std::sync::atomic::AtomicUsize::new(0));

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| CloneError::Config(format!("failed to build thread pool: {e}")))?;

    let run_result: Result<(), CloneError> = pool.install(|| {
        for p in 0..config.partition_count {
            let s = p * partition_size;
            // spec.md §9: a partition start landing exactly on
            // totalSequences is a no-op, not an error.
            if s >= total {
                break;
            }
            if interrupted.load(Ordering::Relaxed) {
                debug!(partition = p, "interrupted before partition started");
                break;
            }

            let plen = partition_size.min(total - s);
            let index = InvertedIndex::build(&sequences, s as u32, plen, config.n);
            debug!(partition = p, start = s, len = plen, queries = total - s - 1, "partition indexed");

            let sender = sink.sender();
            let pairs_emitted = Arc::clone(&pairs_emitted);
            let interrupted_inner = Arc::clone(&interrupted);

            (s + 1..total).into_par_iter().try_for_each(|q| -> Result<(), CloneError> {
                if interrupted_inner.load(Ordering::Relaxed) {
                    return Ok(());
                }

                let query = &sequences[q];
                let len_q = query.tokens.len();
                if ngram_count(len_q, config.n) == 0 {
                    return Ok(());
                }

                for candidate in locate(&index, &query.tokens, q as u32, config.n) {
                    let other = &sequences[candidate.id as usize];
                    let len_c = other.tokens.len();

                    let sim_ngram =
                        filtration::ngram_similarity(candidate.shared, len_q, len_c, config.n);
                    if !filtration::passes_threshold(sim_ngram, config.filtration_threshold) {
                        continue;
                    }

                    let sim_fast = lcs::fast_path_similarity(candidate.shared, len_q, len_c, config.n);
                    let pair = if lcs::passes_threshold(sim_fast, config.verification_threshold) {
                        ClonePairResult::new(candidate.id, q as u32, sim_fast, None)
                    } else {
                        let lcs_len = lcs::lcs_length(&query.tokens, &other.tokens);
                        let sim_lcs = lcs::lcs_similarity(lcs_len, len_q, len_c);
                        if !lcs::passes_threshold(sim_lcs, config.verification_threshold) {
                            continue;
                        }
                        ClonePairResult::new(candidate.id, q as u32, sim_ngram, Some(sim_lcs))
                    };

                    sender.send(pair).map_err(|_| {
                        CloneError::Io(std::io::Error::other("pair sink writer thread terminated"))
                    })?;
                    pairs_emitted.fetch_add(1, Ordering::Relaxed);
                }

                Ok(())
            })?;
            debug!(partition = p, pairs_emitted = pairs_emitted.load(Ordering::Relaxed), "partition queried");
        }
        Ok(())
    });

    sink.finish()?;
    run_result?;

    if interrupted.load(Ordering::Relaxed) {
        return Err(CloneError::Interrupted);
    }

    Ok(PipelineStats {
        total_sequences: total,
        pairs_emitted: pairs_emitted.load(Ordering::Relaxed),
    })
}
