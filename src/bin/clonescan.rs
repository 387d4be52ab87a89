//! clonescan CLI
//!
//! Thin harness over the `clonescan` library: maps flags to a
//! `DetectorConfig`, installs a SIGINT handler, runs the pipeline, and
//! maps the result to an exit code (`spec.md` §6). Argument parsing,
//! logging setup, and exit-code mapping are explicitly out of scope
//! for the library core, so they live here uncontested by the tested
//! pipeline — grounded on the `clap::Parser` CLI shape of the
//! teacher's `src/bin/bench-codegraph.rs`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::Parser;
use clonescan::{CloneError, DetectorConfigBuilder, Language};
use tracing::error;

#[derive(Parser)]
#[command(name = "clonescan")]
#[command(about = "Function-level code clone detector", long_about = None)]
struct Cli {
    /// Source directory to scan.
    source: PathBuf,

    /// Pair file output path (internal id format).
    #[arg(long, default_value = "pairs.csv")]
    pair_file: PathBuf,

    /// Code-blocks side-output path.
    #[arg(long, default_value = "codeblocks.csv")]
    codeblocks_file: PathBuf,

    /// Source language.
    #[arg(long, default_value = "java")]
    language: String,

    /// Minimum function length in lines.
    #[arg(long, default_value_t = 6)]
    min_line: usize,

    /// Minimum normalized token count.
    #[arg(long, default_value_t = 50)]
    min_token: usize,

    /// N-gram width.
    #[arg(short = 'n', long, default_value_t = 5)]
    n: usize,

    /// Number of index partitions.
    #[arg(long, default_value_t = 10)]
    partition_count: usize,

    /// Filtration threshold percent.
    #[arg(long, default_value_t = 10)]
    filtration_threshold: u8,

    /// Verification threshold percent.
    #[arg(long, default_value_t = 70)]
    verification_threshold: u8,

    /// Worker thread count (default: all available cores).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let language = match Language::from_name(&cli.language) {
        Some(l) => l,
        None => {
            error!(language = %cli.language, "unknown language");
            return ExitCode::from(clonescan::error::EXIT_CONFIG_ERROR as u8);
        }
    };

    let mut builder = DetectorConfigBuilder::new()
        .language(language)
        .min_line(cli.min_line)
        .min_token(cli.min_token)
        .n(cli.n)
        .partition_count(cli.partition_count)
        .filtration_threshold(cli.filtration_threshold)
        .verification_threshold(cli.verification_threshold);
    if let Some(threads) = cli.threads {
        builder = builder.threads(threads);
    }

    let config = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "configuration error");
            return ExitCode::from(clonescan::error::EXIT_CONFIG_ERROR as u8);
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_for_handler = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_for_handler.store(true, std::sync::atomic::Ordering::SeqCst);
    }) {
        error!(error = %e, "failed to install SIGINT handler");
    }

    match clonescan::run_pipeline(
        &cli.source,
        &config,
        &cli.pair_file,
        &cli.codeblocks_file,
        interrupted,
    ) {
        Ok(stats) => {
            tracing::info!(
                total_sequences = stats.total_sequences,
                pairs_emitted = stats.pairs_emitted,
                "clone detection complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "clone detection failed");
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(err: &CloneError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}
