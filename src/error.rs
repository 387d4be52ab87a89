//! Crate-wide error type
//!
//! Mirrors the teacher's `errors.rs::CodegraphError` shape (one
//! `thiserror` variant per fatal condition, `#[from] std::io::Error`),
//! narrowed to the four fatal conditions `spec.md` §7 actually names.
//! `PARSE_ERROR` and `TOO_SHORT` are not represented here: per §7 they
//! are recovered locally (logged and skipped), never surfaced as
//! `Result::Err`.

use thiserror::Error;

/// Exit codes from `spec.md` §6, assigned by the CLI harness when it
/// matches on a returned `CloneError`.
pub const EXIT_CONFIG_ERROR: i32 = 1;
pub const EXIT_SOURCE_ERROR: i32 = 2;
pub const EXIT_IO_ERROR: i32 = 3;
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug, Error)]
pub enum CloneError {
    /// Invalid configuration: negative/zero `N`, unknown language,
    /// partition-size arithmetic overflow, etc.
    #[error("configuration error: {0}")]
    Config(String),

    /// Source root unreadable.
    #[error("source error: {0}")]
    Source(String),

    /// Pair file or code-blocks file could not be opened/written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// External interrupt (SIGINT) requested a clean stop.
    #[error("interrupted")]
    Interrupted,
}

impl CloneError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CloneError::Config(_) => EXIT_CONFIG_ERROR,
            CloneError::Source(_) => EXIT_SOURCE_ERROR,
            CloneError::Io(_) => EXIT_IO_ERROR,
            CloneError::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

pub type Result<T> = std::result::Result<T, CloneError>;
