//! C9: pipeline driver and pair-file sink

pub mod driver;
pub mod sink;

pub use driver::{run_pipeline, PipelineStats};
