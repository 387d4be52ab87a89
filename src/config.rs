//! Pipeline configuration
//!
//! A flat, validated options struct covering `spec.md` §6. Grounded on
//! the validate-then-build idiom of the teacher's
//! `config/pipeline_config.rs`, deliberately not carrying over that
//! module's 3-tier preset/patch/YAML system — this spec's seven flat
//! options don't warrant it (see `DESIGN.md`'s "Dropped teacher
//! dependencies").

use crate::error::CloneError;
use crate::shared::ports::Language;

/// Recognized options and their defaults, per `spec.md` §6.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub min_line: usize,
    pub min_token: usize,
    pub n: usize,
    pub partition_count: usize,
    pub filtration_threshold: u8,
    pub verification_threshold: u8,
    pub threads: usize,
    pub language: Language,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_line: 6,
            min_token: 50,
            n: 5,
            partition_count: 10,
            filtration_threshold: 10,
            verification_threshold: 70,
            threads: num_cpus::get(),
            language: Language::Java,
        }
    }
}

/// Builder that validates before producing a `DetectorConfig`,
/// surfacing `CONFIG_ERROR` for anything `spec.md` §7 calls out
/// (negative `N`, unknown language, ...).
#[derive(Debug, Clone)]
pub struct DetectorConfigBuilder {
    config: DetectorConfig,
}

impl DetectorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    pub fn min_line(mut self, v: usize) -> Self {
        self.config.min_line = v;
        self
    }

    pub fn min_token(mut self, v: usize) -> Self {
        self.config.min_token = v;
        self
    }

    pub fn n(mut self, v: usize) -> Self {
        self.config.n = v;
        self
    }

    pub fn partition_count(mut self, v: usize) -> Self {
        self.config.partition_count = v;
        self
    }

    pub fn filtration_threshold(mut self, v: u8) -> Self {
        self.config.filtration_threshold = v;
        self
    }

    pub fn verification_threshold(mut self, v: u8) -> Self {
        self.config.verification_threshold = v;
        self
    }

    pub fn threads(mut self, v: usize) -> Self {
        self.config.threads = v;
        self
    }

    pub fn language(mut self, v: Language) -> Self {
        self.config.language = v;
        self
    }

    pub fn build(self) -> Result<DetectorConfig, CloneError> {
        let c = &self.config;

        if c.n == 0 {
            return Err(CloneError::Config("N must be >= 1".into()));
        }
        if c.partition_count == 0 {
            return Err(CloneError::Config("partitionCount must be >= 1".into()));
        }
        if c.threads == 0 {
            return Err(CloneError::Config("threads must be >= 1".into()));
        }
        if c.filtration_threshold > 100 {
            return Err(CloneError::Config(
                "filtrationThreshold must be 0..=100".into(),
            ));
        }
        if c.verification_threshold > 100 {
            return Err(CloneError::Config(
                "verificationThreshold must be 0..=100".into(),
            ));
        }

        Ok(self.config)
    }
}

impl Default for DetectorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DetectorConfigBuilder::new().build().is_ok());
    }

    #[test]
    fn test_zero_n_is_config_error() {
        let err = DetectorConfigBuilder::new().n(0).build().unwrap_err();
        assert!(matches!(err, CloneError::Config(_)));
    }

    #[test]
    fn test_zero_partition_count_is_config_error() {
        let err = DetectorConfigBuilder::new()
            .partition_count(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, CloneError::Config(_)));
    }

    #[test]
    fn test_threshold_over_100_is_config_error() {
        let err = DetectorConfigBuilder::new()
            .filtration_threshold(101)
            .build()
            .unwrap_err();
        assert!(matches!(err, CloneError::Config(_)));
    }

    #[test]
    fn test_degenerate_lower_bound_is_valid() {
        // spec.md §8 boundary case: minLine=1, minToken=1, N=1
        let config = DetectorConfigBuilder::new()
            .min_line(1)
            .min_token(1)
            .n(1)
            .build()
            .unwrap();
        assert_eq!(config.n, 1);
    }
}
