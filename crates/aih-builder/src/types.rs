//! Builder-specific types: errors, configuration and batch statistics.

use aih_types::{CheckDigitRule, ComponentError};
use thiserror::Error;

/// Errors that can occur while building or verifying AIH numbers.
#[derive(Error, Debug)]
pub enum AihError {
    /// An input does not fit the fixed-width layout.
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Why the value was rejected.
        reason: String,
    },

    /// Kind digit outside the documented kinds while kinds are restricted.
    #[error("Unsupported kind digit: {digit} (expected 1, 3 or 5)")]
    UnsupportedKind {
        /// The rejected digit.
        digit: i64,
    },

    /// Candidate AIH number has the wrong length.
    #[error("Invalid AIH length: expected {expected} characters, found {found}")]
    InvalidLength {
        /// Expected character count.
        expected: usize,
        /// Found character count.
        found: usize,
    },

    /// Candidate AIH number contains a non-digit character.
    #[error("Non-digit character '{found}' at position {position}")]
    NonDigit {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Candidate AIH number is not framed as an initial or final number.
    #[error("Unknown AIH framing: {value} (expected 0000/000 or 9999/999)")]
    UnknownFraming {
        /// The candidate value.
        value: String,
    },

    /// Embedded check digit does not match the recomputed one.
    #[error("Check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Recomputed check digit.
        expected: u8,
        /// Check digit found in the candidate.
        found: u8,
    },

    /// Unrecognized variant name.
    #[error("Invalid variant: {value} (expected initial or final)")]
    InvalidVariant {
        /// The unrecognized value.
        value: String,
    },

    /// I/O error reading batch input.
    #[error("IO error reading batch input: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// Generic parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AihError {
    /// Returns true for errors caused by the caller's inputs rather than I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnsupportedKind { .. } | Self::InvalidVariant { .. }
        )
    }
}

impl From<ComponentError> for AihError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::OutOfRange {
                component,
                value,
                max,
            } => Self::InvalidInput {
                field: component,
                value,
                reason: format!("expected 0..={}", max),
            },
        }
    }
}

/// Result type for AIH operations.
pub type AihResult<T> = Result<T, AihError>;

/// How strictly inputs are checked against the fixed-width layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Out-of-range inputs fail with [`AihError::InvalidInput`].
    #[default]
    Strict,
    /// Inputs are padded to at least their field width and inserted verbatim,
    /// so oversized values yield a longer, malformed number.
    Lenient,
}

impl Validation {
    /// Parses `strict` or `lenient`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}

/// Configuration for building AIH numbers.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Range checking applied to inputs.
    pub validation: Validation,
    /// Rule used to derive the check digit.
    pub check_digit_rule: CheckDigitRule,
    /// Only accept the documented kind digits (1, 3, 5).
    pub restrict_kinds: bool,
}

impl BuildConfig {
    /// Strict range checks, default check digit rule, any kind digit.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Reference behavior: no range checks beyond rejecting negatives.
    pub fn lenient() -> Self {
        Self {
            validation: Validation::Lenient,
            ..Self::default()
        }
    }

    /// Strict range checks and only the documented kind digits.
    pub fn restricted() -> Self {
        Self {
            restrict_kinds: true,
            ..Self::default()
        }
    }

    /// Returns this config with a different check digit rule.
    pub fn with_check_digit_rule(mut self, rule: CheckDigitRule) -> Self {
        self.check_digit_rule = rule;
        self
    }
}

/// Statistics from building a batch of AIH numbers.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Total requests processed.
    pub total_requests: usize,
    /// Requests that produced a number.
    pub built: usize,
    /// Requests rejected.
    pub failed: usize,
    /// Time taken to build in milliseconds.
    pub build_time_ms: u64,
}

impl BatchStats {
    /// Returns the percentage of requests that produced a number.
    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            (self.built as f64 / self.total_requests as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_default() {
        let config = BuildConfig::default();
        assert_eq!(config.validation, Validation::Strict);
        assert_eq!(config.check_digit_rule, CheckDigitRule::Body);
        assert!(!config.restrict_kinds);
    }

    #[test]
    fn test_build_config_presets() {
        assert_eq!(BuildConfig::lenient().validation, Validation::Lenient);
        assert!(BuildConfig::restricted().restrict_kinds);
        let legacy = BuildConfig::strict().with_check_digit_rule(CheckDigitRule::TruncatedBody);
        assert_eq!(legacy.check_digit_rule, CheckDigitRule::TruncatedBody);
    }

    #[test]
    fn test_validation_parse() {
        assert_eq!(Validation::parse("STRICT"), Some(Validation::Strict));
        assert_eq!(Validation::parse("lenient"), Some(Validation::Lenient));
        assert_eq!(Validation::parse("loose"), None);
    }

    #[test]
    fn test_component_error_conversion() {
        let err: AihError = aih_types::RegionCode::new(120).unwrap_err().into();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid region code: 120 (expected 0..=99)");
    }

    #[test]
    fn test_batch_stats_success_rate() {
        let stats = BatchStats {
            total_requests: 8,
            built: 6,
            failed: 2,
            ..Default::default()
        };
        assert!((stats.success_rate() - 75.0).abs() < 0.01);
        assert_eq!(BatchStats::default().success_rate(), 0.0);
    }
}
