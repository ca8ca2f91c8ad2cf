use thiserror::Error;

/// An unexpected failure inside a single rule evaluation.
///
/// Faults never escape an analysis: the analyzer replaces the affected
/// verdict(s) with an internal-error verdict and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleFault {
    /// Data the rule depends on was not available
    #[error("missing data: {0}")]
    MissingData(String),
    /// A table lookup the rule relies on found no entry
    #[error("no {table} entry for {key}")]
    LookupFailed { table: &'static str, key: u32 },
    /// The rule reached a state it considers impossible
    #[error("inconsistent state: {0}")]
    Inconsistent(String),
}

/// Errors raised outside of analysis: loading configuration or records.
#[derive(Debug, Error)]
pub enum LegalityError {
    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(ron::error::SpannedError),
    /// Record text could not be parsed
    #[error("Record error: {0}")]
    Record(ron::error::SpannedError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for the outcome of a single rule evaluation
pub type RuleResult<T> = Result<T, RuleFault>;

/// Type alias for Results using LegalityError
pub type LegalityResult<T> = Result<T, LegalityError>;
