use schema::MOVE_SLOTS;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Comment carried by a plain passing verdict. Verbose reports skip it.
pub const DEFAULT_COMMENT: &str = "Valid";

/// Comment carried by the verdict substituted for a faulted rule.
pub const INTERNAL_ERROR: &str = "Internal error.";

/// How bad a verdict is. Variants are declared worst-first, so sorting by
/// severity surfaces the most suspicious verdicts at the top.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Severity {
    Indeterminate,
    Invalid,
    Fishy,
    Valid,
    NotImplemented,
}

impl Severity {
    /// Fishy and better are passing; Fishy is merely noteworthy.
    pub fn is_passing(self) -> bool {
        self >= Severity::Fishy
    }
}

/// The outcome of one rule for one category or move slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    severity: Severity,
    comment: String,
    flag: bool,
}

impl Verdict {
    pub fn new(severity: Severity, comment: impl Into<String>) -> Self {
        Verdict {
            severity,
            comment: comment.into(),
            flag: false,
        }
    }

    /// A plain passing verdict with the default comment.
    pub fn valid() -> Self {
        Verdict::new(Severity::Valid, DEFAULT_COMMENT)
    }

    pub fn invalid(comment: impl Into<String>) -> Self {
        Verdict::new(Severity::Invalid, comment)
    }

    pub fn fishy(comment: impl Into<String>) -> Self {
        Verdict::new(Severity::Fishy, comment)
    }

    /// Sentinel used in place of a rule that faulted.
    pub fn internal_error() -> Self {
        Verdict::invalid(INTERNAL_ERROR)
    }

    /// Marks a move slot as suspect even though it may pass. The relearn
    /// suggester treats flagged slots as evidence of a historical move.
    pub fn flagged(mut self) -> Self {
        self.flag = true;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn flag(&self) -> bool {
        self.flag
    }

    pub fn is_valid(&self) -> bool {
        self.severity.is_passing()
    }

    /// A passing verdict that still says something beyond the default comment.
    pub fn is_noteworthy(&self) -> bool {
        self.is_valid() && self.comment != DEFAULT_COMMENT
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Verdict::valid()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.comment)
    }
}

/// Four internal-error verdicts, used when a whole move battery faults.
pub fn internal_error_slots() -> [Verdict; MOVE_SLOTS] {
    std::array::from_fn(|_| Verdict::internal_error())
}
