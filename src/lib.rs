// In: src/lib.rs

//! Pokemon Legality Analyzer
//!
//! Runs a fixed battery of legality rules against a decoded Pokemon record,
//! keeps one rule's failure from spoiling the rest of the analysis, and turns
//! the verdicts into terse and verbose reports plus a suggested relearn set.

// --- MODULE DECLARATIONS ---
pub mod analysis;
pub mod config;
pub mod errors;
pub mod records;
pub mod relearn;
pub mod report;
pub mod rules;
pub mod verdict;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Memory, MoveId, OriginGame, PokemonRecord, MOVE_SLOTS, NO_MOVE};

// --- From this crate's modules (`src/`) ---

// Analysis sessions and the analyzer that builds them.
pub use analysis::{Analyzer, CategoryVerdicts, Coverage, Legality, LegalityAnalysis};

// Rule contract and the bundled rule set.
pub use rules::{
    Category, EncounterKind, EncounterMatch, EncounterOutcome, MoveContext, RelearnOutcome,
    RuleContext, RuleSet, StandardRules,
};

pub use config::LegalityConfig;
pub use records::{load_record, load_records, parse_record};
pub use relearn::{suggest_relearn, RelearnWindow};
pub use report::{terse_report, verbose_report, AnalysisSummary};
pub use verdict::{Severity, Verdict};

// Crate-specific error and result types.
pub use errors::{LegalityError, LegalityResult, RuleFault, RuleResult};
