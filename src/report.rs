//! Human-readable legality reports.
//!
//! Both reports are pure functions of a [`LegalityAnalysis`]: calling them
//! repeatedly on the same session yields byte-identical text.

use crate::analysis::{Coverage, Legality, LegalityAnalysis};
use crate::errors::LegalityResult;
use crate::verdict::Verdict;
use schema::{MoveId, MOVE_SLOTS};
use serde::Serialize;

/// The entire terse report for a record with nothing to flag.
pub const LEGAL: &str = "Legal!";

/// Separates the failures from the passing details in a verbose report.
pub const SECTION_SEPARATOR: &str = "===";

/// Failing move slots, then failing categories in category order.
pub fn terse_report(analysis: &LegalityAnalysis) -> String {
    let checks = match analysis.coverage() {
        Coverage::Analyzed(checks) => checks,
        Coverage::UnsupportedOrigin { message } => return message.clone(),
    };

    let mut report = String::new();
    push_move_lines(&mut report, analysis, |verdict| !verdict.is_valid());

    if report.is_empty() && checks.all_valid() {
        return LEGAL.to_string();
    }

    for (_, verdict) in checks.iter().filter(|(_, verdict)| !verdict.is_valid()) {
        report.push_str(&format!("{}\n", verdict));
    }

    report.trim_end().to_string()
}

/// The terse report followed by every passing move slot and every
/// noteworthy passing category, worst severity first.
pub fn verbose_report(analysis: &LegalityAnalysis) -> String {
    let checks = match analysis.coverage() {
        Coverage::Analyzed(checks) => checks,
        Coverage::UnsupportedOrigin { message } => return message.clone(),
    };

    let mut report = terse_report(analysis);
    report.push('\n');
    report.push_str(SECTION_SEPARATOR);
    report.push_str("\n\n");

    let section_start = report.len();
    push_move_lines(&mut report, analysis, Verdict::is_valid);
    if report.len() != section_start {
        report.push('\n');
    }

    let mut noteworthy: Vec<&Verdict> = checks
        .iter()
        .map(|(_, verdict)| verdict)
        .filter(|verdict| verdict.is_noteworthy())
        .collect();
    // Stable: equal severities keep category order.
    noteworthy.sort_by_key(|verdict| verdict.severity());

    for verdict in noteworthy {
        report.push_str(&format!("{}\n", verdict));
    }

    report.trim_end().to_string()
}

fn push_move_lines(
    report: &mut String,
    analysis: &LegalityAnalysis,
    include: impl Fn(&Verdict) -> bool,
) {
    for (label, verdicts) in [("Move", analysis.moves()), ("Relearn Move", analysis.relearn())] {
        for (slot, verdict) in verdicts.iter().enumerate() {
            if include(verdict) {
                report.push_str(&format!(
                    "{} {} {}: {}\n",
                    verdict.severity(),
                    label,
                    slot + 1,
                    verdict.comment()
                ));
            }
        }
    }
}

/// A serializable snapshot of an analysis for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub legality: Legality,
    pub report: String,
    pub verbose_report: String,
    pub suggested_relearn: [MoveId; MOVE_SLOTS],
    pub secondary_checked: bool,
}

impl AnalysisSummary {
    pub fn from_analysis(analysis: &LegalityAnalysis) -> Self {
        AnalysisSummary {
            legality: analysis.legality(),
            report: terse_report(analysis),
            verbose_report: verbose_report(analysis),
            suggested_relearn: analysis.suggest_relearn(),
            secondary_checked: analysis.secondary_checked(),
        }
    }

    pub fn to_json(&self) -> LegalityResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
