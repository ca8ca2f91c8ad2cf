//! Legality analysis sessions and the analyzer that produces them.
//!
//! An [`Analyzer`] owns a [`RuleSet`] and runs it against one record at a
//! time. Each run yields a [`LegalityAnalysis`]: an immutable snapshot of
//! every verdict, computed eagerly. Re-running a move battery consumes the
//! session and hands back an updated one.

use crate::config::LegalityConfig;
use crate::relearn;
use crate::report::{self, AnalysisSummary};
use crate::rules::{Category, EncounterMatch, MoveContext, RuleContext, RuleSet};
use crate::verdict::{internal_error_slots, Severity, Verdict};
use schema::{MoveId, OriginGame, PokemonRecord, MOVE_SLOTS};
use serde::Serialize;
use strum::{Display, IntoEnumIterator};
use tracing::{debug, info, warn};

/// Overall outcome of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Legality {
    Legal,
    Illegal,
    /// The record's origin is outside the analyzer's scope; nothing was checked.
    NotApplicable,
}

/// One verdict per rule category, as fixed named fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryVerdicts {
    pub encounter: Verdict,
    pub level: Verdict,
    pub form: Verdict,
    pub ball: Verdict,
    pub ability: Verdict,
    pub ribbons: Verdict,
    pub ec_pid: Verdict,
    pub nickname: Verdict,
    pub ivs: Verdict,
    pub evs: Verdict,
    pub ids: Verdict,
    pub history: Verdict,
    pub ot_memory: Verdict,
    pub ht_memory: Verdict,
    pub region: Verdict,
    pub misc: Verdict,
}

impl CategoryVerdicts {
    pub fn get(&self, category: Category) -> &Verdict {
        match category {
            Category::Encounter => &self.encounter,
            Category::Level => &self.level,
            Category::Form => &self.form,
            Category::Ball => &self.ball,
            Category::Ability => &self.ability,
            Category::Ribbons => &self.ribbons,
            Category::EcPid => &self.ec_pid,
            Category::Nickname => &self.nickname,
            Category::Ivs => &self.ivs,
            Category::Evs => &self.evs,
            Category::Ids => &self.ids,
            Category::History => &self.history,
            Category::OtMemory => &self.ot_memory,
            Category::HtMemory => &self.ht_memory,
            Category::Region => &self.region,
            Category::Misc => &self.misc,
        }
    }

    /// All verdicts in category report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Verdict)> + '_ {
        Category::iter().map(move |category| (category, self.get(category)))
    }

    pub fn all_valid(&self) -> bool {
        self.iter().all(|(_, verdict)| verdict.is_valid())
    }
}

/// Whether the record was in scope for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    Analyzed(CategoryVerdicts),
    UnsupportedOrigin { message: String },
}

/// The verdicts for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalityAnalysis {
    origin: OriginGame,
    coverage: Coverage,
    encounter: Option<EncounterMatch>,
    moves: [Verdict; MOVE_SLOTS],
    relearn: [Verdict; MOVE_SLOTS],
    relearn_base: Option<[MoveId; MOVE_SLOTS]>,
    secondary_checked: bool,
    // Snapshot of the record fields the relearn suggester reads.
    current_moves: [MoveId; MOVE_SLOTS],
    was_egg: bool,
}

impl LegalityAnalysis {
    fn unsupported(record: &PokemonRecord, message: &str) -> Self {
        let not_analyzed = || Verdict::new(Severity::Indeterminate, message);
        LegalityAnalysis {
            origin: record.origin,
            coverage: Coverage::UnsupportedOrigin {
                message: message.to_string(),
            },
            encounter: None,
            moves: std::array::from_fn(|_| not_analyzed()),
            relearn: std::array::from_fn(|_| not_analyzed()),
            relearn_base: None,
            secondary_checked: false,
            current_moves: record.moves,
            was_egg: record.was_egg,
        }
    }

    pub fn origin(&self) -> OriginGame {
        self.origin
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    /// Category verdicts, or `None` when the origin was unsupported.
    pub fn checks(&self) -> Option<&CategoryVerdicts> {
        match &self.coverage {
            Coverage::Analyzed(checks) => Some(checks),
            Coverage::UnsupportedOrigin { .. } => None,
        }
    }

    pub fn encounter(&self) -> Option<&EncounterMatch> {
        self.encounter.as_ref()
    }

    pub fn moves(&self) -> &[Verdict; MOVE_SLOTS] {
        &self.moves
    }

    pub fn relearn(&self) -> &[Verdict; MOVE_SLOTS] {
        &self.relearn
    }

    /// Base relearn set derived by the relearn battery; `None` if it faulted.
    pub fn relearn_base(&self) -> Option<&[MoveId; MOVE_SLOTS]> {
        self.relearn_base.as_ref()
    }

    /// False once a move battery has been refreshed without a full re-run.
    pub fn secondary_checked(&self) -> bool {
        self.secondary_checked
    }

    pub fn current_moves(&self) -> &[MoveId; MOVE_SLOTS] {
        &self.current_moves
    }

    pub fn was_egg(&self) -> bool {
        self.was_egg
    }

    /// Derived from the verdicts every time; never cached.
    pub fn legality(&self) -> Legality {
        let Some(checks) = self.checks() else {
            return Legality::NotApplicable;
        };
        let moves_valid = self
            .moves
            .iter()
            .chain(self.relearn.iter())
            .all(Verdict::is_valid);

        if moves_valid && checks.all_valid() {
            Legality::Legal
        } else {
            Legality::Illegal
        }
    }

    pub fn is_valid(&self) -> bool {
        self.legality() == Legality::Legal
    }

    pub fn terse_report(&self) -> String {
        report::terse_report(self)
    }

    pub fn verbose_report(&self) -> String {
        report::verbose_report(self)
    }

    pub fn suggest_relearn(&self) -> [MoveId; MOVE_SLOTS] {
        relearn::suggest_relearn(self)
    }

    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary::from_analysis(self)
    }
}

/// Runs a rule set against records.
#[derive(Debug, Clone, Default)]
pub struct Analyzer<R> {
    rules: R,
    config: LegalityConfig,
}

impl<R: RuleSet> Analyzer<R> {
    pub fn new(rules: R) -> Self {
        Self::with_config(rules, LegalityConfig::default())
    }

    pub fn with_config(rules: R, config: LegalityConfig) -> Self {
        Analyzer { rules, config }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &LegalityConfig {
        &self.config
    }

    /// Runs every battery against `record` and returns the finished session.
    ///
    /// Order: relearn battery, current-move battery, then the category rules.
    /// Any rule fault is confined to the verdict(s) it produced.
    pub fn analyze(&self, record: &PokemonRecord) -> LegalityAnalysis {
        if !self.config.supports(record.origin) {
            debug!(origin = %record.origin, "origin outside supported generation; skipping rules");
            return LegalityAnalysis::unsupported(record, &self.config.unsupported_message);
        }

        let (relearn, relearn_base) = self.run_relearn(record);
        let moves = self.run_moves(record, relearn_base.as_ref());
        let (checks, encounter) = self.run_checks(record);

        let analysis = LegalityAnalysis {
            origin: record.origin,
            coverage: Coverage::Analyzed(checks),
            encounter,
            moves,
            relearn,
            relearn_base,
            secondary_checked: true,
            current_moves: record.moves,
            was_egg: record.was_egg,
        };
        info!(species = record.species, legality = %analysis.legality(), "analysis complete");
        analysis
    }

    /// Re-verifies only the current moves, e.g. after the caller edited them.
    /// Encounter and category verdicts are kept as they were.
    pub fn refresh_moves(
        &self,
        analysis: LegalityAnalysis,
        record: &PokemonRecord,
    ) -> LegalityAnalysis {
        if analysis.checks().is_none() {
            return analysis;
        }
        let moves = self.run_moves(record, analysis.relearn_base.as_ref());
        LegalityAnalysis {
            moves,
            current_moves: record.moves,
            secondary_checked: false,
            ..analysis
        }
    }

    /// Re-verifies only the relearn moves.
    pub fn refresh_relearn(
        &self,
        analysis: LegalityAnalysis,
        record: &PokemonRecord,
    ) -> LegalityAnalysis {
        if analysis.checks().is_none() {
            return analysis;
        }
        let (relearn, relearn_base) = self.run_relearn(record);
        LegalityAnalysis {
            relearn,
            relearn_base,
            secondary_checked: false,
            ..analysis
        }
    }

    fn run_relearn(
        &self,
        record: &PokemonRecord,
    ) -> ([Verdict; MOVE_SLOTS], Option<[MoveId; MOVE_SLOTS]>) {
        debug!("verifying relearn moves");
        match self.rules.verify_relearn(record) {
            Ok(outcome) => (outcome.verdicts, Some(outcome.base)),
            Err(fault) => {
                warn!(%fault, "relearn verification faulted");
                (internal_error_slots(), None)
            }
        }
    }

    fn run_moves(
        &self,
        record: &PokemonRecord,
        relearn_base: Option<&[MoveId; MOVE_SLOTS]>,
    ) -> [Verdict; MOVE_SLOTS] {
        debug!("verifying current moves");
        let ctx = MoveContext {
            record,
            relearn_base,
        };
        self.rules.verify_moves(&ctx).unwrap_or_else(|fault| {
            warn!(%fault, "move verification faulted");
            internal_error_slots()
        })
    }

    fn run_checks(&self, record: &PokemonRecord) -> (CategoryVerdicts, Option<EncounterMatch>) {
        debug!(category = %Category::Encounter, "evaluating rule");
        let (encounter_verdict, matched) = match self.rules.encounter(record) {
            Ok(outcome) => (outcome.verdict, outcome.matched),
            Err(fault) => {
                warn!(category = %Category::Encounter, %fault, "rule faulted");
                (Verdict::internal_error(), None)
            }
        };

        let ctx = RuleContext {
            record,
            encounter: matched.as_ref(),
        };
        let ec_pid = self.evaluate(Category::EcPid, &ctx);
        let nickname = self.evaluate(Category::Nickname, &ctx);
        let ids = self.evaluate(Category::Ids, &ctx);
        let ivs = self.evaluate(Category::Ivs, &ctx);
        let evs = self.evaluate(Category::Evs, &ctx);
        let level = self.evaluate(Category::Level, &ctx);
        let ribbons = self.evaluate(Category::Ribbons, &ctx);
        let ability = self.evaluate(Category::Ability, &ctx);
        let ball = self.evaluate(Category::Ball, &ctx);
        let history = self.evaluate(Category::History, &ctx);
        let ot_memory = self.evaluate(Category::OtMemory, &ctx);
        let ht_memory = self.evaluate(Category::HtMemory, &ctx);
        let region = self.evaluate(Category::Region, &ctx);
        let form = self.evaluate(Category::Form, &ctx);
        let misc = self.evaluate(Category::Misc, &ctx);

        let checks = CategoryVerdicts {
            encounter: encounter_verdict,
            level,
            form,
            ball,
            ability,
            ribbons,
            ec_pid,
            nickname,
            ivs,
            evs,
            ids,
            history,
            ot_memory,
            ht_memory,
            region,
            misc,
        };
        (checks, matched)
    }

    fn evaluate(&self, category: Category, ctx: &RuleContext<'_>) -> Verdict {
        debug!(%category, "evaluating rule");
        self.rules.check(category, ctx).unwrap_or_else(|fault| {
            warn!(%category, %fault, "rule faulted");
            Verdict::internal_error()
        })
    }
}
