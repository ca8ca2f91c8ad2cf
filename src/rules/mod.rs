//! The rule-set contract the analyzer drives.
//!
//! Rule bodies (encounter tables, ability tables, ribbon eligibility and so
//! on) live behind [`RuleSet`]. The analyzer only knows that each category
//! yields one [`Verdict`] and each move battery yields four.

pub mod standard;

pub use standard::StandardRules;

use crate::errors::RuleResult;
use crate::verdict::Verdict;
use schema::{MoveId, PokemonRecord, MOVE_SLOTS};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The fixed set of rule categories, declared in report order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Category {
    Encounter,
    Level,
    Form,
    Ball,
    Ability,
    Ribbons,
    #[strum(to_string = "EC/PID")]
    EcPid,
    Nickname,
    #[strum(to_string = "IVs")]
    Ivs,
    #[strum(to_string = "EVs")]
    Evs,
    #[strum(to_string = "IDs")]
    Ids,
    History,
    #[strum(to_string = "OT Memory")]
    OtMemory,
    #[strum(to_string = "HT Memory")]
    HtMemory,
    Region,
    Misc,
}

/// How the encounter rule matched the record to a legitimate origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EncounterKind {
    Egg,
    Wild,
    Event,
}

/// The encounter rule's side channel: which origin it matched, if any.
/// Later categories (ability, ball, misc) consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterMatch {
    pub kind: EncounterKind,
    pub level: u8,
}

/// Result of the encounter rule: its verdict plus the matched origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterOutcome {
    pub verdict: Verdict,
    pub matched: Option<EncounterMatch>,
}

/// Result of relearn-move verification: one verdict per slot and the base
/// relearn set the rule considers known-correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelearnOutcome {
    pub verdicts: [Verdict; MOVE_SLOTS],
    pub base: [MoveId; MOVE_SLOTS],
}

/// What a category rule can see: the record and the encounter match, if the
/// encounter rule produced one.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub record: &'a PokemonRecord,
    pub encounter: Option<&'a EncounterMatch>,
}

/// What the current-move battery can see.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub record: &'a PokemonRecord,
    pub relearn_base: Option<&'a [MoveId; MOVE_SLOTS]>,
}

/// A complete battery of legality rules.
///
/// Every method returns a [`RuleResult`]; a fault is confined by the
/// analyzer to the smallest unit it affects.
pub trait RuleSet {
    /// Matches the record to an encounter. Always evaluated before any other
    /// category.
    fn encounter(&self, record: &PokemonRecord) -> RuleResult<EncounterOutcome>;

    /// Evaluates one non-encounter category.
    fn check(&self, category: Category, ctx: &RuleContext<'_>) -> RuleResult<Verdict>;

    /// Verifies all four current move slots.
    fn verify_moves(&self, ctx: &MoveContext<'_>) -> RuleResult<[Verdict; MOVE_SLOTS]>;

    /// Verifies all four relearn slots and derives the base relearn set.
    fn verify_relearn(&self, record: &PokemonRecord) -> RuleResult<RelearnOutcome>;
}
