//! Record-local Generation 6 checks that need no external tables.
//!
//! Anything that requires encounter slots, learnsets or ribbon eligibility
//! belongs in a richer [`RuleSet`].

use super::{
    Category, EncounterKind, EncounterMatch, EncounterOutcome, MoveContext, RelearnOutcome,
    RuleContext, RuleSet,
};
use crate::errors::{RuleFault, RuleResult};
use crate::verdict::{Severity, Verdict};
use schema::{Memory, MoveId, PokemonRecord, MOVE_SLOTS, NO_MOVE};
use std::collections::HashSet;

// Stat limits
const MAX_IV: u8 = 31;
const MAX_EV: u8 = 252;
const MAX_EV_TOTAL: u16 = 510;
const MAX_LEVEL: u8 = 100;

// Identifier ranges for Generation 6
const MAX_MOVE_ID: MoveId = 621;
const MAX_BALL: u8 = 25;
const MAX_FORM: u8 = 31;
const MAX_CONSOLE_REGION: u8 = 6;
const MAX_MEMORY_INTENSITY: u8 = 7;
const MAX_NICKNAME_LENGTH: usize = 12;

const MASTER_BALL: u8 = 1;
const CHERISH_BALL: u8 = 16;
const HIDDEN_ABILITY: u8 = 4;
const HATCH_LEVEL: u8 = 1;

/// The bundled rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    fn encounter(&self, record: &PokemonRecord) -> RuleResult<EncounterOutcome> {
        Ok(match_encounter(record))
    }

    fn check(&self, category: Category, ctx: &RuleContext<'_>) -> RuleResult<Verdict> {
        let record = ctx.record;
        match category {
            Category::Encounter => Err(RuleFault::Inconsistent(
                "encounter is evaluated through RuleSet::encounter".to_string(),
            )),
            Category::EcPid => Ok(verify_ec_pid(record)),
            Category::Nickname => Ok(verify_nickname(record)),
            Category::Ids => Ok(verify_ids(record)),
            Category::Ivs => Ok(verify_ivs(record)),
            Category::Evs => Ok(verify_evs(record)),
            Category::Level => Ok(verify_level(record)),
            Category::Ribbons => Ok(verify_ribbons(record)),
            Category::Ability => Ok(verify_ability(record, ctx.encounter)),
            Category::Ball => Ok(verify_ball(record, ctx.encounter)),
            Category::History => Ok(verify_history(record)),
            Category::OtMemory => Ok(verify_memory(&record.ot_memory, "OT")),
            Category::HtMemory => Ok(verify_memory(&record.ht_memory, "HT")),
            Category::Region => Ok(verify_region(record)),
            Category::Form => Ok(verify_form(record)),
            Category::Misc => verify_misc(record, ctx.encounter),
        }
    }

    fn verify_moves(&self, ctx: &MoveContext<'_>) -> RuleResult<[Verdict; MOVE_SLOTS]> {
        let moves = &ctx.record.moves;
        Ok(std::array::from_fn(|slot| {
            verify_move_slot(moves, slot, ctx.relearn_base)
        }))
    }

    fn verify_relearn(&self, record: &PokemonRecord) -> RuleResult<RelearnOutcome> {
        let relearn = &record.relearn_moves;

        // Only hatched Pokemon and event gifts arrive with relearn moves.
        if !record.was_egg && !record.fateful_encounter {
            let verdicts = std::array::from_fn(|slot| {
                if relearn[slot] == NO_MOVE {
                    Verdict::valid()
                } else {
                    Verdict::invalid("Relearn moves unavailable for this encounter.")
                }
            });
            return Ok(RelearnOutcome {
                verdicts,
                base: [NO_MOVE; MOVE_SLOTS],
            });
        }

        let verdicts: [Verdict; MOVE_SLOTS] =
            std::array::from_fn(|slot| verify_move_id(relearn, slot));

        let mut base = *relearn;
        for (id, verdict) in base.iter_mut().zip(verdicts.iter()) {
            if !verdict.is_valid() {
                *id = NO_MOVE;
            }
        }

        Ok(RelearnOutcome { verdicts, base })
    }
}

fn match_encounter(record: &PokemonRecord) -> EncounterOutcome {
    if record.was_egg {
        let verdict = if record.met_level == HATCH_LEVEL {
            Verdict::new(Severity::Valid, "Hatched egg.")
        } else {
            Verdict::invalid("Hatched Pokémon must be met at level 1.")
        };
        return EncounterOutcome {
            verdict,
            matched: Some(EncounterMatch {
                kind: EncounterKind::Egg,
                level: HATCH_LEVEL,
            }),
        };
    }

    if !(1..=MAX_LEVEL).contains(&record.met_level) {
        return EncounterOutcome {
            verdict: Verdict::invalid("Met level is out of range."),
            matched: None,
        };
    }

    let (kind, comment) = if record.fateful_encounter {
        (EncounterKind::Event, "Event gift.")
    } else {
        (EncounterKind::Wild, "Wild encounter.")
    };

    EncounterOutcome {
        verdict: Verdict::new(Severity::Valid, comment),
        matched: Some(EncounterMatch {
            kind,
            level: record.met_level,
        }),
    }
}

fn verify_ec_pid(record: &PokemonRecord) -> Verdict {
    if record.encryption_constant == 0 {
        Verdict::fishy("Encryption Constant is not set.")
    } else if record.encryption_constant == record.pid {
        Verdict::fishy("Encryption Constant matches PID.")
    } else {
        Verdict::valid()
    }
}

fn verify_nickname(record: &PokemonRecord) -> Verdict {
    if record.nickname.is_empty() {
        Verdict::invalid("Nickname is empty.")
    } else if record.nickname.chars().count() > MAX_NICKNAME_LENGTH {
        Verdict::invalid("Nickname is too long.")
    } else if record.is_egg && record.is_nicknamed {
        Verdict::invalid("Eggs cannot be nicknamed.")
    } else {
        Verdict::valid()
    }
}

fn verify_ids(record: &PokemonRecord) -> Verdict {
    if record.tid == 0 && record.sid == 0 {
        Verdict::fishy("TID and SID are both zero.")
    } else {
        Verdict::valid()
    }
}

fn verify_ivs(record: &PokemonRecord) -> Verdict {
    if record.ivs.iter().any(|&iv| iv > MAX_IV) {
        Verdict::invalid("IVs exceed 31.")
    } else if record.ivs.iter().all(|&iv| iv == 0) {
        Verdict::fishy("All IVs are zero.")
    } else {
        Verdict::valid()
    }
}

fn verify_evs(record: &PokemonRecord) -> Verdict {
    if record.evs.iter().any(|&ev| ev > MAX_EV) {
        Verdict::invalid("EVs exceed 252.")
    } else if record.ev_total() > MAX_EV_TOTAL {
        Verdict::invalid("EV total exceeds 510.")
    } else if record.is_egg && record.ev_total() > 0 {
        Verdict::invalid("Eggs cannot have EVs.")
    } else {
        Verdict::valid()
    }
}

fn verify_level(record: &PokemonRecord) -> Verdict {
    if !(1..=MAX_LEVEL).contains(&record.level) {
        Verdict::invalid("Level is out of range.")
    } else if record.level < record.met_level {
        Verdict::invalid("Current level is below met level.")
    } else {
        Verdict::valid()
    }
}

fn verify_ribbons(record: &PokemonRecord) -> Verdict {
    if record.ribbons.is_empty() {
        return Verdict::valid();
    }
    if record.is_egg {
        return Verdict::invalid("Eggs cannot have ribbons.");
    }

    let mut seen = HashSet::new();
    for ribbon in &record.ribbons {
        if !seen.insert(ribbon.as_str()) {
            return Verdict::invalid(format!("Duplicate ribbon: {}.", ribbon));
        }
    }
    Verdict::new(Severity::Valid, "All ribbons accounted for.")
}

fn verify_ability(record: &PokemonRecord, encounter: Option<&EncounterMatch>) -> Verdict {
    if !matches!(record.ability_number, 1 | 2 | HIDDEN_ABILITY) {
        return Verdict::invalid("Ability number is invalid.");
    }
    let wild = matches!(encounter, Some(m) if m.kind == EncounterKind::Wild);
    if record.ability_number == HIDDEN_ABILITY && wild {
        Verdict::fishy("Hidden Ability on a wild encounter.")
    } else {
        Verdict::valid()
    }
}

fn verify_ball(record: &PokemonRecord, encounter: Option<&EncounterMatch>) -> Verdict {
    if record.ball == 0 || record.ball > MAX_BALL {
        return Verdict::invalid("Ball is invalid.");
    }
    let hatched = matches!(encounter, Some(m) if m.kind == EncounterKind::Egg);
    if hatched && matches!(record.ball, MASTER_BALL | CHERISH_BALL) {
        Verdict::invalid("Ball unobtainable for hatched Pokémon.")
    } else {
        Verdict::valid()
    }
}

fn verify_history(record: &PokemonRecord) -> Verdict {
    if !record.has_handler() && !record.ht_memory.is_empty() {
        Verdict::invalid("Handler memory present without a handling trainer.")
    } else if record.is_egg && record.has_handler() {
        Verdict::invalid("Eggs cannot have a handling trainer.")
    } else {
        Verdict::valid()
    }
}

fn verify_memory(memory: &Memory, trainer: &str) -> Verdict {
    if memory.kind == 0 && (memory.intensity != 0 || memory.feeling != 0) {
        Verdict::invalid(format!("{} memory is incomplete.", trainer))
    } else if memory.intensity > MAX_MEMORY_INTENSITY {
        Verdict::invalid(format!("{} memory intensity is out of range.", trainer))
    } else {
        Verdict::valid()
    }
}

fn verify_region(record: &PokemonRecord) -> Verdict {
    if record.console_region > MAX_CONSOLE_REGION {
        Verdict::invalid("Console region is invalid.")
    } else if record.country == 0 {
        Verdict::fishy("Country is not set.")
    } else {
        Verdict::valid()
    }
}

fn verify_form(record: &PokemonRecord) -> Verdict {
    if record.form > MAX_FORM {
        Verdict::invalid("Form is out of range.")
    } else {
        Verdict::valid()
    }
}

fn verify_misc(
    record: &PokemonRecord,
    encounter: Option<&EncounterMatch>,
) -> RuleResult<Verdict> {
    if record.is_egg && record.level != HATCH_LEVEL {
        return Ok(Verdict::invalid("Eggs must be level 1."));
    }
    if record.fateful_encounter {
        let matched = encounter.ok_or_else(|| {
            RuleFault::MissingData("fateful encounter requires an encounter match".to_string())
        })?;
        if matched.kind != EncounterKind::Event {
            return Ok(Verdict::invalid(
                "Fateful encounter flag set without a matching event.",
            ));
        }
    }
    Ok(Verdict::valid())
}

/// Slot checks shared by both batteries: range and duplicates.
fn verify_move_id(moves: &[MoveId; MOVE_SLOTS], slot: usize) -> Verdict {
    let id = moves[slot];
    if id == NO_MOVE {
        Verdict::valid()
    } else if id > MAX_MOVE_ID {
        Verdict::invalid("Invalid Move.")
    } else if moves[..slot].contains(&id) {
        Verdict::invalid("Duplicate Move.")
    } else {
        Verdict::valid()
    }
}

fn verify_move_slot(
    moves: &[MoveId; MOVE_SLOTS],
    slot: usize,
    relearn_base: Option<&[MoveId; MOVE_SLOTS]>,
) -> Verdict {
    let id = moves[slot];
    if slot == 0 && id == NO_MOVE {
        return Verdict::invalid("Must know at least one move.");
    }

    let verdict = verify_move_id(moves, slot);
    let relearnable = id != NO_MOVE && relearn_base.is_some_and(|base| base.contains(&id));
    if verdict.is_valid() && relearnable {
        Verdict::new(Severity::Valid, "Relearn Move.")
    } else {
        verdict
    }
}
