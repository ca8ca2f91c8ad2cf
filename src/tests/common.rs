use crate::errors::{RuleFault, RuleResult};
use crate::rules::{
    Category, EncounterKind, EncounterMatch, EncounterOutcome, MoveContext, RelearnOutcome,
    RuleContext, RuleSet,
};
use crate::verdict::Verdict;
use schema::{Memory, MoveId, OriginGame, PokemonRecord, MOVE_SLOTS, NO_MOVE};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TACKLE: MoveId = 33;
pub const GROWL: MoveId = 45;
pub const PECK: MoveId = 64;
pub const QUICK_ATTACK: MoveId = 98;

/// A builder for test records. Starts from a clean wild Generation 6 record
/// that passes every standard rule.
///
/// # Example
/// ```ignore
/// let record = TestRecordBuilder::hatched()
///     .with_moves([TACKLE, GROWL, 0, 0])
///     .with_relearn([TACKLE, 0, 0, 0])
///     .build();
/// ```
pub struct TestRecordBuilder {
    record: PokemonRecord,
}

impl TestRecordBuilder {
    /// A wild Fletchling caught in X.
    pub fn new() -> Self {
        Self {
            record: PokemonRecord {
                species: 661,
                nickname: "Fletchling".to_string(),
                encryption_constant: 0x1234_5678,
                pid: 0x8765_4321,
                tid: 12345,
                sid: 54321,
                ot_name: "Serena".to_string(),
                level: 20,
                met_level: 12,
                origin: OriginGame::X,
                ball: 4,
                ability_number: 1,
                ivs: [10, 20, 30, 5, 15, 25],
                moves: [TACKLE, GROWL, PECK, NO_MOVE],
                country: 49,
                console_region: 1,
                ..Default::default()
            },
        }
    }

    /// A Fletchling hatched from an egg in Y.
    pub fn hatched() -> Self {
        Self::new()
            .with_origin(OriginGame::Y)
            .with_met_level(1)
            .with_level(5)
            .with_was_egg(true)
    }

    pub fn with_origin(mut self, origin: OriginGame) -> Self {
        self.record.origin = origin;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.record.level = level;
        self
    }

    pub fn with_met_level(mut self, met_level: u8) -> Self {
        self.record.met_level = met_level;
        self
    }

    pub fn with_was_egg(mut self, was_egg: bool) -> Self {
        self.record.was_egg = was_egg;
        self
    }

    pub fn with_moves(mut self, moves: [MoveId; MOVE_SLOTS]) -> Self {
        self.record.moves = moves;
        self
    }

    pub fn with_relearn(mut self, relearn: [MoveId; MOVE_SLOTS]) -> Self {
        self.record.relearn_moves = relearn;
        self
    }

    pub fn with_ivs(mut self, ivs: [u8; 6]) -> Self {
        self.record.ivs = ivs;
        self
    }

    pub fn with_evs(mut self, evs: [u8; 6]) -> Self {
        self.record.evs = evs;
        self
    }

    pub fn with_ball(mut self, ball: u8) -> Self {
        self.record.ball = ball;
        self
    }

    pub fn with_ability_number(mut self, ability_number: u8) -> Self {
        self.record.ability_number = ability_number;
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.record.nickname = nickname.to_string();
        self.record.is_nicknamed = true;
        self
    }

    pub fn with_ribbons(mut self, ribbons: &[&str]) -> Self {
        self.record.ribbons = ribbons.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_handler(mut self, name: &str, memory: Memory) -> Self {
        self.record.ht_name = name.to_string();
        self.record.ht_memory = memory;
        self
    }

    pub fn with_country(mut self, country: u8) -> Self {
        self.record.country = country;
        self
    }

    pub fn with_ids(mut self, tid: u16, sid: u16) -> Self {
        self.record.tid = tid;
        self.record.sid = sid;
        self
    }

    pub fn fateful(mut self) -> Self {
        self.record.fateful_encounter = true;
        self
    }

    pub fn build(self) -> PokemonRecord {
        self.record
    }
}

/// One observed call into a [`ScriptedRules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCall {
    Relearn,
    Moves,
    Encounter,
    /// The category checked and the encounter kind its context carried.
    Check(Category, Option<EncounterKind>),
}

/// A rule set whose answers are scripted by the test, recording every call.
/// Anything not scripted passes with the default comment.
pub struct ScriptedRules {
    checks: HashMap<Category, RuleResult<Verdict>>,
    encounter: RuleResult<EncounterOutcome>,
    moves: RuleResult<[Verdict; MOVE_SLOTS]>,
    relearn: RuleResult<RelearnOutcome>,
    calls: Mutex<Vec<RuleCall>>,
}

pub fn scripted_fault() -> RuleFault {
    RuleFault::Inconsistent("scripted fault".to_string())
}

pub fn valid_slots() -> [Verdict; MOVE_SLOTS] {
    std::array::from_fn(|_| Verdict::valid())
}

impl Default for ScriptedRules {
    fn default() -> Self {
        ScriptedRules {
            checks: HashMap::new(),
            encounter: Ok(EncounterOutcome {
                verdict: Verdict::valid(),
                matched: Some(EncounterMatch {
                    kind: EncounterKind::Wild,
                    level: 12,
                }),
            }),
            moves: Ok(valid_slots()),
            relearn: Ok(RelearnOutcome {
                verdicts: valid_slots(),
                base: [NO_MOVE; MOVE_SLOTS],
            }),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, category: Category, verdict: Verdict) -> Self {
        self.checks.insert(category, Ok(verdict));
        self
    }

    pub fn with_fault(mut self, category: Category) -> Self {
        self.checks.insert(category, Err(scripted_fault()));
        self
    }

    pub fn with_encounter(mut self, verdict: Verdict, matched: Option<EncounterMatch>) -> Self {
        self.encounter = Ok(EncounterOutcome { verdict, matched });
        self
    }

    pub fn with_encounter_fault(mut self) -> Self {
        self.encounter = Err(scripted_fault());
        self
    }

    pub fn with_moves(mut self, verdicts: [Verdict; MOVE_SLOTS]) -> Self {
        self.moves = Ok(verdicts);
        self
    }

    pub fn with_move_fault(mut self) -> Self {
        self.moves = Err(scripted_fault());
        self
    }

    pub fn with_relearn(
        mut self,
        verdicts: [Verdict; MOVE_SLOTS],
        base: [MoveId; MOVE_SLOTS],
    ) -> Self {
        self.relearn = Ok(RelearnOutcome { verdicts, base });
        self
    }

    pub fn with_relearn_fault(mut self) -> Self {
        self.relearn = Err(scripted_fault());
        self
    }

    pub fn calls(&self) -> Vec<RuleCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record_call(&self, call: RuleCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RuleSet for ScriptedRules {
    fn encounter(&self, _record: &PokemonRecord) -> RuleResult<EncounterOutcome> {
        self.record_call(RuleCall::Encounter);
        self.encounter.clone()
    }

    fn check(&self, category: Category, ctx: &RuleContext<'_>) -> RuleResult<Verdict> {
        self.record_call(RuleCall::Check(category, ctx.encounter.map(|m| m.kind)));
        self.checks
            .get(&category)
            .cloned()
            .unwrap_or_else(|| Ok(Verdict::valid()))
    }

    fn verify_moves(&self, _ctx: &MoveContext<'_>) -> RuleResult<[Verdict; MOVE_SLOTS]> {
        self.record_call(RuleCall::Moves);
        self.moves.clone()
    }

    fn verify_relearn(&self, _record: &PokemonRecord) -> RuleResult<RelearnOutcome> {
        self.record_call(RuleCall::Relearn);
        self.relearn.clone()
    }
}
