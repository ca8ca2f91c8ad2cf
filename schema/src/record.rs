use crate::{Memory, OriginGame};
use serde::{Deserialize, Serialize};

/// Numeric move identifier as stored in a move slot.
pub type MoveId = u16;

/// Placeholder stored in an empty move slot.
pub const NO_MOVE: MoveId = 0;

/// Every record carries exactly this many move and relearn slots.
pub const MOVE_SLOTS: usize = 4;

/// A fully decoded Pokemon record.
///
/// Missing fields fall back to their defaults when deserialized, which keeps
/// hand-written RON fixtures short.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonRecord {
    pub species: u16,
    pub form: u8,
    pub nickname: String,
    pub is_nicknamed: bool,
    pub is_egg: bool,
    pub encryption_constant: u32,
    pub pid: u32,
    pub tid: u16,
    pub sid: u16,
    pub ot_name: String,
    pub ht_name: String,
    pub level: u8,
    pub met_level: u8,
    pub origin: OriginGame,
    pub ball: u8,
    pub ability_number: u8,
    pub ivs: [u8; 6], // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub evs: [u8; 6], // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub moves: [MoveId; MOVE_SLOTS],
    pub relearn_moves: [MoveId; MOVE_SLOTS],
    pub was_egg: bool,
    pub fateful_encounter: bool,
    pub ribbons: Vec<String>,
    pub ot_memory: Memory,
    pub ht_memory: Memory,
    pub country: u8,
    pub console_region: u8,
}

impl PokemonRecord {
    /// Generation of the record's origin game, if recognized.
    pub fn generation(&self) -> Option<u8> {
        self.origin.generation()
    }

    /// Sum of all effort values.
    pub fn ev_total(&self) -> u16 {
        self.evs.iter().map(|&ev| ev as u16).sum()
    }

    /// True when the record has been handled by a trainer other than its OT.
    pub fn has_handler(&self) -> bool {
        !self.ht_name.is_empty()
    }

    /// Number of non-empty current move slots.
    pub fn move_count(&self) -> usize {
        self.moves.iter().filter(|&&m| m != NO_MOVE).count()
    }
}
