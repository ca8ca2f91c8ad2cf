//! Best-guess reconstruction of a record's relearn moves.

use crate::analysis::LegalityAnalysis;
use schema::{MoveId, MOVE_SLOTS, NO_MOVE};
use std::collections::VecDeque;

/// A fixed-capacity window of move ids. Pushing into a full window evicts
/// the oldest entry, so the window always holds the most recent evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelearnWindow {
    moves: VecDeque<MoveId>,
}

impl RelearnWindow {
    pub const CAPACITY: usize = MOVE_SLOTS;

    pub fn new() -> Self {
        RelearnWindow {
            moves: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    pub fn push(&mut self, move_id: MoveId) {
        if self.moves.len() == Self::CAPACITY {
            self.moves.pop_front();
        }
        self.moves.push_back(move_id);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The window contents, oldest first, padded at the end with empty moves.
    pub fn into_slots(self) -> [MoveId; MOVE_SLOTS] {
        let mut slots = [NO_MOVE; MOVE_SLOTS];
        for (slot, move_id) in slots.iter_mut().zip(self.moves) {
            *slot = move_id;
        }
        slots
    }
}

impl Extend<MoveId> for RelearnWindow {
    fn extend<I: IntoIterator<Item = MoveId>>(&mut self, iter: I) {
        for move_id in iter {
            self.push(move_id);
        }
    }
}

/// Suggests the relearn moves the record most plausibly had.
///
/// Hatched records start from the known base relearn set; every current move
/// that failed verification or was flagged as suspect is then pushed in slot
/// order, evicting base entries first once the window is full.
pub fn suggest_relearn(analysis: &LegalityAnalysis) -> [MoveId; MOVE_SLOTS] {
    let base = match analysis.relearn_base() {
        Some(base) if base.iter().any(|&m| m != NO_MOVE) => base,
        _ => return [NO_MOVE; MOVE_SLOTS],
    };

    if !analysis.was_egg() {
        return *base;
    }

    let mut window = RelearnWindow::new();
    window.extend(base.iter().copied());
    window.extend(
        analysis
            .moves()
            .iter()
            .zip(analysis.current_moves())
            .filter(|(verdict, _)| !verdict.is_valid() || verdict.flag())
            .map(|(_, &move_id)| move_id),
    );
    window.into_slots()
}
