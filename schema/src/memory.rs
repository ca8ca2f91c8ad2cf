use serde::{Deserialize, Serialize};

/// A trainer memory as stored on the record (one for the original trainer,
/// one for the most recent handler).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Memory {
    pub kind: u8,
    pub intensity: u8,
    pub feeling: u8,
    pub text_var: u16,
}

impl Memory {
    /// True when no memory has been recorded at all.
    pub fn is_empty(&self) -> bool {
        self.kind == 0 && self.intensity == 0 && self.feeling == 0 && self.text_var == 0
    }
}
