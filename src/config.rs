use crate::errors::{LegalityError, LegalityResult};
use schema::OriginGame;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_SUPPORTED_GENERATION: u8 = 6;
const DEFAULT_UNSUPPORTED_MESSAGE: &str =
    "Analysis only available for Pokémon that originate from X/Y & OR/AS.";

/// Analyzer settings. Any field missing from a RON file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalityConfig {
    /// Only records originating from this generation are analyzed.
    pub supported_generation: u8,
    /// Returned verbatim as the whole report for any other origin.
    pub unsupported_message: String,
}

impl Default for LegalityConfig {
    fn default() -> Self {
        LegalityConfig {
            supported_generation: DEFAULT_SUPPORTED_GENERATION,
            unsupported_message: DEFAULT_UNSUPPORTED_MESSAGE.to_string(),
        }
    }
}

impl LegalityConfig {
    pub fn from_ron_str(content: &str) -> LegalityResult<Self> {
        ron::from_str(content).map_err(LegalityError::Config)
    }

    /// Load the configuration from a RON file
    pub fn load(path: &Path) -> LegalityResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn supports(&self, origin: OriginGame) -> bool {
        origin.generation() == Some(self.supported_generation)
    }
}
