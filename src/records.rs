//! Loading decoded records from RON text.

use crate::errors::{LegalityError, LegalityResult};
use schema::PokemonRecord;
use std::fs;
use std::path::Path;

pub fn parse_record(content: &str) -> LegalityResult<PokemonRecord> {
    ron::from_str(content).map_err(LegalityError::Record)
}

/// Load a single record from a RON file
pub fn load_record(path: &Path) -> LegalityResult<PokemonRecord> {
    let content = fs::read_to_string(path)?;
    parse_record(&content)
}

/// Load every `.ron` record in a directory, sorted by file name.
pub fn load_records(dir: &Path) -> LegalityResult<Vec<(String, PokemonRecord)>> {
    let mut records = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("ron") {
            continue;
        }
        if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
            records.push((name.to_string(), load_record(&path)?));
        }
    }

    records.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(records)
}
