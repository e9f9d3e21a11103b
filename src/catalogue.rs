//! Catalogue loader — converts catalogue CSV rows into the Work data model.
//!
//! All validation happens here, before any rendering: a single bad
//! catalogue number fails the whole load, so no partial document can
//! ever be produced from a broken table.

use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::model::{CatalogueNumber, Work, WorkDate};

/// One CSV row as it appears on disk, before validation.
///
/// Optional columns (`title_imslp`, `composer_imslp`, `notes`) may be
/// empty or missing entirely; both deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawWork {
    id: String,
    title: String,
    #[serde(default)]
    title_imslp: Option<String>,
    #[serde(default)]
    composer_imslp: Option<String>,
    key: String,
    date: String,
    genre: String,
    #[serde(default)]
    notes: Option<String>,
}

impl RawWork {
    /// Validate the raw row into a Work. Fails on a malformed
    /// catalogue number.
    fn validate(self, row: usize) -> Result<Work, String> {
        let catalogue = CatalogueNumber::parse(&self.id)
            .map_err(|e| format!("Row {row}: {e}"))?;
        Ok(Work {
            catalogue,
            title: self.title,
            title_imslp: non_empty(self.title_imslp),
            composer_imslp: non_empty(self.composer_imslp),
            key: self.key,
            date: WorkDate::from_csv(&self.date),
            genre: self.genre,
            notes: non_empty(self.notes),
        })
    }
}

/// Treat whitespace-only optional cells the same as absent ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Load and validate a catalogue CSV file.
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<Vec<Work>, String> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalogue '{}': {e}", path.display()))?;
    parse_catalogue(&data)
}

/// Parse catalogue CSV content into validated Work records, preserving
/// input order.
pub fn parse_catalogue(data: &str) -> Result<Vec<Work>, String> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut works = Vec::new();
    for (i, result) in reader.deserialize::<RawWork>().enumerate() {
        // Row numbers are 1-based and skip the header line
        let row = i + 2;
        let raw = result.map_err(|e| format!("Failed to parse CSV row {row}: {e}"))?;
        works.push(raw.validate(row)?);
    }
    Ok(works)
}
