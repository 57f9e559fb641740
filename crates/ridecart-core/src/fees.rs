//! Ancillary-fee table: vehicle category → purchasable fee unit.
//!
//! Built once at startup from `config/ancillary_fees.yaml` and handed to the
//! cart composer. Lookups trim and lowercase the category on both sides, so
//! `"  Luxury SEDAN "` matches an entry written as `Luxury Sedan`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEntry {
    /// Vehicle category exactly as merchandised, e.g. `"Luxury Sedan"`.
    pub category: String,
    /// Global id of the fee's purchasable unit.
    pub unit_ref: String,
    /// Human-readable fee name used in the order note.
    #[serde(default = "default_fee_label")]
    pub label: String,
}

fn default_fee_label() -> String {
    "Parking fee".to_string()
}

#[derive(Debug, Deserialize)]
pub struct FeesFile {
    pub fees: Vec<FeeEntry>,
}

/// Normalized category → fee entry map.
#[derive(Debug, Clone, Default)]
pub struct FeeTable {
    entries: HashMap<String, FeeEntry>,
}

impl FeeTable {
    /// Builds a table from already-validated entries. Later duplicates win.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = FeeEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (normalize_category(&e.category), e))
            .collect();
        Self { entries }
    }

    /// Returns the fee entry for `category`, if one is configured.
    #[must_use]
    pub fn lookup(&self, category: &str) -> Option<&FeeEntry> {
        self.entries.get(&normalize_category(category))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Load and validate the ancillary-fee table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_fee_table(path: &Path) -> Result<FeeTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FeesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_fee_table(&content)
}

/// Parse and validate a fee table from YAML text.
///
/// # Errors
///
/// Returns [`ConfigError::FeesFileParse`] on malformed YAML and
/// [`ConfigError::Validation`] on empty or duplicate entries.
pub fn parse_fee_table(content: &str) -> Result<FeeTable, ConfigError> {
    let fees_file: FeesFile = serde_yaml::from_str(content)?;
    validate_fees(&fees_file)?;
    Ok(FeeTable::new(fees_file.fees))
}

fn validate_fees(fees_file: &FeesFile) -> Result<(), ConfigError> {
    let mut seen = std::collections::HashSet::new();

    for entry in &fees_file.fees {
        if entry.category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fee category must be non-empty".to_string(),
            ));
        }

        if entry.unit_ref.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "fee for category '{}' has an empty unit_ref",
                entry.category
            )));
        }

        if !seen.insert(normalize_category(&entry.category)) {
            return Err(ConfigError::Validation(format!(
                "duplicate fee category: '{}'",
                entry.category
            )));
        }
    }

    Ok(())
}
