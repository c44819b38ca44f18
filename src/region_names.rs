//! Region name mapping loaded from the bundled province-city table
//! Maps 4-digit administrative region codes to display names

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::IdCardError;

/// Tab-separated region table shipped with the crate, one `code<TAB>name`
/// record per line.
pub const PROVINCE_CITY_TSV: &str = include_str!("../data/province-city.txt");

/// Immutable mapping from region code to region display name.
///
/// Built once at startup and shared read-only afterwards; lookups never
/// mutate the table.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    entries: HashMap<String, String>,
}

impl RegionTable {
    /// Parse a table from tab-separated text.
    ///
    /// Each line is split on the first tab; code and name are trimmed and
    /// inserted, with later lines overwriting earlier ones for the same
    /// code. Blank lines and lines without a tab are skipped. Empty input
    /// yields an empty table.
    pub fn from_tsv(raw: &str) -> Self {
        let mut entries = HashMap::new();
        for line in raw.lines() {
            if let Some((code, name)) = line.split_once('\t') {
                entries.insert(code.trim().to_string(), name.trim().to_string());
            }
        }
        RegionTable { entries }
    }

    /// The table bundled into the crate.
    pub fn bundled() -> Self {
        let table = Self::from_tsv(PROVINCE_CITY_TSV);
        debug!("loaded {} bundled region codes", table.len());
        table
    }

    /// Load a table from an external file. A missing or unreadable file is
    /// fatal to construction and reported right away.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IdCardError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| IdCardError::RegionData {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_tsv(&raw);
        debug!("loaded {} region codes from {}", table.len(), path.display());
        Ok(table)
    }

    /// Look up the display name for a region code
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
