use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Character set name of the binary pseudo-charset (`varbinary`, `blob`, ...).
pub const BINARY_CHARSET: &str = "binary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown collation id: {0}")]
pub struct UnknownCollation(pub u32);

/// One row of the server's collation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetEntry {
    pub id: u32,
    pub collation_name: String,
    pub charset_name: String,
    pub max_bytes_per_char: u32,
}

impl CharsetEntry {
    pub fn new(
        id: u32,
        collation_name: impl Into<String>,
        charset_name: impl Into<String>,
        max_bytes_per_char: u32,
    ) -> Self {
        Self {
            id,
            collation_name: collation_name.into(),
            charset_name: charset_name.into(),
            max_bytes_per_char,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.charset_name == BINARY_CHARSET
    }

    /// Converts an index prefix stored in bytes into a character count.
    pub fn bytes_to_chars(&self, bytes: u64) -> u64 {
        let width = u64::from(self.max_bytes_per_char.max(1));
        bytes.div_ceil(width)
    }
}

/// Collation id -> charset mapping, filled once before any document is
/// decoded and only read afterwards. Share it behind an `Arc` when
/// compiling documents in parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharsetCatalog {
    entries: HashMap<u32, CharsetEntry>,
}

impl CharsetCatalog {
    pub fn from_entries(entries: impl IntoIterator<Item = CharsetEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn lookup(&self, collation_id: u32) -> Result<&CharsetEntry, UnknownCollation> {
        self.entries
            .get(&collation_id)
            .ok_or(UnknownCollation(collation_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by collation id.
    pub fn entries(&self) -> Vec<&CharsetEntry> {
        let ordered: BTreeMap<_, _> = self.entries.iter().collect();
        ordered.into_values().collect()
    }
}

impl Serialize for CharsetCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CharsetCatalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<CharsetEntry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
