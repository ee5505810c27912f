use crate::error::{CodeKind, DecodeError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndexKind {
    Primary,
    Unique,
    Multiple,
    FullText,
    Spatial,
}

impl IndexKind {
    pub fn from_code(code: u32) -> Result<Self, DecodeError> {
        match code {
            1 => Ok(IndexKind::Primary),
            2 => Ok(IndexKind::Unique),
            3 => Ok(IndexKind::Multiple),
            4 => Ok(IndexKind::FullText),
            5 => Ok(IndexKind::Spatial),
            other => Err(DecodeError::unknown_code(CodeKind::IndexKind, other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexElement {
    pub column_ordinal: u32,
    pub column_name: String,
    /// Stored length in bytes, possibly the full-column sentinel.
    pub length_bytes: u64,
    /// Prefix length in characters; `None` renders the bare column.
    pub prefix_chars: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSpec {
    pub name: String,
    pub kind: IndexKind,
    /// In dictionary element order, never empty.
    pub elements: Vec<IndexElement>,
}
