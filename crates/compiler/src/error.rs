use model::core::charset::UnknownCollation;
use std::fmt;
use thiserror::Error;

/// Dictionary enumerations that are decoded into closed Rust enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    IndexKind,
    RowFormat,
    PartitionMethod,
    SubpartitionMethod,
    ReferentialAction,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodeKind::IndexKind => "index type",
            CodeKind::RowFormat => "row format",
            CodeKind::PartitionMethod => "partition method",
            CodeKind::SubpartitionMethod => "subpartition method",
            CodeKind::ReferentialAction => "foreign key rule",
        };
        f.write_str(name)
    }
}

/// Errors that abort the decoding of one table. Other tables of the same
/// batch are not affected.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    UnknownCollation(#[from] UnknownCollation),

    #[error("Unknown {kind} code: {code}")]
    UnknownEnumCode { kind: CodeKind, code: u32 },

    #[error("Inconsistent partitioning: {0}")]
    InconsistentPartitioning(String),

    /// An index or foreign key element points past the decoded columns.
    #[error("{context} references column position {position}, which does not exist")]
    DanglingColumnReference { context: String, position: u32 },

    #[error("Column ordinal position {0} is used more than once")]
    DuplicateOrdinal(u32),

    #[error("Column ordinal positions are not dense: expected {expected}, found {found}")]
    OrdinalGap { expected: u32, found: u32 },

    #[error("Invalid dictionary document: {0}")]
    Document(#[from] serde_json::Error),
}

impl DecodeError {
    pub fn unknown_code(kind: CodeKind, code: u32) -> Self {
        DecodeError::UnknownEnumCode { kind, code }
    }
}
