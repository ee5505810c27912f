use crate::{
    ast::{
        column::ColumnSpec, foreign_key::ForeignKeyConstraint, index::IndexSpec,
        options::TableOptions, partition::PartitioningSpec,
    },
    error::{CodeKind, DecodeError},
};
use model::core::charset::CharsetEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowFormat {
    Fixed,
    Dynamic,
    Compressed,
    Redundant,
    Compact,
    Paged,
}

impl RowFormat {
    pub fn from_code(code: u32) -> Result<Self, DecodeError> {
        match code {
            1 => Ok(RowFormat::Fixed),
            2 => Ok(RowFormat::Dynamic),
            3 => Ok(RowFormat::Compressed),
            4 => Ok(RowFormat::Redundant),
            5 => Ok(RowFormat::Compact),
            6 => Ok(RowFormat::Paged),
            other => Err(DecodeError::unknown_code(CodeKind::RowFormat, other)),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            RowFormat::Fixed => "FIXED",
            RowFormat::Dynamic => "DYNAMIC",
            RowFormat::Compressed => "COMPRESSED",
            RowFormat::Redundant => "REDUNDANT",
            RowFormat::Compact => "COMPACT",
            RowFormat::Paged => "PAGED",
        }
    }
}

/// Root of the definition tree for one dictionary document.
///
/// Built once by `TableCompiler::decode` and never mutated; rendering it is
/// a pure function of its content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDefinition {
    pub schema: String,
    pub name: String,
    pub engine: String,
    pub row_format: RowFormat,
    pub collation_id: u32,
    pub charset: CharsetEntry,
    pub auto_increment: Option<u64>,
    /// Ordered by ordinal position.
    pub columns: Vec<ColumnSpec>,
    /// In dictionary order.
    pub indexes: Vec<IndexSpec>,
    pub partitioning: PartitioningSpec,
    pub foreign_keys: Vec<ForeignKeyConstraint>,
    pub options: TableOptions,
}
