use crate::error::{CodeKind, DecodeError};
use serde::Serialize;

/// Partitioning methods, numbered as in the dictionary's `partition_type`
/// and `subpartition_type` fields. Code 0 means "not partitioned".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartitionMethod {
    Hash,
    Key,
    LinearHash,
    LinearKey,
    Range,
    RangeColumns,
    List,
    ListColumns,
}

impl PartitionMethod {
    pub fn from_code(code: u32) -> Result<Option<Self>, DecodeError> {
        let method = match code {
            0 => return Ok(None),
            1 => PartitionMethod::Hash,
            // 2 is KEY with the 5.1 hashing algorithm
            2 | 3 => PartitionMethod::Key,
            4 => PartitionMethod::LinearHash,
            5 | 6 => PartitionMethod::LinearKey,
            7 => PartitionMethod::Range,
            8 => PartitionMethod::List,
            9 => PartitionMethod::RangeColumns,
            10 => PartitionMethod::ListColumns,
            other => return Err(DecodeError::unknown_code(CodeKind::PartitionMethod, other)),
        };
        Ok(Some(method))
    }

    /// Subpartitions can only be hashed.
    pub fn sub_from_code(code: u32) -> Result<Option<Self>, DecodeError> {
        match code {
            0..=6 => Self::from_code(code),
            other => Err(DecodeError::unknown_code(
                CodeKind::SubpartitionMethod,
                other,
            )),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            PartitionMethod::Hash => "HASH",
            PartitionMethod::Key => "KEY",
            PartitionMethod::LinearHash => "LINEAR HASH",
            PartitionMethod::LinearKey => "LINEAR KEY",
            PartitionMethod::Range => "RANGE",
            PartitionMethod::RangeColumns => "RANGE COLUMNS",
            PartitionMethod::List => "LIST",
            PartitionMethod::ListColumns => "LIST COLUMNS",
        }
    }
}

/// `default_partitioning`/`default_subpartitioning` value for partitions
/// that were declared one by one. Any other value means the server derived
/// names and bounds from a count.
pub const EXPLICIT_DEFINITION: u32 = 1;

/// A partition or a subpartition. The format nests exactly one level:
/// a subpartition never has subpartitions of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSpec {
    pub name: String,
    /// `description_utf8`: the VALUES list or bound, empty for hashing.
    pub value_expression: String,
    pub engine: String,
    pub comment: String,
    subpartitions: Vec<PartitionSpec>,
}

impl PartitionSpec {
    pub fn leaf(
        name: impl Into<String>,
        value_expression: impl Into<String>,
        engine: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_expression: value_expression.into(),
            engine: engine.into(),
            comment: comment.into(),
            subpartitions: Vec::new(),
        }
    }

    /// Attaches subpartitions, rejecting any that are nested themselves.
    pub fn with_subpartitions(
        mut self,
        subpartitions: Vec<PartitionSpec>,
    ) -> Result<Self, DecodeError> {
        if let Some(nested) = subpartitions.iter().find(|s| !s.subpartitions.is_empty()) {
            return Err(DecodeError::InconsistentPartitioning(format!(
                "subpartition '{}' of partition '{}' has subpartitions",
                nested.name, self.name
            )));
        }
        self.subpartitions = subpartitions;
        Ok(self)
    }

    pub fn subpartitions(&self) -> &[PartitionSpec] {
        &self.subpartitions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitioningSpec {
    /// `None` for a table that is not partitioned.
    pub method: Option<PartitionMethod>,
    pub expression: String,
    pub explicit_partitions: bool,
    pub sub_method: Option<PartitionMethod>,
    pub sub_expression: String,
    pub explicit_subpartitions: bool,
    pub partitions: Vec<PartitionSpec>,
}

impl PartitioningSpec {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_partitioned(&self) -> bool {
        self.method.is_some()
    }
}
