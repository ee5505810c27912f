use serde::{Deserialize, Serialize};

/// Value of `SdiColumn::hidden` for columns the storage engine adds on its
/// own (`DB_TRX_ID`, `DB_ROLL_PTR`, `DB_ROW_ID`).
pub const HIDDEN_SE: u32 = 2;

/// Index element prefix length meaning "the whole column".
pub const FULL_COLUMN_LENGTH: u64 = u32::MAX as u64;

/// The `dd_object` of a table.
///
/// Only the fields needed to rebuild the table definition are modeled;
/// everything listed here is required and a missing field fails the
/// deserialization of the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiTable {
    pub name: String,
    pub schema_ref: String,
    pub engine: String,
    pub collation_id: u32,
    pub row_format: u32,
    /// `key=value;` list, e.g. `avg_row_length=0;key_block_size=0;...`
    pub options: String,
    /// `key=value;` list, e.g. `autoinc=42;version=0;`
    pub se_private_data: String,
    pub columns: Vec<SdiColumn>,
    pub indexes: Vec<SdiIndex>,
    pub foreign_keys: Vec<SdiForeignKey>,
    pub partition_type: u32,
    pub partition_expression_utf8: String,
    pub default_partitioning: u32,
    pub subpartition_type: u32,
    pub subpartition_expression_utf8: String,
    pub default_subpartitioning: u32,
    pub partitions: Vec<SdiPartition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiColumn {
    pub name: String,
    pub column_type_utf8: String,
    pub ordinal_position: u32,
    pub hidden: u32,
    pub is_nullable: bool,
    pub is_zerofill: bool,
    pub is_unsigned: bool,
    pub is_auto_increment: bool,
    pub is_virtual: bool,
    pub has_no_default: bool,
    pub default_value_null: bool,
    /// Set when the default has no text form, as for auto-increment keys.
    #[serde(default)]
    pub default_value_utf8_null: bool,
    pub default_value_utf8: String,
    pub generation_expression_utf8: String,
    pub collation_id: u32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiIndex {
    pub name: String,
    /// 1=PRIMARY, 2=UNIQUE, 3=MULTIPLE, 4=FULLTEXT, 5=SPATIAL
    #[serde(rename = "type")]
    pub index_type: u32,
    pub hidden: bool,
    pub elements: Vec<SdiIndexElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiIndexElement {
    /// 0-based position in the ordinal-ordered column list.
    pub column_opx: u32,
    /// Prefix length in bytes, `FULL_COLUMN_LENGTH` when not a prefix.
    pub length: u64,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiForeignKey {
    pub name: String,
    pub referenced_table_name: String,
    #[serde(default)]
    pub referenced_table_schema_name: String,
    /// 1=NO ACTION, 2=RESTRICT, 3=CASCADE, 4=SET NULL, 5=SET DEFAULT
    pub delete_rule: u32,
    pub update_rule: u32,
    pub elements: Vec<SdiForeignKeyElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiForeignKeyElement {
    pub column_opx: u32,
    pub referenced_column_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdiPartition {
    pub name: String,
    pub description_utf8: String,
    pub engine: String,
    pub comment: String,
    #[serde(default)]
    pub subpartitions: Vec<SdiPartition>,
}
