use model::core::{charset::CharsetEntry, data_type::DataType};
use serde::Serialize;

/// A column default as stored in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DefaultValue {
    /// `DEFAULT NULL`
    Null,
    /// The raw default text, unquoted and unescaped.
    Literal(String),
}

/// One visible column, fully resolved against the collation catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub raw_type: String,
    pub base_type: DataType,
    /// 1-based, dense once engine-hidden columns are dropped.
    pub ordinal_position: u32,
    pub is_nullable: bool,
    pub is_unsigned: bool,
    pub is_zero_fill: bool,
    pub is_auto_increment: bool,
    pub is_virtual: bool,
    /// `None` when the column has no default at all.
    pub default: Option<DefaultValue>,
    pub collation_id: u32,
    /// Resolved charset, only for string-family base types.
    pub charset: Option<CharsetEntry>,
    pub generation_expression: Option<String>,
    pub comment: String,
}

impl ColumnSpec {
    pub fn is_generated(&self) -> bool {
        self.generation_expression.is_some()
    }
}
