use crate::{
    ast::column::{ColumnSpec, DefaultValue},
    error::DecodeError,
};
use model::{
    core::{charset::CharsetCatalog, data_type::DataType},
    sdi::{HIDDEN_SE, SdiColumn},
};
use tracing::debug;

pub struct ColumnDecoder<'a> {
    catalog: &'a CharsetCatalog,
}

impl<'a> ColumnDecoder<'a> {
    pub fn new(catalog: &'a CharsetCatalog) -> Self {
        Self { catalog }
    }

    /// Decodes one column entry. Columns the storage engine adds on its
    /// own yield `None`.
    pub fn decode(&self, column: &SdiColumn) -> Result<Option<ColumnSpec>, DecodeError> {
        if column.hidden == HIDDEN_SE {
            debug!("Skipping engine-hidden column '{}'", column.name);
            return Ok(None);
        }

        let base_type = DataType::from_column_type(&column.column_type_utf8);
        let charset = if base_type.is_string() {
            Some(self.catalog.lookup(column.collation_id)?.clone())
        } else {
            None
        };

        let default = if column.has_no_default {
            None
        } else if column.default_value_utf8_null && !column.default_value_null {
            debug!("Column '{}' has a default without a text form", column.name);
            None
        } else if column.default_value_null {
            Some(DefaultValue::Null)
        } else {
            Some(DefaultValue::Literal(column.default_value_utf8.clone()))
        };

        let generation_expression = Some(column.generation_expression_utf8.as_str())
            .filter(|expr| !expr.is_empty())
            .map(str::to_string);

        Ok(Some(ColumnSpec {
            name: column.name.clone(),
            raw_type: column.column_type_utf8.clone(),
            base_type,
            ordinal_position: column.ordinal_position,
            is_nullable: column.is_nullable,
            is_unsigned: column.is_unsigned,
            is_zero_fill: column.is_zerofill,
            is_auto_increment: column.is_auto_increment,
            is_virtual: column.is_virtual,
            default,
            collation_id: column.collation_id,
            charset,
            generation_expression,
            comment: column.comment.clone(),
        }))
    }

    /// Decodes all visible columns and orders them by ordinal position.
    ///
    /// Ordinal positions must be unique and dense starting at 1 once the
    /// hidden columns are gone, since indexes and foreign keys address
    /// columns by that position.
    pub fn decode_all(&self, columns: &[SdiColumn]) -> Result<Vec<ColumnSpec>, DecodeError> {
        let mut decoded = Vec::with_capacity(columns.len());
        for column in columns {
            if let Some(spec) = self.decode(column)? {
                decoded.push(spec);
            }
        }
        decoded.sort_by_key(|c| c.ordinal_position);

        for (expected, column) in (1u32..).zip(&decoded) {
            if column.ordinal_position < expected {
                return Err(DecodeError::DuplicateOrdinal(column.ordinal_position));
            }
            if column.ordinal_position != expected {
                return Err(DecodeError::OrdinalGap {
                    expected,
                    found: column.ordinal_position,
                });
            }
        }
        Ok(decoded)
    }
}
