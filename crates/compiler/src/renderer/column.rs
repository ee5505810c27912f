use crate::{
    ast::column::{ColumnSpec, DefaultValue},
    renderer::{Render, Renderer},
};
use model::core::data_type::DataType;

const ZERO_DATE: &str = "0000-00-00";
const FIRST_VALID_DATE: &str = "0000-01-01";
const ZERO_BINARY: &str = "0x";
const CURRENT_TIMESTAMP: &str = "CURRENT_TIMESTAMP";

impl Render for ColumnSpec {
    fn render(&self, r: &mut Renderer) {
        // Name and Type
        r.push_identifier(&self.name);
        r.sql.push(' ');
        r.sql.push_str(&self.raw_type);

        let lowered = self.raw_type.to_ascii_lowercase();
        if self.is_unsigned && !lowered.contains("unsigned") {
            r.sql.push_str(" UNSIGNED");
        }
        if self.is_zero_fill && !lowered.contains("zerofill") {
            r.sql.push_str(" ZEROFILL");
        }

        match &self.generation_expression {
            None => {
                if let Some(charset) = &self.charset {
                    if !charset.is_binary() {
                        r.sql.push_str(" CHARACTER SET ");
                        r.sql.push_str(&charset.charset_name);
                    }
                    r.sql.push_str(" COLLATE ");
                    r.sql.push_str(&charset.collation_name);
                }
                render_nullability(self, r);
                if let Some(default) = &self.default {
                    render_default(&self.base_type, default, r);
                }
                if self.is_auto_increment {
                    r.sql.push_str(" AUTO_INCREMENT");
                }
            }
            Some(expression) => {
                if let Some(charset) = &self.charset {
                    r.sql.push_str(" COLLATE ");
                    r.sql.push_str(&charset.collation_name);
                }
                r.sql.push_str(" AS (");
                r.sql.push_str(expression);
                r.sql.push_str(if self.is_virtual { ") VIRTUAL" } else { ") STORED" });
                render_nullability(self, r);
            }
        }

        if !self.comment.is_empty() {
            r.sql.push_str(" COMMENT ");
            r.push_string_literal(&self.comment);
        }
    }
}

fn render_nullability(column: &ColumnSpec, r: &mut Renderer) {
    r.sql
        .push_str(if column.is_nullable { " NULL" } else { " NOT NULL" });
}

fn render_default(base_type: &DataType, default: &DefaultValue, r: &mut Renderer) {
    let value = match default {
        DefaultValue::Null => {
            r.sql.push_str(" DEFAULT NULL");
            return;
        }
        DefaultValue::Literal(value) => value.as_str(),
    };

    // Strict modes reject the zero date.
    let rewritten;
    let value = match base_type {
        DataType::Date | DataType::DateTime if value.starts_with(ZERO_DATE) => {
            rewritten = format!("{FIRST_VALID_DATE}{}", &value[ZERO_DATE.len()..]);
            rewritten.as_str()
        }
        _ => value,
    };

    if is_temporal(base_type) && value.starts_with(CURRENT_TIMESTAMP) {
        r.sql.push_str(" DEFAULT ");
        r.sql.push_str(value);
        return;
    }

    if base_type.has_unquoted_default() {
        if value.is_empty() || value == ZERO_BINARY {
            return;
        }
        // A timestamp literal is a date string, only functions go bare.
        if *base_type == DataType::Timestamp && value.starts_with(|c: char| c.is_ascii_digit()) {
            r.sql.push_str(" DEFAULT ");
            r.push_string_literal(value);
            return;
        }
        r.sql.push_str(" DEFAULT ");
        r.sql.push_str(value);
        return;
    }

    r.sql.push_str(" DEFAULT ");
    r.push_string_literal(value);
}

fn is_temporal(base_type: &DataType) -> bool {
    matches!(
        base_type,
        DataType::Date | DataType::DateTime | DataType::Timestamp | DataType::Time
    )
}
