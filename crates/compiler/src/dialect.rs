//! Defines the `Dialect` trait for the quoting rules of the emitted DDL.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the dialect's
    /// quotation marks.
    ///
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Escapes a value for embedding between single quotes.
    fn escape_string(&self, value: &str) -> String;

    /// Escapes a value and wraps it in single quotes.
    fn quote_string(&self, value: &str) -> String {
        format!("'{}'", self.escape_string(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn escape_string(&self, value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '\\' | '\'' | '"' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\0' => escaped.push_str("\\0"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
