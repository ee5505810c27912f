//! Defines the core rendering trait and context for turning a
//! `TableDefinition` into DDL text.

use crate::{
    ast::table::TableDefinition,
    decode::table::CompiledTable,
    dialect::{Dialect, MySql},
};

pub mod column;
pub mod create_table;
pub mod foreign_key;
pub mod index;
pub mod options;
pub mod partition;

/// A trait for any definition node that can be rendered into SQL.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the SQL text and gives access to the dialect's quoting
/// rules while a node tree is rendered.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    pub fn push_string_literal(&mut self, value: &str) {
        let quoted = self.dialect.quote_string(value);
        self.sql.push_str(&quoted);
    }

    /// Renders `items` one after another with `separator` between them.
    pub fn push_joined<T: Render>(&mut self, items: &[T], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            item.render(self);
        }
    }

    /// `(`a`, `b`)`
    pub fn push_identifier_list(&mut self, idents: &[String]) {
        self.sql.push('(');
        for (i, ident) in idents.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_identifier(ident);
        }
        self.sql.push(')');
    }
}

/// Renders a single node with the MySQL dialect.
pub fn to_sql(node: &impl Render) -> String {
    let dialect = MySql;
    let mut renderer = Renderer::new(&dialect);
    node.render(&mut renderer);
    renderer.finish()
}

/// Renders both statements of a table.
pub fn render_table(table: &TableDefinition) -> CompiledTable {
    CompiledTable {
        schema: table.schema.clone(),
        name: table.name.clone(),
        create_table: table.create_table_sql(),
        foreign_keys: table.foreign_keys_sql(),
    }
}
