use crate::{
    ast::foreign_key::ForeignKeyConstraint,
    renderer::{Render, Renderer},
};

/// The single `ALTER TABLE` statement that adds every foreign key of a
/// table. Kept out of `CREATE TABLE` so that tables can be created in any
/// order.
pub struct AlterTableForeignKeys<'a> {
    pub table: &'a str,
    pub constraints: &'a [ForeignKeyConstraint],
}

impl Render for AlterTableForeignKeys<'_> {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("ALTER TABLE ");
        r.push_identifier(self.table);
        r.sql.push_str("\n\t");
        r.push_joined(self.constraints, ",\n\t");
        r.sql.push(';');
    }
}

impl Render for ForeignKeyConstraint {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("ADD CONSTRAINT ");
        r.push_identifier(&self.name);
        r.sql.push_str(" FOREIGN KEY ");
        r.push_identifier_list(&self.local_columns);

        r.sql.push_str(" REFERENCES ");
        if let Some(schema) = &self.referenced_schema {
            r.push_identifier(schema);
            r.sql.push('.');
        }
        r.push_identifier(&self.referenced_table);
        r.sql.push(' ');
        r.push_identifier_list(&self.referenced_columns);

        r.sql.push_str(" ON DELETE ");
        r.sql.push_str(self.on_delete.keyword());
        r.sql.push_str(" ON UPDATE ");
        r.sql.push_str(self.on_update.keyword());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::foreign_key::ReferentialAction, renderer::to_sql};

    fn constraint(name: &str, referenced_schema: Option<&str>) -> ForeignKeyConstraint {
        ForeignKeyConstraint {
            name: name.to_string(),
            local_columns: vec!["customer_id".into()],
            referenced_schema: referenced_schema.map(str::to_string),
            referenced_table: "customers".into(),
            referenced_columns: vec!["id".into()],
            on_delete: ReferentialAction::Cascade,
            on_update: ReferentialAction::NoAction,
        }
    }

    #[test]
    fn test_render_constraint() {
        assert_eq!(
            to_sql(&constraint("fk_customer", None)),
            "ADD CONSTRAINT `fk_customer` FOREIGN KEY (`customer_id`) REFERENCES `customers` (`id`) ON DELETE CASCADE ON UPDATE NO ACTION"
        );
    }

    #[test]
    fn test_cross_schema_reference() {
        assert_eq!(
            to_sql(&constraint("fk_customer", Some("crm"))),
            "ADD CONSTRAINT `fk_customer` FOREIGN KEY (`customer_id`) REFERENCES `crm`.`customers` (`id`) ON DELETE CASCADE ON UPDATE NO ACTION"
        );
    }

    #[test]
    fn test_render_alter_table() {
        let mut composite = constraint("fk_order_line", None);
        composite.local_columns = vec!["order_id".into(), "line_no".into()];
        composite.referenced_table = "order_lines".into();
        composite.referenced_columns = vec!["order_id".into(), "line_no".into()];
        composite.on_delete = ReferentialAction::Restrict;
        composite.on_update = ReferentialAction::SetNull;

        let constraints = vec![constraint("fk_customer", None), composite];
        let sql = to_sql(&AlterTableForeignKeys {
            table: "orders",
            constraints: &constraints,
        });
        assert_eq!(
            sql,
            "ALTER TABLE `orders`\n\tADD CONSTRAINT `fk_customer` FOREIGN KEY (`customer_id`) REFERENCES `customers` (`id`) ON DELETE CASCADE ON UPDATE NO ACTION,\n\tADD CONSTRAINT `fk_order_line` FOREIGN KEY (`order_id`, `line_no`) REFERENCES `order_lines` (`order_id`, `line_no`) ON DELETE RESTRICT ON UPDATE SET NULL;"
        );
    }
}
