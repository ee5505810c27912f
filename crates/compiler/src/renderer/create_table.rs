use crate::{
    ast::table::TableDefinition,
    renderer::{Render, Renderer, foreign_key::AlterTableForeignKeys, to_sql},
};

impl Render for TableDefinition {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        r.push_identifier(&self.name);
        r.sql.push_str("(\n\t");

        r.push_joined(&self.columns, ",\n\t");
        if !self.columns.is_empty() && !self.indexes.is_empty() {
            r.sql.push_str(",\n\t");
        }
        r.push_joined(&self.indexes, ",\n\t");

        r.sql.push_str(&format!(
            "\n) ENGINE={} ROW_FORMAT={} DEFAULT CHARSET={} COLLATE={} ",
            self.engine,
            self.row_format.keyword(),
            self.charset.charset_name,
            self.charset.collation_name,
        ));
        if let Some(auto_increment) = self.auto_increment {
            r.sql.push_str(&format!("AUTO_INCREMENT={auto_increment}"));
        }
        r.sql.push(' ');
        self.options.render(r);

        if self.partitioning.is_partitioned() {
            r.sql.push('\n');
            self.partitioning.render(r);
        }
        r.sql.push(';');
    }
}

impl TableDefinition {
    /// The `CREATE TABLE` statement, without foreign keys.
    pub fn create_table_sql(&self) -> String {
        to_sql(self)
    }

    /// The `ALTER TABLE` statement adding the foreign keys, `None` when the
    /// table has none.
    pub fn foreign_keys_sql(&self) -> Option<String> {
        if self.foreign_keys.is_empty() {
            return None;
        }
        Some(to_sql(&AlterTableForeignKeys {
            table: &self.name,
            constraints: &self.foreign_keys,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        TableCompiler,
        decode::{
            column::tests::{catalog, sdi_column},
            partition::tests::{sdi_partition, sdi_table},
        },
    };
    use model::sdi::{SdiForeignKey, SdiForeignKeyElement, SdiIndex, SdiIndexElement, SdiTable};

    fn orders_table() -> SdiTable {
        let mut id = sdi_column("id", "int", 1);
        id.is_nullable = false;
        id.has_no_default = true;
        id.is_auto_increment = true;
        let mut name = sdi_column("name", "varchar(50)", 2);
        name.has_no_default = true;

        let mut table = sdi_table();
        table.columns = vec![id, name];
        table.indexes = vec![SdiIndex {
            name: "PRIMARY".into(),
            index_type: 1,
            hidden: false,
            elements: vec![SdiIndexElement {
                column_opx: 0,
                length: 4,
                hidden: false,
            }],
        }];
        table.se_private_data = "autoinc=1;version=0;".into();
        table.options = "avg_row_length=0;key_block_size=0;keys_disabled=0;pack_record=1;stats_auto_recalc=0;stats_sample_pages=0;".into();
        table
    }

    #[test]
    fn test_render_create_table() {
        let catalog = catalog();
        let definition = TableCompiler::new(&catalog).decode(&orders_table()).unwrap();

        let expected = "CREATE TABLE `t`(\n\t`id` int NOT NULL AUTO_INCREMENT,\n\t`name` varchar(50) CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NULL,\n\tPRIMARY KEY (`id`)\n) ENGINE=InnoDB ROW_FORMAT=DYNAMIC DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_general_ci AUTO_INCREMENT=1 ;";
        assert_eq!(definition.create_table_sql(), expected);
        // Rendering is a pure function of the definition.
        assert_eq!(definition.create_table_sql(), expected);
        assert_eq!(definition.foreign_keys_sql(), None);
    }

    #[test]
    fn test_render_without_auto_increment_keeps_slots() {
        let catalog = catalog();
        let mut table = orders_table();
        table.se_private_data = String::new();
        table.options = "encrypt_type=N;".into();
        let sql = TableCompiler::new(&catalog)
            .decode(&table)
            .unwrap()
            .create_table_sql();
        assert!(sql.ends_with(
            "\n) ENGINE=InnoDB ROW_FORMAT=DYNAMIC DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_general_ci  ENCRYPTION='N';"
        ));
    }

    #[test]
    fn test_render_partitioned_table() {
        let catalog = catalog();
        let mut table = orders_table();
        table.partition_type = 7;
        table.partition_expression_utf8 = "`id`".into();
        table.default_partitioning = 1;
        table.partitions = vec![sdi_partition("p0", "100"), sdi_partition("p1", "MAXVALUE")];

        let sql = TableCompiler::new(&catalog)
            .decode(&table)
            .unwrap()
            .create_table_sql();
        assert!(sql.ends_with(
            "AUTO_INCREMENT=1 \nPARTITION BY RANGE(`id`)\n(\n\tPARTITION p0 VALUES LESS THAN (100) ENGINE=InnoDB,\n\tPARTITION p1 VALUES LESS THAN MAXVALUE ENGINE=InnoDB\n);"
        ));
    }

    #[test]
    fn test_foreign_keys_are_rendered_separately() {
        let catalog = catalog();
        let mut table = orders_table();
        table.foreign_keys = vec![SdiForeignKey {
            name: "fk_parent".into(),
            referenced_table_name: "parents".into(),
            referenced_table_schema_name: "shop".into(),
            delete_rule: 3,
            update_rule: 1,
            elements: vec![SdiForeignKeyElement {
                column_opx: 0,
                referenced_column_name: "id".into(),
            }],
        }];

        let compiled = TableCompiler::new(&catalog).compile(&table).unwrap();
        assert!(!compiled.create_table.contains("FOREIGN KEY"));
        assert_eq!(
            compiled.foreign_keys.as_deref(),
            Some(
                "ALTER TABLE `t`\n\tADD CONSTRAINT `fk_parent` FOREIGN KEY (`id`) REFERENCES `parents` (`id`) ON DELETE CASCADE ON UPDATE NO ACTION;"
            )
        );
        assert_eq!(compiled.schema, "shop");
        assert_eq!(compiled.name, "t");
    }
}
