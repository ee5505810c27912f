use crate::error::CliError;
use compiler::{
    CompiledTable,
    dialect::{Dialect, MySql},
};
use connectors::sdi::FOREIGN_KEYS_FILE;
use std::{
    collections::BTreeMap,
    path::Path,
};
use tracing::info;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct OutputSummary {
    pub databases: usize,
    pub tables: usize,
    pub foreign_key_scripts: usize,
}

fn use_statement(schema: &str) -> String {
    format!("USE {};\n\n", MySql.quote_identifier(schema))
}

/// Writes the SQL scripts of a batch:
///
/// - `<dir>/<schema>/<table>.sql`, one CREATE TABLE statement each
/// - `<dir>/<schema>.sql`, every table of the schema in name order
/// - `<dir>/<schema>/__foreign_keys.sql`, only when a table has foreign keys
pub async fn write_scripts(dir: &Path, tables: &[CompiledTable]) -> Result<OutputSummary, CliError> {
    let mut by_schema: BTreeMap<&str, Vec<&CompiledTable>> = BTreeMap::new();
    for table in tables {
        by_schema.entry(table.schema.as_str()).or_default().push(table);
    }

    let mut summary = OutputSummary::default();
    for (schema, mut schema_tables) in by_schema {
        schema_tables.sort_by(|a, b| a.name.cmp(&b.name));
        let schema_dir = dir.join(schema);
        tokio::fs::create_dir_all(&schema_dir).await?;

        for table in &schema_tables {
            let path = schema_dir.join(format!("{}.sql", table.name));
            tokio::fs::write(&path, &table.create_table).await?;
            info!("Wrote {}", path.display());
            summary.tables += 1;
        }

        let statements: Vec<&str> = schema_tables
            .iter()
            .map(|t| t.create_table.as_str())
            .collect();
        let database_script = dir.join(format!("{schema}.sql"));
        write_script(&database_script, schema, &statements.join("\n")).await?;
        summary.databases += 1;

        let foreign_keys: Vec<&str> = schema_tables
            .iter()
            .filter_map(|t| t.foreign_keys.as_deref())
            .collect();
        if !foreign_keys.is_empty() {
            let path = schema_dir.join(FOREIGN_KEYS_FILE);
            write_script(&path, schema, &foreign_keys.join("\n\n")).await?;
            summary.foreign_key_scripts += 1;
        }
    }

    Ok(summary)
}

async fn write_script(path: &Path, schema: &str, body: &str) -> Result<(), CliError> {
    let mut content = use_statement(schema);
    content.push_str(body);
    tokio::fs::write(path, content).await?;
    info!("Wrote {}", path.display());
    Ok(())
}
