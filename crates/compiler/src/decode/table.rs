use crate::{
    ast::table::{RowFormat, TableDefinition},
    decode::{
        column::ColumnDecoder, foreign_key::ForeignKeyDecoder, index::IndexSetDecoder,
        options::TableOptionsDecoder, partition::PartitioningDecoder,
    },
    error::DecodeError,
    renderer::render_table,
};
use model::{
    core::charset::CharsetCatalog,
    sdi::{self, SdiTable, kv},
};
use serde::Serialize;
use tracing::{debug, warn};

const AUTO_INCREMENT_KEY: &str = "autoinc";

/// DDL produced for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledTable {
    pub schema: String,
    pub name: String,
    pub create_table: String,
    /// `ALTER TABLE ... ADD CONSTRAINT ...;`, absent without foreign keys.
    pub foreign_keys: Option<String>,
}

/// Decodes dictionary documents into `TableDefinition`s and renders them.
///
/// The compiler only borrows the collation catalog, so one catalog can
/// serve any number of compilers running on different threads.
pub struct TableCompiler<'a> {
    catalog: &'a CharsetCatalog,
}

impl<'a> TableCompiler<'a> {
    pub fn new(catalog: &'a CharsetCatalog) -> Self {
        Self { catalog }
    }

    pub fn decode(&self, table: &SdiTable) -> Result<TableDefinition, DecodeError> {
        debug!("Decoding table '{}.{}'", table.schema_ref, table.name);

        let columns = ColumnDecoder::new(self.catalog).decode_all(&table.columns)?;
        let indexes = IndexSetDecoder::new(&columns).decode(&table.indexes)?;
        let foreign_keys =
            ForeignKeyDecoder::new(&table.schema_ref, &columns).decode(&table.foreign_keys)?;
        let partitioning = PartitioningDecoder::decode(table)?;
        let options = TableOptionsDecoder::decode(&table.options);
        let row_format = RowFormat::from_code(table.row_format)?;
        let charset = self.catalog.lookup(table.collation_id)?.clone();
        let auto_increment = auto_increment(&table.se_private_data);

        Ok(TableDefinition {
            schema: table.schema_ref.clone(),
            name: table.name.clone(),
            engine: table.engine.clone(),
            row_format,
            collation_id: table.collation_id,
            charset,
            auto_increment,
            columns,
            indexes,
            partitioning,
            foreign_keys,
            options,
        })
    }

    pub fn compile(&self, table: &SdiTable) -> Result<CompiledTable, DecodeError> {
        let definition = self.decode(table)?;
        Ok(render_table(&definition))
    }

    /// Compiles raw SDI JSON. `Ok(None)` means the document describes no
    /// table (e.g. a tablespace-only extract).
    pub fn compile_json(&self, json: &str) -> Result<Option<CompiledTable>, DecodeError> {
        sdi::table_from_json(json)?
            .map(|table| self.compile(&table))
            .transpose()
    }
}

/// Reads the next auto-increment value out of `se_private_data`.
fn auto_increment(private_data: &str) -> Option<u64> {
    let mut value = None;
    for pair in kv::pairs(private_data) {
        match pair {
            Ok((AUTO_INCREMENT_KEY, raw)) => match raw.parse() {
                Ok(parsed) => value = Some(parsed),
                Err(_) => warn!("Ignoring non-numeric {AUTO_INCREMENT_KEY} value '{raw}'"),
            },
            Ok(_) => {}
            Err(err) => warn!("Ignoring private data: {err}"),
        }
    }
    value
}
