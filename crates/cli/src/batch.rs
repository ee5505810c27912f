use crate::error::CliError;
use compiler::{CompiledTable, TableCompiler};
use connectors::sdi::SdiDocument;
use futures_util::{StreamExt, stream};
use model::core::charset::CharsetCatalog;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Sorted by schema, then table name.
    pub tables: Vec<CompiledTable>,
    pub skipped: usize,
    pub failed: usize,
}

/// Compiles every document on the blocking pool, at most `jobs` at a time.
///
/// A document that fails is logged and counted; it never stops the others.
pub async fn compile_documents(
    documents: Vec<SdiDocument>,
    catalog: Arc<CharsetCatalog>,
    jobs: usize,
) -> Result<BatchOutcome, CliError> {
    info!("Compiling {} document(s) with {} job(s)", documents.len(), jobs);

    let results = stream::iter(documents.into_iter().map(|document| {
        let catalog = Arc::clone(&catalog);
        tokio::task::spawn_blocking(move || {
            let result = TableCompiler::new(&catalog).compile_json(&document.json);
            (document, result)
        })
    }))
    .buffer_unordered(jobs.max(1))
    .collect::<Vec<_>>()
    .await;

    let mut outcome = BatchOutcome::default();
    for joined in results {
        let (document, result) = joined?;
        match result {
            Ok(Some(table)) => outcome.tables.push(table),
            Ok(None) => {
                warn!(
                    "Skipping '{}': no table object in the document",
                    document.path.display()
                );
                outcome.skipped += 1;
            }
            Err(e) => {
                let table = document
                    .path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                error!(
                    "Failed to compile table '{}' of database '{}': {}",
                    table, document.database, e
                );
                outcome.failed += 1;
            }
        }
    }

    outcome
        .tables
        .sort_by(|a, b| (&a.schema, &a.name).cmp(&(&b.schema, &b.name)));
    Ok(outcome)
}
