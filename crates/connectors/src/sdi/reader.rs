use crate::{
    error::ConnectorError,
    sdi::discover::{database_dirs, database_name, files_with_extension},
};
use model::sdi::{SdiTable, table_from_json};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Raw dictionary document found in an output folder.
#[derive(Debug, Clone)]
pub struct SdiDocument {
    /// Name of the folder the document was found in.
    pub database: String,
    pub path: PathBuf,
    pub json: String,
}

/// Reads every `.sdi` document under `<dir>/<database>/`, database folders
/// in name order and files in path order.
pub async fn read_documents(dir: &Path, databases: &[String]) -> Result<Vec<SdiDocument>, ConnectorError> {
    let mut documents = Vec::new();

    for db_dir in database_dirs(dir, databases).await? {
        let database = database_name(&db_dir);
        let files = files_with_extension(&db_dir, "sdi").await?;
        info!("Found {} SDI file(s) for database '{database}'", files.len());

        for path in files {
            let json = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| ConnectorError::io(&path, e))?;
            debug!("Read '{}' ({} bytes)", path.display(), json.len());
            documents.push(SdiDocument {
                database: database.clone(),
                path,
                json,
            });
        }
    }

    Ok(documents)
}

/// Reads and parses the table described by a single document.
pub async fn read_table(path: &Path) -> Result<SdiTable, ConnectorError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConnectorError::io(path, e))?;
    table_from_json(&json)
        .map_err(|e| ConnectorError::json(path, e))?
        .ok_or_else(|| ConnectorError::NoTableObject(path.to_path_buf()))
}
