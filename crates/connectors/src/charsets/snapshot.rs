use crate::{charsets::CharsetSource, error::ConnectorError};
use async_trait::async_trait;
use model::core::charset::CharsetCatalog;
use std::path::{Path, PathBuf};
use tracing::info;

/// A catalog previously dumped to JSON, for running without a server.
pub struct JsonCharsetSource {
    pub path: PathBuf,
}

impl JsonCharsetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CharsetSource for JsonCharsetSource {
    async fn load(&self) -> Result<CharsetCatalog, ConnectorError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConnectorError::io(&self.path, e))?;
        let catalog: CharsetCatalog =
            serde_json::from_str(&content).map_err(|e| ConnectorError::json(&self.path, e))?;
        info!("Loaded {} collations from {}", catalog.len(), self.describe());
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}

/// Writes the catalog in the format `JsonCharsetSource` reads.
pub async fn write_snapshot(catalog: &CharsetCatalog, path: &Path) -> Result<(), ConnectorError> {
    let json = serde_json::to_string_pretty(catalog).map_err(|e| ConnectorError::json(path, e))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| ConnectorError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::charset::CharsetEntry;

    #[tokio::test]
    async fn test_snapshot_can_be_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charsets.json");
        let catalog = CharsetCatalog::from_entries([
            CharsetEntry::new(8, "latin1_swedish_ci", "latin1", 1),
            CharsetEntry::new(255, "utf8mb4_0900_ai_ci", "utf8mb4", 4),
        ]);

        write_snapshot(&catalog, &path).await.unwrap();
        let loaded = JsonCharsetSource::new(&path).load().await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.lookup(255).unwrap().charset_name, "utf8mb4");
    }

    #[tokio::test]
    async fn test_missing_and_invalid_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let missing = JsonCharsetSource::new(dir.path().join("missing.json"));
        assert!(matches!(missing.load().await, Err(ConnectorError::Io { .. })));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonCharsetSource::new(&path).load().await,
            Err(ConnectorError::Json { .. })
        ));
    }
}
