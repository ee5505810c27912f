use crate::{
    error::ConnectorError,
    sdi::discover::{database_dirs, database_name, files_with_extension},
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, error, info};

/// `ibd2sdi --type` value selecting table objects.
const SDI_TYPE_TABLE: u32 = 1;

/// What `ibd2sdi` prints for a tablespace without any matching object.
const EMPTY_EXTRACT_MARKER: &str = "ibd2sdi";

lazy_static! {
    /// Auxiliary tablespaces of FULLTEXT indexes. They hold no table
    /// definition of their own.
    static ref FULLTEXT_AUX_FILE: Regex = Regex::new(
        r"^fts_[a-f0-9]{16}_([a-f0-9]{16}_index_\d+|being_deleted|being_deleted_cache|config|deleted|deleted_cache)\.ibd$"
    )
    .expect("valid full-text file pattern");
}

pub fn is_fulltext_aux_file(file_name: &str) -> bool {
    FULLTEXT_AUX_FILE.is_match(file_name)
}

/// Strips the `#p#<partition>` suffix that partitioned tables carry in
/// their file names.
pub fn table_name_from_file(stem: &str) -> &str {
    match stem.to_ascii_lowercase().find("#p#") {
        Some(pos) => &stem[..pos],
        None => stem,
    }
}

/// Wrapper around the `ibd2sdi` program shipped with MySQL.
#[derive(Debug, Clone)]
pub struct Ibd2Sdi {
    executable: PathBuf,
}

impl Ibd2Sdi {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Extracts the table SDI of one tablespace file. `Ok(None)` means the
    /// file holds no table object.
    pub async fn table_sdi(&self, ibd: &Path) -> Result<Option<String>, ConnectorError> {
        let output = Command::new(&self.executable)
            .arg(format!("--type={SDI_TYPE_TABLE}"))
            .arg(ibd)
            .output()
            .await
            .map_err(|e| ConnectorError::io(&self.executable, e))?;

        if !output.status.success() {
            return Err(ConnectorError::Extractor {
                path: ibd.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let document: Value =
            serde_json::from_str(&stdout).map_err(|e| ConnectorError::json(ibd, e))?;
        if is_empty_extract(&document) {
            return Ok(None);
        }
        Ok(Some(stdout))
    }
}

fn is_empty_extract(document: &Value) -> bool {
    matches!(document.as_array(), Some(items) if items.len() == 1 && items[0] == EMPTY_EXTRACT_MARKER)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    /// `.sdi` files copied as they are.
    pub copied: usize,
    /// `.ibd` files turned into `.sdi` files.
    pub extracted: usize,
    /// `.ibd` files without a table object.
    pub empty: usize,
    pub failed: usize,
}

/// Produces one dictionary document per table under
/// `<output_dir>/<database>/`.
pub struct SdiExtractor {
    pub ibd2sdi: Ibd2Sdi,
    pub backup_dir: PathBuf,
    pub output_dir: PathBuf,
    pub databases: Vec<String>,
}

impl SdiExtractor {
    pub async fn run(&self) -> Result<ExtractSummary, ConnectorError> {
        let dirs = database_dirs(&self.backup_dir, &self.databases).await?;
        let mut summary = ExtractSummary::default();

        info!("Copying existing SDI files to the output directory");
        for dir in &dirs {
            let out_dir = self.database_output_dir(dir).await?;
            for file in files_with_extension(dir, "sdi").await? {
                let Some(file_name) = file.file_name() else {
                    continue;
                };
                let target = out_dir.join(file_name);
                tokio::fs::copy(&file, &target)
                    .await
                    .map_err(|e| ConnectorError::io(&target, e))?;
                debug!("Copied '{}'", file.display());
                summary.copied += 1;
            }
        }

        info!("Starting SDI files creation");
        for dir in &dirs {
            let database = database_name(dir);
            info!("Processing database: {database}");
            let out_dir = self.database_output_dir(dir).await?;

            for ibd in files_with_extension(dir, "ibd").await? {
                let file_name = ibd
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if is_fulltext_aux_file(&file_name) {
                    debug!("Skipping full-text auxiliary file '{file_name}'");
                    continue;
                }

                match self.ibd2sdi.table_sdi(&ibd).await {
                    Ok(Some(json)) => {
                        let stem = ibd
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        let table = table_name_from_file(&stem);
                        let target = out_dir.join(format!("{table}.sdi"));
                        info!("Creating SDI file for database '{database}', table '{table}'");
                        tokio::fs::write(&target, json)
                            .await
                            .map_err(|e| ConnectorError::io(&target, e))?;
                        summary.extracted += 1;
                    }
                    Ok(None) => {
                        debug!("No table object in '{}'", ibd.display());
                        summary.empty += 1;
                    }
                    Err(e) => {
                        error!("Failed to extract SDI from '{}': {e}", ibd.display());
                        summary.failed += 1;
                    }
                }
            }
        }

        Ok(summary)
    }

    async fn database_output_dir(&self, database_dir: &Path) -> Result<PathBuf, ConnectorError> {
        let out_dir = self.output_dir.join(database_name(database_dir));
        tokio::fs::create_dir_all(&out_dir)
            .await
            .map_err(|e| ConnectorError::io(&out_dir, e))?;
        Ok(out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fulltext_aux_files() {
        assert!(is_fulltext_aux_file("fts_0000000000000437_config.ibd"));
        assert!(is_fulltext_aux_file(
            "fts_0000000000000437_00000000000004d2_index_3.ibd"
        ));
        assert!(is_fulltext_aux_file("fts_0000000000000437_being_deleted_cache.ibd"));
        assert!(!is_fulltext_aux_file("fts_notes.ibd"));
        assert!(!is_fulltext_aux_file("orders.ibd"));
    }

    #[test]
    fn test_table_name_from_file() {
        assert_eq!(table_name_from_file("orders"), "orders");
        assert_eq!(table_name_from_file("metrics#p#p2023"), "metrics");
        assert_eq!(table_name_from_file("metrics#P#p2023#SP#p2023sp0"), "metrics");
    }

    #[test]
    fn test_empty_extract() {
        assert!(is_empty_extract(&serde_json::json!(["ibd2sdi"])));
        assert!(!is_empty_extract(&serde_json::json!(["ibd2sdi", {"type": 1}])));
        assert!(!is_empty_extract(&serde_json::json!({"dd_object_type": "Table"})));
    }

    #[cfg(unix)]
    fn fake_ibd2sdi(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        // Prints the file content, or fails for files named broken*.
        let script = dir.join("ibd2sdi");
        fs::write(
            &script,
            "#!/bin/sh\ncase \"$2\" in\n  *broken*) echo 'corrupt page' >&2; exit 1;;\nesac\ncat \"$2\"\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_extract_backup_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let backup = tmp.path().join("backup");
        let output = tmp.path().join("out");
        let shop = backup.join("shop");
        fs::create_dir_all(&shop).unwrap();

        fs::write(shop.join("orders.ibd"), r#"["ibd2sdi", {"type": 1}]"#).unwrap();
        fs::write(shop.join("metrics#p#p0.ibd"), r#"["ibd2sdi", {"type": 1}]"#).unwrap();
        fs::write(shop.join("empty.ibd"), r#"["ibd2sdi"]"#).unwrap();
        fs::write(shop.join("broken.ibd"), "").unwrap();
        fs::write(shop.join("fts_0000000000000437_config.ibd"), "").unwrap();
        fs::write(shop.join("events_381.sdi"), "{}").unwrap();

        let extractor = SdiExtractor {
            ibd2sdi: Ibd2Sdi::new(fake_ibd2sdi(tmp.path())),
            backup_dir: backup,
            output_dir: output.clone(),
            databases: Vec::new(),
        };
        let summary = extractor.run().await.unwrap();

        assert_eq!(
            summary,
            ExtractSummary {
                copied: 1,
                extracted: 2,
                empty: 1,
                failed: 1,
            }
        );
        assert!(output.join("shop/orders.sdi").is_file());
        assert!(output.join("shop/metrics.sdi").is_file());
        assert!(output.join("shop/events_381.sdi").is_file());
        assert!(!output.join("shop/empty.sdi").exists());
    }
}
