use std::{path::PathBuf, process::ExitStatus};
use thiserror::Error;

/// Errors raised while talking to the outside world: the MySQL server,
/// the file system and the `ibd2sdi` program.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// MySQL driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// A collation row did not have the expected shape.
    #[error("Unexpected collation row: {0}")]
    CatalogRow(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `ibd2sdi` exited with a failure status.
    #[error("ibd2sdi failed on '{}' ({status}): {stderr}", path.display())]
    Extractor {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("'{}' does not describe a table", .0.display())]
    NoTableObject(PathBuf),
}

impl ConnectorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConnectorError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ConnectorError::Json {
            path: path.into(),
            source,
        }
    }
}
