use crate::error::ConnectorError;
use async_trait::async_trait;
use model::core::charset::CharsetCatalog;

pub mod mysql;
pub mod snapshot;

pub use mysql::MySqlCharsetSource;
pub use snapshot::JsonCharsetSource;

/// Anything that can produce the collation catalog.
#[async_trait]
pub trait CharsetSource: Send + Sync {
    async fn load(&self) -> Result<CharsetCatalog, ConnectorError>;

    /// Human readable origin, for logs.
    fn describe(&self) -> String;
}
