use compiler::DecodeError;
use connectors::error::ConnectorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error("Failed to decode the table: {0}")]
    Decode(#[from] DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("A compile task stopped unexpectedly: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Returned once the batch is over; every healthy table has been written.
    #[error("{0} table(s) could not be compiled, see the log for details")]
    CompileFailures(usize),
}
