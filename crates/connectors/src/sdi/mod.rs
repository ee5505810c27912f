//! Locating, extracting and reading serialized dictionary documents.

pub mod discover;
pub mod extract;
pub mod reader;

pub use discover::FOREIGN_KEYS_FILE;
pub use extract::{ExtractSummary, Ibd2Sdi, SdiExtractor};
pub use reader::{SdiDocument, read_documents, read_table};
