//! Serde model of the serialized dictionary information (SDI) that MySQL 8
//! stores inside every tablespace and that `ibd2sdi` prints as JSON.

pub mod document;
pub mod envelope;
pub mod kv;

pub use document::*;
pub use envelope::table_from_json;
