//! Immutable definition tree produced by the decoders.

pub mod column;
pub mod foreign_key;
pub mod index;
pub mod options;
pub mod partition;
pub mod table;
