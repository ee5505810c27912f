//! Decoders turning raw SDI structures into the definition tree.

pub mod column;
pub mod foreign_key;
pub mod index;
pub mod options;
pub mod partition;
pub mod table;
