//! Everything outside the compiler: where collations come from, where
//! dictionary documents are found and how they are extracted from
//! tablespace files.

pub mod charsets;
pub mod error;
pub mod sdi;
