//! Decodes MySQL serialized dictionary information (SDI) into a typed table
//! definition and compiles it into the DDL that recreates the table.

pub mod ast;
pub mod decode;
pub mod dialect;
pub mod error;
pub mod renderer;

pub use decode::table::{CompiledTable, TableCompiler};
pub use error::DecodeError;
