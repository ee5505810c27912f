pub mod core;
pub mod sdi;
