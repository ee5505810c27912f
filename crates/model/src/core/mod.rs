pub mod charset;
pub mod data_type;
