use serde::Serialize;

/// Table-level options carried by the dictionary's `options` string.
/// Absent values are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableOptions {
    pub avg_row_length: Option<u64>,
    pub key_block_size: Option<u64>,
    /// `None` means the server default.
    pub stats_auto_recalc: Option<bool>,
    pub stats_sample_pages: Option<u64>,
    pub encryption: Option<String>,
}
