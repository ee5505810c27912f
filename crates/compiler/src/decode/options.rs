use crate::ast::options::TableOptions;
use model::sdi::kv;
use std::str::FromStr;
use tracing::warn;

pub struct TableOptionsDecoder;

impl TableOptionsDecoder {
    /// Decodes the table `options` string.
    ///
    /// Unknown keys are ignored. A malformed pair or an unparsable value is
    /// logged and skipped without failing the table.
    pub fn decode(options: &str) -> TableOptions {
        let mut decoded = TableOptions::default();
        for pair in kv::pairs(options) {
            let (key, value) = match pair {
                Ok(pair) => pair,
                Err(err) => {
                    warn!("Ignoring table option: {err}");
                    continue;
                }
            };
            match key {
                "avg_row_length" => decoded.avg_row_length = parse_number(key, value),
                "key_block_size" => decoded.key_block_size = parse_number(key, value),
                "stats_sample_pages" => decoded.stats_sample_pages = parse_number(key, value),
                "stats_auto_recalc" => decoded.stats_auto_recalc = parse_auto_recalc(value),
                "encrypt_type" => decoded.encryption = Some(value.to_string()),
                _ => {}
            }
        }
        decoded
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!("Ignoring table option {key}: '{value}' is not a number");
            None
        }
    }
}

/// The dictionary stores 0 for the server default, 1 for ON and 2 for OFF.
fn parse_auto_recalc(value: &str) -> Option<bool> {
    match value {
        "0" => None,
        "1" => Some(true),
        "2" => Some(false),
        other => {
            warn!("Ignoring table option stats_auto_recalc: unexpected value '{other}'");
            None
        }
    }
}
