use crate::{
    ast::options::TableOptions,
    renderer::{Render, Renderer},
};

/// Space-separated table options. Renders nothing when every option is
/// absent or zero.
impl Render for TableOptions {
    fn render(&self, r: &mut Renderer) {
        let mut parts = Vec::new();
        if let Some(avg) = self.avg_row_length.filter(|n| *n > 0) {
            parts.push(format!("AVG_ROW_LENGTH={avg}"));
        }
        if let Some(size) = self.key_block_size.filter(|n| *n > 0) {
            parts.push(format!("KEY_BLOCK_SIZE={size}"));
        }
        if let Some(recalc) = self.stats_auto_recalc {
            parts.push(format!("STATS_AUTO_RECALC={}", u8::from(recalc)));
        }
        if let Some(pages) = self.stats_sample_pages.filter(|n| *n > 0) {
            parts.push(format!("STATS_SAMPLE_PAGES={pages}"));
        }
        if let Some(mode) = &self.encryption {
            parts.push(format!("ENCRYPTION={}", r.dialect.quote_string(mode)));
        }
        r.sql.push_str(&parts.join(" "));
    }
}
