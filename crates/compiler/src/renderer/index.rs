use crate::{
    ast::index::{IndexElement, IndexKind, IndexSpec},
    renderer::{Render, Renderer},
};

impl Render for IndexSpec {
    fn render(&self, r: &mut Renderer) {
        let keyword = match self.kind {
            IndexKind::Primary => "PRIMARY KEY",
            IndexKind::Unique => "UNIQUE INDEX",
            IndexKind::Multiple => "INDEX",
            IndexKind::FullText => "FULLTEXT",
            IndexKind::Spatial => "SPATIAL INDEX",
        };
        r.sql.push_str(keyword);
        if self.kind != IndexKind::Primary {
            r.sql.push(' ');
            r.push_identifier(&self.name);
        }
        r.sql.push_str(" (");
        r.push_joined(&self.elements, ", ");
        r.sql.push(')');
    }
}

impl Render for IndexElement {
    fn render(&self, r: &mut Renderer) {
        r.push_identifier(&self.column_name);
        if let Some(prefix) = self.prefix_chars {
            r.sql.push_str(&format!("({prefix})"));
        }
    }
}
