use crate::{
    ast::partition::{PartitionMethod, PartitionSpec, PartitioningSpec},
    renderer::{Render, Renderer},
};

const MAXVALUE: &str = "MAXVALUE";

/// Renders the `PARTITION BY` clause; nothing at all for a table that is not
/// partitioned.
impl Render for PartitioningSpec {
    fn render(&self, r: &mut Renderer) {
        let Some(method) = self.method else {
            return;
        };

        r.sql
            .push_str(&format!("PARTITION BY {}({})", method.keyword(), self.expression));
        if !self.explicit_partitions {
            r.sql
                .push_str(&format!(" PARTITIONS {}", self.partitions.len()));
        }

        if let Some(sub_method) = self.sub_method {
            r.sql.push_str(&format!(
                "\nSUBPARTITION BY {}({})",
                sub_method.keyword(),
                self.sub_expression
            ));
            if !self.explicit_subpartitions {
                let count = self
                    .partitions
                    .first()
                    .map(|p| p.subpartitions().len())
                    .unwrap_or_default();
                r.sql.push_str(&format!(" SUBPARTITIONS {count}"));
            }
        }

        if self.explicit_partitions && !self.partitions.is_empty() {
            let entries: Vec<_> = self
                .partitions
                .iter()
                .map(|partition| PartitionEntry {
                    partition,
                    method,
                    keyword: "PARTITION",
                    sub: self.sub_method.filter(|_| self.explicit_subpartitions),
                })
                .collect();
            r.sql.push_str("\n(\n\t");
            r.push_joined(&entries, ",\n\t");
            r.sql.push_str("\n)");
        }
    }
}

/// One partition or subpartition definition inside the explicit list.
struct PartitionEntry<'a> {
    partition: &'a PartitionSpec,
    method: PartitionMethod,
    keyword: &'static str,
    /// Set when the subpartitions are listed one by one.
    sub: Option<PartitionMethod>,
}

impl Render for PartitionEntry<'_> {
    fn render(&self, r: &mut Renderer) {
        let p = self.partition;
        r.sql.push_str(self.keyword);
        r.sql.push(' ');
        r.sql.push_str(&p.name);

        match self.method {
            PartitionMethod::List | PartitionMethod::ListColumns => {
                r.sql
                    .push_str(&format!(" VALUES IN ({})", p.value_expression));
            }
            PartitionMethod::Range | PartitionMethod::RangeColumns => {
                // RANGE COLUMNS only accepts MAXVALUE inside the value list.
                if self.method == PartitionMethod::Range && p.value_expression == MAXVALUE {
                    r.sql.push_str(" VALUES LESS THAN MAXVALUE");
                } else {
                    r.sql
                        .push_str(&format!(" VALUES LESS THAN ({})", p.value_expression));
                }
            }
            PartitionMethod::Hash
            | PartitionMethod::Key
            | PartitionMethod::LinearHash
            | PartitionMethod::LinearKey => {}
        }

        if !p.comment.is_empty() {
            r.sql.push_str(" COMMENT=");
            r.push_string_literal(&p.comment);
        }

        match self.sub {
            Some(sub_method) if !p.subpartitions().is_empty() => {
                let entries: Vec<_> = p
                    .subpartitions()
                    .iter()
                    .map(|partition| PartitionEntry {
                        partition,
                        method: sub_method,
                        keyword: "SUBPARTITION",
                        sub: None,
                    })
                    .collect();
                r.sql.push_str("\n\t(\n\t\t");
                r.push_joined(&entries, ",\n\t\t");
                r.sql.push_str("\n\t)");
            }
            _ => {
                r.sql.push_str(" ENGINE=");
                r.sql.push_str(&p.engine);
            }
        }
    }
}
