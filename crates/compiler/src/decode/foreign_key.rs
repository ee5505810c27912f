use crate::{
    ast::{
        column::ColumnSpec,
        foreign_key::{ForeignKeyConstraint, ReferentialAction},
    },
    error::DecodeError,
};
use model::sdi::SdiForeignKey;

pub struct ForeignKeyDecoder<'a> {
    /// Database of the table being decoded.
    schema: &'a str,
    columns: &'a [ColumnSpec],
}

impl<'a> ForeignKeyDecoder<'a> {
    pub fn new(schema: &'a str, columns: &'a [ColumnSpec]) -> Self {
        Self { schema, columns }
    }

    pub fn decode(
        &self,
        foreign_keys: &[SdiForeignKey],
    ) -> Result<Vec<ForeignKeyConstraint>, DecodeError> {
        foreign_keys.iter().map(|fk| self.decode_one(fk)).collect()
    }

    fn decode_one(&self, fk: &SdiForeignKey) -> Result<ForeignKeyConstraint, DecodeError> {
        let mut local_columns = Vec::with_capacity(fk.elements.len());
        let mut referenced_columns = Vec::with_capacity(fk.elements.len());
        for element in &fk.elements {
            let column = self
                .columns
                .get(element.column_opx as usize)
                .ok_or_else(|| DecodeError::DanglingColumnReference {
                    context: format!("Foreign key '{}'", fk.name),
                    position: element.column_opx,
                })?;
            local_columns.push(column.name.clone());
            referenced_columns.push(element.referenced_column_name.clone());
        }

        let referenced_schema = Some(fk.referenced_table_schema_name.as_str())
            .filter(|schema| !schema.is_empty() && *schema != self.schema)
            .map(str::to_string);

        Ok(ForeignKeyConstraint {
            name: fk.name.clone(),
            local_columns,
            referenced_schema,
            referenced_table: fk.referenced_table_name.clone(),
            referenced_columns,
            on_delete: ReferentialAction::from_code(fk.delete_rule)?,
            on_update: ReferentialAction::from_code(fk.update_rule)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::column::{
        ColumnDecoder,
        tests::{catalog, sdi_column},
    };
    use model::sdi::SdiForeignKeyElement;

    fn columns() -> Vec<ColumnSpec> {
        let catalog = catalog();
        ColumnDecoder::new(&catalog)
            .decode_all(&[
                sdi_column("id", "int", 1),
                sdi_column("customer_id", "int", 2),
                sdi_column("shop_id", "int", 3),
            ])
            .unwrap()
    }

    fn sdi_fk(delete_rule: u32, update_rule: u32) -> SdiForeignKey {
        SdiForeignKey {
            name: "fk_customer".into(),
            referenced_table_name: "customers".into(),
            referenced_table_schema_name: "shop".into(),
            delete_rule,
            update_rule,
            elements: vec![
                SdiForeignKeyElement {
                    column_opx: 1,
                    referenced_column_name: "id".into(),
                },
                SdiForeignKeyElement {
                    column_opx: 2,
                    referenced_column_name: "shop_id".into(),
                },
            ],
        }
    }

    #[test]
    fn test_decode_resolves_local_columns() {
        let columns = columns();
        let decoded = ForeignKeyDecoder::new("shop", &columns)
            .decode(&[sdi_fk(3, 1)])
            .unwrap();

        let fk = &decoded[0];
        assert_eq!(fk.local_columns, vec!["customer_id", "shop_id"]);
        assert_eq!(fk.referenced_columns, vec!["id", "shop_id"]);
        assert_eq!(fk.referenced_schema, None);
        assert_eq!(fk.on_delete, ReferentialAction::Cascade);
        assert_eq!(fk.on_update, ReferentialAction::NoAction);
    }

    #[test]
    fn test_cross_schema_reference_keeps_schema() {
        let columns = columns();
        let mut fk = sdi_fk(1, 1);
        fk.referenced_table_schema_name = "crm".into();
        let decoded = ForeignKeyDecoder::new("shop", &columns).decode(&[fk]).unwrap();
        assert_eq!(decoded[0].referenced_schema.as_deref(), Some("crm"));
    }

    #[test]
    fn test_action_codes() {
        let expected = [
            (1, "NO ACTION"),
            (2, "RESTRICT"),
            (3, "CASCADE"),
            (4, "SET NULL"),
            (5, "SET DEFAULT"),
        ];
        for (code, keyword) in expected {
            assert_eq!(ReferentialAction::from_code(code).unwrap().keyword(), keyword);
        }

        let columns = columns();
        let decoder = ForeignKeyDecoder::new("shop", &columns);
        for code in [0, 6] {
            assert!(matches!(
                decoder.decode(&[sdi_fk(code, 1)]),
                Err(DecodeError::UnknownEnumCode { .. })
            ));
            assert!(matches!(
                decoder.decode(&[sdi_fk(1, code)]),
                Err(DecodeError::UnknownEnumCode { .. })
            ));
        }
    }

    #[test]
    fn test_dangling_column() {
        let columns = columns();
        let mut fk = sdi_fk(1, 1);
        fk.elements[0].column_opx = 10;
        assert!(matches!(
            ForeignKeyDecoder::new("shop", &columns).decode(&[fk]),
            Err(DecodeError::DanglingColumnReference { position: 10, .. })
        ));
    }
}
