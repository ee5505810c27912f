use crate::{
    ast::{
        column::ColumnSpec,
        index::{IndexElement, IndexKind, IndexSpec},
    },
    error::DecodeError,
};
use model::sdi::{FULL_COLUMN_LENGTH, SdiIndex, SdiIndexElement};
use tracing::debug;

/// Decodes the index array against the ordinal-ordered column list.
///
/// String-family columns carry their resolved charset, which is all that is
/// needed to turn stored byte lengths into character prefixes.
pub struct IndexSetDecoder<'a> {
    columns: &'a [ColumnSpec],
}

impl<'a> IndexSetDecoder<'a> {
    pub fn new(columns: &'a [ColumnSpec]) -> Self {
        Self { columns }
    }

    /// Returns the visible, non-empty indexes in dictionary order.
    pub fn decode(&self, indexes: &[SdiIndex]) -> Result<Vec<IndexSpec>, DecodeError> {
        let mut decoded = Vec::with_capacity(indexes.len());
        for index in indexes {
            if index.hidden {
                debug!("Skipping hidden index '{}'", index.name);
                continue;
            }

            let kind = IndexKind::from_code(index.index_type)?;
            let elements = index
                .elements
                .iter()
                .filter(|element| !element.hidden)
                .map(|element| self.decode_element(&index.name, element))
                .collect::<Result<Vec<_>, _>>()?;
            if elements.is_empty() {
                debug!("Skipping index '{}' without visible elements", index.name);
                continue;
            }

            decoded.push(IndexSpec {
                name: index.name.clone(),
                kind,
                elements,
            });
        }
        Ok(decoded)
    }

    fn decode_element(
        &self,
        index_name: &str,
        element: &SdiIndexElement,
    ) -> Result<IndexElement, DecodeError> {
        let column = self
            .columns
            .get(element.column_opx as usize)
            .ok_or_else(|| DecodeError::DanglingColumnReference {
                context: format!("Index '{index_name}'"),
                position: element.column_opx,
            })?;

        let prefix_chars = match &column.charset {
            Some(charset) if element.length != FULL_COLUMN_LENGTH => {
                Some(charset.bytes_to_chars(element.length))
            }
            _ => None,
        };

        Ok(IndexElement {
            column_ordinal: column.ordinal_position,
            column_name: column.name.clone(),
            length_bytes: element.length,
            prefix_chars,
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

    fn columns() -> Vec<ColumnSpec> {
        let catalog = catalog();
        let mut title = sdi_column("title", "varchar(100)", 3);
        title.collation_id = 33;
        ColumnDecoder::new(&catalog)
            .decode_all(&[
                sdi_column("id", "int", 1),
                sdi_column("name", "varchar(50)", 2),
                title,
            ])
            .unwrap()
    }

    fn element(column_opx: u32, length: u64) -> SdiIndexElement {
        SdiIndexElement {
            column_opx,
            length,
            hidden: false,
        }
    }

    fn index(name: &str, index_type: u32, elements: Vec<SdiIndexElement>) -> SdiIndex {
        SdiIndex {
            name: name.to_string(),
            index_type,
            hidden: false,
            elements,
        }
    }

    #[test]
    fn test_prefix_lengths_are_converted_to_chars() {
        let columns = columns();
        let decoded = IndexSetDecoder::new(&columns)
            .decode(&[index(
                "idx_name_title",
                3,
                vec![element(1, 40), element(2, 10), element(0, 4)],
            )])
            .unwrap();

        let prefixes: Vec<_> = decoded[0].elements.iter().map(|e| e.prefix_chars).collect();
        // utf8mb4: 40 / 4, utf8mb3: ceil(10 / 3), int: never
        assert_eq!(prefixes, vec![Some(10), Some(4), None]);
    }

    #[test]
    fn test_full_column_sentinel_has_no_prefix() {
        let columns = columns();
        let decoded = IndexSetDecoder::new(&columns)
            .decode(&[index("uq_name", 2, vec![element(1, FULL_COLUMN_LENGTH)])])
            .unwrap();
        assert_eq!(decoded[0].elements[0].prefix_chars, None);
        assert_eq!(decoded[0].kind, IndexKind::Unique);
    }

    #[test]
    fn test_hidden_indexes_and_elements_are_dropped() {
        let columns = columns();
        let mut hidden_index = index("hidden", 3, vec![element(0, 4)]);
        hidden_index.hidden = true;
        let mut hidden_element = element(0, FULL_COLUMN_LENGTH);
        hidden_element.hidden = true;

        let decoded = IndexSetDecoder::new(&columns)
            .decode(&[
                hidden_index,
                index("only_hidden", 3, vec![hidden_element.clone()]),
                index("empty", 3, vec![]),
                index("idx_name", 3, vec![element(1, 200), hidden_element]),
            ])
            .unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].name, "idx_name");
        assert_eq!(decoded[0].elements.len(), 1);
    }

    #[test]
    fn test_unknown_kind_and_dangling_column() {
        let columns = columns();
        let decoder = IndexSetDecoder::new(&columns);
        assert!(matches!(
            decoder.decode(&[index("x", 9, vec![element(0, 4)])]),
            Err(DecodeError::UnknownEnumCode { code: 9, .. })
        ));
        assert!(matches!(
            decoder.decode(&[index("no_elements", 9, vec![])]),
            Err(DecodeError::UnknownEnumCode { code: 9, .. })
        ));
        assert!(matches!(
            decoder.decode(&[index("x", 3, vec![element(7, 4)])]),
            Err(DecodeError::DanglingColumnReference { position: 7, .. })
        ));
    }
}
