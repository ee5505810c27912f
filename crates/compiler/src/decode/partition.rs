use crate::{
    ast::partition::{EXPLICIT_DEFINITION, PartitionMethod, PartitionSpec, PartitioningSpec},
    error::DecodeError,
};
use model::sdi::{SdiPartition, SdiTable};
use tracing::debug;

pub struct PartitioningDecoder;

impl PartitioningDecoder {
    pub fn decode(table: &SdiTable) -> Result<PartitioningSpec, DecodeError> {
        let method = PartitionMethod::from_code(table.partition_type)?;
        let sub_method = PartitionMethod::sub_from_code(table.subpartition_type)?;

        let Some(method) = method else {
            if sub_method.is_some() {
                return Err(DecodeError::InconsistentPartitioning(
                    "subpartition method set without a partition method".into(),
                ));
            }
            return Ok(PartitioningSpec::none());
        };

        if table.partitions.is_empty() {
            return Err(DecodeError::InconsistentPartitioning(format!(
                "{} partitioning without any partition",
                method.keyword()
            )));
        }

        let explicit_partitions = table.default_partitioning == EXPLICIT_DEFINITION;
        let explicit_subpartitions = table.default_subpartitioning == EXPLICIT_DEFINITION;

        let partitions = table
            .partitions
            .iter()
            .map(Self::decode_partition)
            .collect::<Result<Vec<_>, _>>()?;

        match sub_method {
            Some(_) => Self::check_subpartition_counts(&partitions, explicit_subpartitions)?,
            None => {
                if let Some(p) = partitions.iter().find(|p| !p.subpartitions().is_empty()) {
                    return Err(DecodeError::InconsistentPartitioning(format!(
                        "partition '{}' has subpartitions but no subpartition method is set",
                        p.name
                    )));
                }
            }
        }

        debug!(
            "Decoded {} partitioning with {} partition(s)",
            method.keyword(),
            partitions.len()
        );

        Ok(PartitioningSpec {
            method: Some(method),
            expression: table.partition_expression_utf8.clone(),
            explicit_partitions,
            sub_method,
            sub_expression: table.subpartition_expression_utf8.clone(),
            explicit_subpartitions,
            partitions,
        })
    }

    fn decode_partition(raw: &SdiPartition) -> Result<PartitionSpec, DecodeError> {
        let subpartitions = raw
            .subpartitions
            .iter()
            .map(Self::decode_partition)
            .collect::<Result<Vec<_>, _>>()?;

        PartitionSpec::leaf(
            &raw.name,
            &raw.description_utf8,
            &raw.engine,
            &raw.comment,
        )
        .with_subpartitions(subpartitions)
    }

    /// `SUBPARTITIONS <n>` is taken from the first partition, so with
    /// count-only subpartitioning every partition must agree on it.
    fn check_subpartition_counts(
        partitions: &[PartitionSpec],
        explicit: bool,
    ) -> Result<(), DecodeError> {
        if explicit {
            return Ok(());
        }
        let expected = partitions
            .first()
            .map(|p| p.subpartitions().len())
            .unwrap_or_default();
        if expected == 0 {
            return Err(DecodeError::InconsistentPartitioning(
                "subpartition method set but no subpartition found".into(),
            ));
        }
        match partitions
            .iter()
            .find(|p| p.subpartitions().len() != expected)
        {
            Some(p) => Err(DecodeError::InconsistentPartitioning(format!(
                "partition '{}' has {} subpartition(s), expected {expected}",
                p.name,
                p.subpartitions().len()
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sdi_partition(name: &str, description: &str) -> SdiPartition {
        SdiPartition {
            name: name.to_string(),
            description_utf8: description.to_string(),
            engine: "InnoDB".to_string(),
            comment: String::new(),
            subpartitions: Vec::new(),
        }
    }

    pub(crate) fn sdi_table() -> SdiTable {
        SdiTable {
            name: "t".into(),
            schema_ref: "shop".into(),
            engine: "InnoDB".into(),
            collation_id: 45,
            row_format: 2,
            options: String::new(),
            se_private_data: String::new(),
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            partition_type: 0,
            partition_expression_utf8: String::new(),
            default_partitioning: 0,
            subpartition_type: 0,
            subpartition_expression_utf8: String::new(),
            default_subpartitioning: 0,
            partitions: Vec::new(),
        }
    }

    #[test]
    fn test_not_partitioned() {
        let spec = PartitioningDecoder::decode(&sdi_table()).unwrap();
        assert!(!spec.is_partitioned());
    }

    #[test]
    fn test_subpartition_without_partition_method() {
        let mut table = sdi_table();
        table.subpartition_type = 1;
        assert!(matches!(
            PartitioningDecoder::decode(&table),
            Err(DecodeError::InconsistentPartitioning(_))
        ));
    }

    #[test]
    fn test_explicit_range() {
        let mut table = sdi_table();
        table.partition_type = 7;
        table.partition_expression_utf8 = "`id`".into();
        table.default_partitioning = 1;
        table.partitions = vec![sdi_partition("p0", "100"), sdi_partition("p1", "MAXVALUE")];

        let spec = PartitioningDecoder::decode(&table).unwrap();
        assert_eq!(spec.method, Some(PartitionMethod::Range));
        assert!(spec.explicit_partitions);
        assert_eq!(spec.partitions.len(), 2);
        assert_eq!(spec.partitions[1].value_expression, "MAXVALUE");
    }

    #[test]
    fn test_partitioned_without_partitions() {
        let mut table = sdi_table();
        table.partition_type = 1;
        table.default_partitioning = 3;
        assert!(matches!(
            PartitioningDecoder::decode(&table),
            Err(DecodeError::InconsistentPartitioning(_))
        ));
    }

    #[test]
    fn test_implicit_subpartition_counts_must_agree() {
        let mut table = sdi_table();
        table.partition_type = 7;
        table.default_partitioning = 1;
        table.subpartition_type = 1;
        table.default_subpartitioning = 3;

        let mut p0 = sdi_partition("p0", "10");
        p0.subpartitions = vec![sdi_partition("p0sp0", ""), sdi_partition("p0sp1", "")];
        let mut p1 = sdi_partition("p1", "20");
        p1.subpartitions = vec![sdi_partition("p1sp0", "")];
        table.partitions = vec![p0.clone(), p1];
        assert!(matches!(
            PartitioningDecoder::decode(&table),
            Err(DecodeError::InconsistentPartitioning(_))
        ));

        let mut p1 = sdi_partition("p1", "20");
        p1.subpartitions = vec![sdi_partition("p1sp0", ""), sdi_partition("p1sp1", "")];
        table.partitions = vec![p0, p1];
        let spec = PartitioningDecoder::decode(&table).unwrap();
        assert_eq!(spec.sub_method, Some(PartitionMethod::Hash));
        assert!(!spec.explicit_subpartitions);
    }

    #[test]
    fn test_subpartitions_without_sub_method() {
        let mut table = sdi_table();
        table.partition_type = 8;
        table.default_partitioning = 1;
        let mut p0 = sdi_partition("p0", "1,2");
        p0.subpartitions = vec![sdi_partition("s0", "")];
        table.partitions = vec![p0];
        assert!(matches!(
            PartitioningDecoder::decode(&table),
            Err(DecodeError::InconsistentPartitioning(_))
        ));
    }
}
