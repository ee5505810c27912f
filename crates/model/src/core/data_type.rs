use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base type of a column, derived from the raw `column_type_utf8` string of
/// the dictionary (e.g. `varchar(50)`, `int unsigned`, `enum('a','b')`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Bit,
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,
    Char,
    VarChar,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,
    Enum,
    Set,
    Json,
    Geometry(String),
    Custom(String),
}

lazy_static! {
    static ref MYSQL_TYPE_MAP: HashMap<&'static str, DataType> = build_mysql_type_map();
}

impl DataType {
    /// Resolves the base type of a raw column type string.
    ///
    /// The base type is the lowercased prefix up to the first `(` or space,
    /// so `VARCHAR(50)`, `int unsigned` and `datetime(6)` resolve to
    /// `VarChar`, `Int` and `DateTime`. Unknown names are kept as `Custom`.
    pub fn from_column_type(column_type: &str) -> Self {
        let base = Self::base_name(column_type);
        MYSQL_TYPE_MAP
            .get(base.as_str())
            .cloned()
            .unwrap_or(DataType::Custom(base))
    }

    pub fn base_name(column_type: &str) -> String {
        column_type
            .trim()
            .split(['(', ' '])
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Character, binary-string and text/blob types. Only these receive
    /// `CHARACTER SET`/`COLLATE` clauses and prefix lengths in indexes.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            DataType::Char
                | DataType::VarChar
                | DataType::VarBinary
                | DataType::TinyBlob
                | DataType::TinyText
                | DataType::Blob
                | DataType::Text
                | DataType::MediumBlob
                | DataType::MediumText
                | DataType::LongBlob
                | DataType::LongText
        )
    }

    /// Types whose default value is emitted as a bare literal instead of a
    /// quoted string (`b'101'`, `0x1F`, `CURRENT_TIMESTAMP`).
    pub fn has_unquoted_default(&self) -> bool {
        matches!(self, DataType::Binary | DataType::Bit | DataType::Timestamp)
    }
}

fn build_mysql_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("tinyint", TinyInt),
        ("bool", TinyInt),
        ("boolean", TinyInt),
        ("smallint", SmallInt),
        ("mediumint", MediumInt),
        ("int", Int),
        ("integer", Int),
        ("bigint", BigInt),
        ("decimal", Decimal),
        ("numeric", Decimal),
        ("float", Float),
        ("double", Double),
        ("real", Double),
        ("bit", Bit),
        ("date", Date),
        ("datetime", DateTime),
        ("timestamp", Timestamp),
        ("time", Time),
        ("year", Year),
        ("char", Char),
        ("varchar", VarChar),
        ("binary", Binary),
        ("varbinary", VarBinary),
        ("tinyblob", TinyBlob),
        ("blob", Blob),
        ("mediumblob", MediumBlob),
        ("longblob", LongBlob),
        ("tinytext", TinyText),
        ("text", Text),
        ("mediumtext", MediumText),
        ("longtext", LongText),
        ("enum", Enum),
        ("set", Set),
        ("json", Json),
    ];

    let mut map: HashMap<&'static str, DataType> = entries.into_iter().collect();
    for name in [
        "geometry",
        "point",
        "linestring",
        "polygon",
        "multipoint",
        "multilinestring",
        "multipolygon",
        "geomcollection",
        "geometrycollection",
    ] {
        map.insert(name, Geometry(name.to_string()));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_type_strips_length_and_modifiers() {
        assert_eq!(DataType::from_column_type("varchar(50)"), DataType::VarChar);
        assert_eq!(DataType::from_column_type("int unsigned"), DataType::Int);
        assert_eq!(DataType::from_column_type("DATETIME(6)"), DataType::DateTime);
        assert_eq!(
            DataType::from_column_type("enum('a','b')"),
            DataType::Enum
        );
        assert_eq!(
            DataType::from_column_type("point"),
            DataType::Geometry("point".into())
        );
    }

    #[test]
    fn test_unknown_type_is_custom() {
        assert_eq!(
            DataType::from_column_type("vector(3)"),
            DataType::Custom("vector".into())
        );
    }

    #[test]
    fn test_string_family() {
        for raw in ["char(2)", "varchar(10)", "varbinary(4)", "text", "longblob"] {
            assert!(DataType::from_column_type(raw).is_string(), "{raw}");
        }
        for raw in ["binary(16)", "enum('x')", "int", "json", "date"] {
            assert!(!DataType::from_column_type(raw).is_string(), "{raw}");
        }
    }

    #[test]
    fn test_unquoted_default_types() {
        assert!(DataType::Binary.has_unquoted_default());
        assert!(DataType::Bit.has_unquoted_default());
        assert!(DataType::Timestamp.has_unquoted_default());
        assert!(!DataType::DateTime.has_unquoted_default());
        assert!(!DataType::VarChar.has_unquoted_default());
    }
}
