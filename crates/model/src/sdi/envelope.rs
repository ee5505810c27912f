use crate::sdi::document::SdiTable;
use serde_json::Value;

const TABLE_OBJECT_TYPE: &str = "Table";

/// Extracts the table `dd_object` from SDI JSON.
///
/// Two layouts exist: `ibd2sdi` prints an array (`["ibd2sdi", {"type": 1,
/// "object": {...}}, ...]`) that may also contain the tablespace object,
/// while MyISAM and ARCHIVE tables keep a standalone `.sdi` file holding a
/// single `{"dd_object_type": "Table", "dd_object": {...}}` object.
///
/// Returns `Ok(None)` when the document carries no table object.
pub fn table_from_json(json: &str) -> Result<Option<SdiTable>, serde_json::Error> {
    let root: Value = serde_json::from_str(json)?;

    let object = match &root {
        Value::Array(cells) => cells
            .iter()
            .filter_map(|cell| cell.get("object"))
            .find(|object| is_table(object)),
        Value::Object(_) if is_table(&root) => Some(&root),
        _ => None,
    };

    object
        .and_then(|object| object.get("dd_object"))
        .map(|dd_object| serde_json::from_value::<SdiTable>(dd_object.clone()))
        .transpose()
}

fn is_table(object: &Value) -> bool {
    match object.get("dd_object_type") {
        Some(kind) => kind.as_str() == Some(TABLE_OBJECT_TYPE),
        // Older standalone files omit the type and only describe a table.
        None => object.get("dd_object").is_some(),
    }
}
