//! Flat tabular record sets built from JSON payloads

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A flat record set: ordered columns and rows in server-returned order.
///
/// Each row is a vector of cells aligned with [`Table::columns`]; a record
/// that lacks a column holds [`Value::Null`] there. The column set is the
/// union of the flattened keys of every record, in first-seen order. No
/// schema invariant is enforced beyond that: the upstream service dictates
/// the keys and may change them without notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from a slice of JSON records, one row per record.
    ///
    /// Each record is flattened one level deep: fields of a directly nested
    /// object become dotted columns (`pattern_author.name`), while arrays and
    /// anything nested deeper survive as raw JSON values.
    pub fn from_records(records: &[Value]) -> Table {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut flattened: Vec<Vec<(String, Value)>> = Vec::with_capacity(records.len());

        for record in records {
            let cells = flatten(record);
            for (name, _) in &cells {
                if !index.contains_key(name) {
                    index.insert(name.clone(), columns.len());
                    columns.push(name.clone());
                }
            }
            flattened.push(cells);
        }

        let rows = flattened
            .into_iter()
            .map(|cells| {
                let mut row = vec![Value::Null; columns.len()];
                for (name, value) in cells {
                    if let Some(&at) = index.get(&name) {
                        row[at] = value;
                    }
                }
                row
            })
            .collect();

        Table { columns, rows }
    }

    /// Build a one-row table from a single JSON record.
    ///
    /// Used by the detail endpoints, whose payload is one object rather than
    /// an array.
    pub fn from_record(record: &Value) -> Table {
        Table::from_records(std::slice::from_ref(record))
    }

    /// Column names, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in server-returned order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` under `column`, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let at = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|r| &r[at])
    }
}

/// Flatten one JSON record into named cells.
///
/// One level only: `{"a": {"b": 1}}` yields a cell named `a.b`, while
/// `{"a": {"b": {"c": 1}}}` yields `a.b` holding the raw `{"c": 1}` value.
/// A non-object record becomes a single `value` cell.
fn flatten(record: &Value) -> Vec<(String, Value)> {
    match record {
        Value::Object(fields) => {
            let mut cells = Vec::with_capacity(fields.len());
            for (name, value) in fields {
                match value {
                    Value::Object(nested) => {
                        for (inner, cell) in nested {
                            cells.push((format!("{name}.{inner}"), cell.clone()));
                        }
                    }
                    other => cells.push((name.clone(), other.clone())),
                }
            }
            cells
        }
        other => vec![("value".to_string(), other.clone())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_records_one_row_per_element() {
        // Arrange: two flat records sharing a key set
        let records = vec![
            json!({"id": 1, "name": "Thick and Quick"}),
            json!({"id": 2, "name": "Cascade 220"}),
        ];

        // Act
        let table = Table::from_records(&records);

        // Assert: columns match the element keys, rows keep server order
        assert_eq!(table.columns(), ["id".to_string(), "name".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, "name"), Some(&json!("Thick and Quick")));
        assert_eq!(table.get(1, "id"), Some(&json!(2)));
    }

    #[test]
    fn test_from_records_empty_array_has_zero_rows() {
        let table = Table::from_records(&[]);

        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_from_records_flattens_one_level_with_dotted_names() {
        let records = vec![json!({
            "id": 7,
            "pattern_author": {"name": "Jane", "patterns_count": 12}
        })];

        let table = Table::from_records(&records);

        assert_eq!(
            table.columns(),
            [
                "id".to_string(),
                "pattern_author.name".to_string(),
                "pattern_author.patterns_count".to_string(),
            ]
        );
        assert_eq!(table.get(0, "pattern_author.name"), Some(&json!("Jane")));
    }

    #[test]
    fn test_from_records_keeps_deeper_nesting_as_raw_json() {
        let records = vec![json!({
            "photo": {"sizes": {"small": "s.jpg", "large": "l.jpg"}},
            "tags": ["lace", "shawl"]
        })];

        let table = Table::from_records(&records);

        // One level down is a column; two levels down stays a JSON object.
        assert_eq!(
            table.get(0, "photo.sizes"),
            Some(&json!({"small": "s.jpg", "large": "l.jpg"}))
        );
        assert_eq!(table.get(0, "tags"), Some(&json!(["lace", "shawl"])));
    }

    #[test]
    fn test_from_records_unions_columns_and_fills_nulls() {
        // Arrange: the second record introduces a new key and drops one
        let records = vec![
            json!({"id": 1, "name": "Malabrigo"}),
            json!({"id": 2, "discontinued": true}),
        ];

        let table = Table::from_records(&records);

        assert_eq!(
            table.columns(),
            [
                "id".to_string(),
                "name".to_string(),
                "discontinued".to_string(),
            ]
        );
        assert_eq!(table.get(0, "discontinued"), Some(&Value::Null));
        assert_eq!(table.get(1, "name"), Some(&Value::Null));
        assert_eq!(table.get(1, "discontinued"), Some(&json!(true)));
    }

    #[test]
    fn test_from_records_non_object_becomes_value_column() {
        let records = vec![json!("lace"), json!("worsted")];

        let table = Table::from_records(&records);

        assert_eq!(table.columns(), ["value".to_string()]);
        assert_eq!(table.get(1, "value"), Some(&json!("worsted")));
    }

    #[test]
    fn test_from_record_yields_single_row() {
        let record = json!({"id": 42, "yarn_weight": {"name": "Fingering"}});

        let table = Table::from_record(&record);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "yarn_weight.name"), Some(&json!("Fingering")));
    }
}
