//! Plain-text rendering of record sets

use ravelry_core::Table;
use serde_json::Value;

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// Render a record set as aligned plain text with a header row.
///
/// Strings print bare, nulls print empty, and anything else (numbers,
/// booleans, surviving JSON arrays/objects) prints in JSON form.
pub fn render(table: &Table) -> String {
    let mut out = new_table();

    out.set_titles(prettytable::Row::new(
        table
            .columns()
            .iter()
            .map(|column| prettytable::Cell::new(column))
            .collect(),
    ));

    for row in table.rows() {
        out.add_row(prettytable::Row::new(
            row.iter()
                .map(|value| prettytable::Cell::new(&cell_text(value)))
                .collect(),
        ));
    }

    out.to_string()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_includes_header_and_rows() {
        let records = vec![
            json!({"id": 1, "name": "Lace"}),
            json!({"id": 2, "name": "Light Fingering"}),
        ];
        let table = Table::from_records(&records);

        let text = render(&table);

        assert!(text.contains("id"));
        assert!(text.contains("name"));
        assert!(text.contains("Light Fingering"));
    }

    #[test]
    fn test_render_prints_nulls_empty_and_json_values_raw() {
        let records = vec![json!({"name": "Clapotis", "free": true, "photo": null})];
        let table = Table::from_records(&records);

        let text = render(&table);

        assert!(text.contains("Clapotis"));
        assert!(text.contains("true"));
        assert!(!text.contains("null"));
    }
}
