//! Status interpretation and payload extraction
//!
//! The shell hands every response here as a bare status code and body, so
//! the whole decode path stays pure and testable against fixture strings.

use serde_json::Value;

use crate::error::Error;
use crate::record::Table;

/// Decode an endpoint whose payload is a JSON array under `field`.
///
/// An empty array yields an empty table; a missing or non-array field is a
/// malformed response since the upstream contract names it.
pub fn decode_records(status: u16, body: &str, field: &str) -> Result<Table, Error> {
    let payload = parse_payload(status, body)?;
    let records = extract_field(&payload, field)?
        .as_array()
        .ok_or_else(|| Error::MalformedResponse(format!("`{field}` is not an array")))?
        .clone();

    Ok(Table::from_records(&records))
}

/// Decode a detail endpoint whose payload is a single object under `field`.
pub fn decode_record(status: u16, body: &str, field: &str) -> Result<Table, Error> {
    let payload = parse_payload(status, body)?;
    let record = extract_field(&payload, field)?;

    Ok(Table::from_record(record))
}

/// Map the HTTP status, then parse the body as JSON.
///
/// 401 is the only status given its own error kind; every other non-2xx
/// surfaces with its code and raw body for caller diagnosis.
fn parse_payload(status: u16, body: &str) -> Result<Value, Error> {
    if status == 401 {
        return Err(Error::Authentication);
    }

    if !(200..300).contains(&status) {
        return Err(Error::Request {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("body is not valid JSON: {e}")))
}

fn extract_field<'a>(payload: &'a Value, field: &str) -> Result<&'a Value, Error> {
    payload
        .get(field)
        .ok_or_else(|| Error::MalformedResponse(format!("response has no `{field}` field")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_records_one_row_per_element() {
        // Arrange: a 200 response with two elements under the expected field
        let body = json!({
            "yarn_weights": [
                {"id": 1, "name": "Lace", "wpi": "32"},
                {"id": 2, "name": "Fingering", "wpi": "14"},
            ]
        })
        .to_string();

        // Act
        let table = decode_records(200, &body, "yarn_weights").unwrap();

        // Assert
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.columns(),
            ["id".to_string(), "name".to_string(), "wpi".to_string()]
        );
        assert_eq!(table.get(1, "name"), Some(&json!("Fingering")));
    }

    #[test]
    fn test_decode_records_empty_array_yields_empty_table() {
        let body = json!({"patterns": []}).to_string();

        let table = decode_records(200, &body, "patterns").unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_records_401_is_authentication_error() {
        let result = decode_records(401, "", "patterns");

        assert!(matches!(result, Err(Error::Authentication)));
    }

    #[test]
    fn test_decode_records_non_json_body_is_malformed() {
        let result = decode_records(200, "<html>Service Unavailable</html>", "patterns");

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_decode_records_missing_field_is_malformed() {
        let body = json!({"paginator": {"page": 1}}).to_string();

        let result = decode_records(200, &body, "patterns");

        match result {
            Err(Error::MalformedResponse(message)) => {
                assert!(message.contains("patterns"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_records_non_array_field_is_malformed() {
        let body = json!({"patterns": {"id": 1}}).to_string();

        let result = decode_records(200, &body, "patterns");

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_decode_records_other_status_carries_code_and_body() {
        let result = decode_records(503, "upstream down", "patterns");

        match result {
            Err(Error::Request { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_record_flattens_single_object() {
        let body = json!({
            "pattern": {
                "id": 123,
                "name": "Clapotis",
                "pattern_author": {"name": "Kate Gilbert"}
            }
        })
        .to_string();

        let table = decode_record(200, &body, "pattern").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(0, "pattern_author.name"),
            Some(&json!("Kate Gilbert"))
        );
    }

    #[test]
    fn test_decode_record_missing_field_is_malformed() {
        let body = json!({"yarn": {"id": 9}}).to_string();

        let result = decode_record(200, &body, "pattern");

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }
}
