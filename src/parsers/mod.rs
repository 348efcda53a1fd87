//! JSON document loading.
//!
//! Turns files, readers and strings into `serde_json::Value` trees with
//! errors that name the document they came from.
//!
//! ## Usage
//!
//! ```no_run
//! use jsondiff_tools::parsers::{parse_json_file, select_pointer};
//! use std::path::Path;
//!
//! let doc = parse_json_file(Path::new("response.json")).unwrap();
//! let items = select_pointer(doc, "/data/items").unwrap();
//! ```

use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::error::{ErrorContext, JsonDiffError, OptionContext, Result};

/// Parse JSON text.
///
/// Blank input is reported as [`ParseErrorKind::EmptyInput`] rather than a
/// syntax error.
///
/// [`ParseErrorKind::EmptyInput`]: crate::error::ParseErrorKind::EmptyInput
pub fn parse_json_str(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        return Err(JsonDiffError::empty_input("document"));
    }
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a JSON file.
pub fn parse_json_file(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| JsonDiffError::io(path, e))?;
    parse_json_str(&content).with_context(|| path.display().to_string())
}

/// Read and parse JSON from a reader such as stdin.
pub fn parse_json_reader(mut reader: impl Read, origin: &str) -> Result<Value> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("reading {origin}"))?;
    parse_json_str(&content).context(origin)
}

/// Narrow a document to the value at a JSON Pointer (RFC 6901).
///
/// The empty pointer selects the whole document.
pub fn select_pointer(document: Value, pointer: &str) -> Result<Value> {
    if pointer.is_empty() {
        return Ok(document);
    }
    document
        .pointer(pointer)
        .cloned()
        .with_context_none(|| format!("JSON pointer '{pointer}' does not match any value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_json_str() {
        let value = parse_json_str(r#"{"status": 200, "items": []}"#).expect("valid JSON");
        assert_eq!(value["status"], 200);
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let value = parse_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).expect("valid JSON");
        let keys: Vec<_> = value
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_input() {
        match parse_json_str("  \n") {
            Err(JsonDiffError::Parse {
                source: ParseErrorKind::EmptyInput,
                ..
            }) => {}
            other => panic!("expected empty input error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_names_origin() {
        let err = parse_json_reader("{\"a\": ".as_bytes(), "stdin").expect_err("invalid");
        assert!(err.to_string().contains("stdin"), "{err}");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_json_file(Path::new("/nonexistent/left.json")).expect_err("missing");
        assert!(matches!(err, JsonDiffError::Io { .. }));
    }

    #[test]
    fn test_select_pointer() {
        let doc = json!({"data": {"items": [1, 2]}});
        assert_eq!(
            select_pointer(doc.clone(), "/data/items").expect("resolves"),
            json!([1, 2])
        );
        assert_eq!(select_pointer(doc.clone(), "").expect("root"), doc);
        assert!(matches!(
            select_pointer(doc, "/data/missing"),
            Err(JsonDiffError::Validation(_))
        ));
    }
}
