//! Document loading stage.
//!
//! Reads a JSON document from a file or stdin and narrows it to a JSON
//! Pointer when one is configured.

use crate::parsers::{parse_json_file, parse_json_reader, select_pointer};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// A loaded document and the name it is reported under
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// The parsed (and possibly narrowed) document
    pub value: Value,
    /// File path, or `stdin`
    pub origin: String,
}

impl LoadedDocument {
    /// Consume and return the document
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Load a JSON document with context for error messages.
///
/// A path of `-` reads from stdin.
pub fn load_json_with_context(
    path: &Path,
    pointer: Option<&str>,
    quiet: bool,
) -> Result<LoadedDocument> {
    let from_stdin = path.as_os_str() == "-";
    let origin = if from_stdin {
        "stdin".to_string()
    } else {
        path.display().to_string()
    };

    if !quiet {
        tracing::info!("Loading JSON: {}", origin);
    }

    let document = if from_stdin {
        parse_json_reader(std::io::stdin().lock(), &origin)
    } else {
        parse_json_file(path)
    }
    .with_context(|| format!("Failed to load JSON document: {origin}"))?;

    let value = match pointer {
        Some(pointer) => select_pointer(document, pointer)
            .with_context(|| format!("Failed to select '{pointer}' in {origin}"))?,
        None => document,
    };

    if !quiet {
        tracing::info!(
            "Loaded {} ({} leaf fields)",
            origin,
            crate::model::count_fields(&value)
        );
    }

    Ok(LoadedDocument { value, origin })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(&path, r#"{"data": {"items": [1, 2]}}"#).unwrap();

        let doc = load_json_with_context(&path, None, true).unwrap();
        assert_eq!(doc.origin, path.display().to_string());
        assert_eq!(doc.value["data"]["items"], json!([1, 2]));
    }

    #[test]
    fn test_load_with_pointer() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(&path, r#"{"data": {"items": [1, 2]}}"#).unwrap();

        let doc = load_json_with_context(&path, Some("/data/items"), true).unwrap();
        assert_eq!(doc.into_value(), json!([1, 2]));

        let err = load_json_with_context(&path, Some("/data/missing"), true).unwrap_err();
        assert!(format!("{err:#}").contains("/data/missing"));
    }

    #[test]
    fn test_load_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{\"a\": ").unwrap();

        let err = load_json_with_context(&path, None, true).unwrap_err();
        assert!(err.to_string().contains("Failed to load JSON document"));
    }
}
