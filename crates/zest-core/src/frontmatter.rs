//! YAML frontmatter codec.
//!
//! A document may open with a metadata block:
//!
//! ```text
//! ---
//! status: new
//! ---
//!
//! # Body
//! ```
//!
//! The block is kept as an ordered `serde_yaml::Mapping`, so keys this tool
//! does not know about survive a read-modify-write cycle in their original
//! order.

use crate::error::{Result, ZestError};
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub const MARKER: &str = "---";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw split of a document: the YAML text between the markers and everything
/// after the closing marker, including the newline that ends the marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub yaml: &'a str,
    pub tail: &'a str,
}

/// A parsed document: ordered metadata plus free-form body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub metadata: Mapping,
    pub body: String,
}

impl Document {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Scalar field rendered as a string, `None` when absent or null.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }
}

// ---------------------------------------------------------------------------
// Splitting
// ---------------------------------------------------------------------------

/// Locate the metadata block. `None` when the document does not open with
/// `---` or the block is never closed by a `---` line.
pub fn split(content: &str) -> Option<Block<'_>> {
    let rest = content.strip_prefix("---\n")?;

    // Empty block: the closing marker follows immediately.
    if let Some(after) = rest.strip_prefix(MARKER) {
        if after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n") {
            return Some(Block {
                yaml: "",
                tail: after,
            });
        }
    }

    let mut from = 0;
    while let Some(offset) = rest[from..].find("\n---") {
        let pos = from + offset;
        let after = &rest[pos + 4..];
        if after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n") {
            return Some(Block {
                yaml: &rest[..pos],
                tail: after,
            });
        }
        from = pos + 1;
    }
    None
}

/// Drop a single leading line break.
fn strip_newline(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

/// The document with its metadata block removed entirely.
pub fn strip(content: &str) -> &str {
    match split(content) {
        Some(block) => strip_newline(block.tail),
        None => content,
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse the YAML text of a block. `source` names the file in errors.
pub fn parse_mapping(yaml: &str, source: &Path) -> Result<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(ZestError::MalformedFrontmatter {
            path: source.to_path_buf(),
            message: "expected a mapping".to_string(),
        }),
        Err(e) => Err(ZestError::MalformedFrontmatter {
            path: source.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Parse a document. Without a metadata block the whole text is the body.
pub fn parse(content: &str, source: &Path) -> Result<Document> {
    let Some(block) = split(content) else {
        return Ok(Document {
            metadata: Mapping::new(),
            body: content.to_string(),
        });
    };
    let metadata = parse_mapping(block.yaml, source)?;
    // End of the closing marker line, then the blank separator line.
    let body = strip_newline(strip_newline(block.tail));
    Ok(Document {
        metadata,
        body: body.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

fn dump_mapping(metadata: &Mapping) -> Result<String> {
    let yaml = serde_yaml::to_string(metadata)?;
    Ok(yaml.trim_end().to_string())
}

/// Emit `---`, the metadata, `---`, a blank line, then the body.
pub fn serialize(metadata: &Mapping, body: &str) -> Result<String> {
    let yaml = dump_mapping(metadata)?;
    Ok(format!("{MARKER}\n{yaml}\n{MARKER}\n\n{body}"))
}

/// Re-emit a block with new metadata, keeping the original tail verbatim.
/// An empty tail becomes a single newline.
pub fn render_with_tail(metadata: &Mapping, tail: &str) -> Result<String> {
    let yaml = dump_mapping(metadata)?;
    let tail = if tail.is_empty() { "\n" } else { tail };
    Ok(format!("{MARKER}\n{yaml}\n{MARKER}{tail}"))
}

/// Render a scalar as plain text. Null yields `None`; collections are dumped as YAML.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => serde_yaml::to_string(other)
            .ok()
            .map(|s| s.trim_end().to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> &'static Path {
        Path::new("specs/20260224-x/spec.md")
    }

    fn mapping(pairs: &[(&str, Value)]) -> Mapping {
        let mut m = Mapping::new();
        for (k, v) in pairs {
            m.insert(Value::String(k.to_string()), v.clone());
        }
        m
    }

    #[test]
    fn parse_splits_metadata_and_body() {
        let doc = parse("---\nstatus: new\nid: abc\n---\n\n# Title\n", src()).unwrap();
        assert_eq!(doc.get_str("status").as_deref(), Some("new"));
        assert_eq!(doc.get_str("id").as_deref(), Some("abc"));
        assert_eq!(doc.body, "# Title\n");
    }

    #[test]
    fn parse_without_block_keeps_whole_document() {
        let content = "# Just a heading\n\ntext\n";
        let doc = parse(content, src()).unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn unclosed_block_is_not_a_block() {
        let content = "---\nstatus: new\nno closing marker\n";
        let doc = parse(content, src()).unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn closing_marker_must_be_its_own_line() {
        let content = "---\nstatus: new\n----- not a marker\n---\nbody";
        let block = split(content).unwrap();
        assert_eq!(block.yaml, "status: new\n----- not a marker");
        assert_eq!(block.tail, "\nbody");
    }

    #[test]
    fn malformed_yaml_names_the_file() {
        let err = parse("---\nstatus: [unclosed\n---\n", src()).unwrap_err();
        assert!(matches!(err, ZestError::MalformedFrontmatter { .. }));
        assert!(err.to_string().contains("specs/20260224-x/spec.md"));
    }

    #[test]
    fn scalar_block_is_malformed() {
        let err = parse("---\njust a string\n---\n", src()).unwrap_err();
        assert!(matches!(err, ZestError::MalformedFrontmatter { .. }));
    }

    #[test]
    fn empty_block_parses_to_empty_mapping() {
        let doc = parse("---\n---\nbody", src()).unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn serialize_layout() {
        let m = mapping(&[("description", Value::String("Start a spec".into()))]);
        let out = serialize(&m, "Body text").unwrap();
        assert_eq!(out, "---\ndescription: Start a spec\n---\n\nBody text");
    }

    #[test]
    fn serialize_does_not_wrap_long_values() {
        let long = "word ".repeat(40).trim_end().to_string();
        let m = mapping(&[("description", Value::String(long.clone()))]);
        let out = serialize(&m, "").unwrap();
        assert!(out.contains(&format!("description: {long}\n")));
    }

    #[test]
    fn round_trip_preserves_scalars_order_and_body() {
        let m = mapping(&[
            ("status", Value::String("designed".into())),
            ("priority", Value::Number(3.into())),
            ("draft", Value::Bool(true)),
            ("looks_numeric", Value::String("007".into())),
            ("looks_bool", Value::String("true".into())),
            ("ratio", Value::Number(serde_yaml::Number::from(0.5))),
        ]);
        for body in ["", "# Title\n\nParagraph.\n", "\nleading blank\n", "no newline"] {
            let doc = parse(&serialize(&m, body).unwrap(), src()).unwrap();
            assert_eq!(doc.metadata, m);
            assert_eq!(doc.body, body);
            let keys: Vec<_> = doc.metadata.keys().filter_map(|k| k.as_str()).collect();
            assert_eq!(
                keys,
                ["status", "priority", "draft", "looks_numeric", "looks_bool", "ratio"]
            );
        }
    }

    #[test]
    fn round_trip_empty_mapping() {
        let doc = parse(&serialize(&Mapping::new(), "body").unwrap(), src()).unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn render_with_tail_keeps_tail() {
        let m = mapping(&[("status", Value::String("researched".into()))]);
        assert_eq!(
            render_with_tail(&m, "\n# Body\n").unwrap(),
            "---\nstatus: researched\n---\n# Body\n"
        );
        assert_eq!(
            render_with_tail(&m, "").unwrap(),
            "---\nstatus: researched\n---\n"
        );
    }

    #[test]
    fn strip_removes_block() {
        assert_eq!(strip("---\na: 1\n---\nHello $ARGUMENTS\n"), "Hello $ARGUMENTS\n");
        assert_eq!(strip("No block"), "No block");
    }

    #[test]
    fn scalar_rendering() {
        assert_eq!(scalar_to_string(&Value::Null), None);
        assert_eq!(scalar_to_string(&Value::Bool(false)).as_deref(), Some("false"));
        assert_eq!(scalar_to_string(&Value::Number(7.into())).as_deref(), Some("7"));
    }
}
