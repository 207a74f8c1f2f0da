//! Output formatting for the CLI.
//!
//! The default format is an indented key/value listing: mappings as
//! `key: value`, sequences as `- item`, nested values two spaces deeper,
//! strings double-quoted. A mapping inside a sequence starts with a bare `-`
//! line.

use crate::cli::CliFormat;
use crate::error::Result;
use scribe_domain::TermRecord;
use serde_json::Value;

const INDENT: usize = 2;

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat) -> Self {
        Self { format }
    }

    /// Format extracted records, ending with a newline.
    pub fn format_records(&self, records: &[TermRecord]) -> Result<String> {
        match self.format {
            CliFormat::Yaml => Ok(to_yaml(&serde_json::to_value(records)?)),
            CliFormat::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
        }
    }
}

/// Render any JSON value in the indented listing format.
pub fn to_yaml(value: &Value) -> String {
    let mut lines = Vec::new();
    emit(value, 0, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn emit(value: &Value, indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if is_nested(val) {
                    lines.push(format!("{}{}:", pad, key));
                    emit(val, indent + INDENT, lines);
                } else {
                    lines.push(format!("{}{}: {}", pad, key, scalar(val)));
                }
            }
        }
        Value::Array(items) if items.is_empty() => lines.push(format!("{}[]", pad)),
        Value::Array(items) => {
            for item in items {
                if is_nested(item) {
                    lines.push(format!("{}-", pad));
                    emit(item, indent + INDENT, lines);
                } else {
                    lines.push(format!("{}- {}", pad, scalar(item)));
                }
            }
        }
        other => lines.push(format!("{}{}", pad, scalar(other))),
    }
}

/// Non-empty containers go on their own lines; empty ones render inline.
fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape(s)),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
