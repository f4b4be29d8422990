//! Header block extraction for plugin entry files.
//!
//! # Responsibility
//! - Parse `Label: value` header lines out of the top of a text artifact.
//! - Expose a total lookup that never fails for unknown or missing fields.
//!
//! # Invariants
//! - Only the first [`MAX_HEADER_BYTES`] bytes of a file are scanned.
//! - Values are trimmed and stripped of trailing comment terminators.
//! - A missing field is absent from the record, never an error.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Header blocks live at the top of the file; anything later is ignored.
pub const MAX_HEADER_BYTES: u64 = 8 * 1024;

/// Field keys declared by the plugin header schema.
pub const PLUGIN_HEADER_FIELDS: &[&str] = &[
    "Plugin Name",
    "Description",
    "Version",
    "Author",
    "Author URI",
    "Text Domain",
    "Network",
    "License",
    "License URI",
];

static COMMENT_TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:\*/|\?>).*").expect("static regex is valid"));

/// Declared header fields, each mapped to the label searched for in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSchema {
    fields: Vec<(String, String)>,
}

impl HeaderSchema {
    /// Builds a schema where every key is searched under its own name.
    pub fn identity<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: keys
                .into_iter()
                .map(|key| {
                    let key = key.into();
                    (key.clone(), key)
                })
                .collect(),
        }
    }

    /// The schema read from plugin entry files.
    pub fn plugin() -> Self {
        Self::identity(PLUGIN_HEADER_FIELDS.iter().copied())
    }

    /// Maps `key` onto a different label in the file.
    pub fn with_field(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        let label = label.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = label,
            None => self.fields.push((key, label)),
        }
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }
}

/// Immutable header values keyed by schema key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    values: BTreeMap<String, String>,
}

impl HeaderRecord {
    /// Returns the trimmed value for `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reads the header block of `path` and extracts the fields in `schema`.
///
/// # Errors
/// - Returns [`HeaderError::Read`] when the file cannot be opened or read.
pub fn extract_headers(path: &Path, schema: &HeaderSchema) -> Result<HeaderRecord, HeaderError> {
    let read_error = |source| HeaderError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let mut bytes = Vec::new();
    file.take(MAX_HEADER_BYTES)
        .read_to_end(&mut bytes)
        .map_err(read_error)?;

    Ok(extract_headers_from_str(
        &String::from_utf8_lossy(&bytes),
        schema,
    ))
}

/// Extracts the fields in `schema` from an in-memory header block.
pub fn extract_headers_from_str(text: &str, schema: &HeaderSchema) -> HeaderRecord {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut values = BTreeMap::new();

    for (key, label) in schema.fields() {
        if let Some(value) = find_field(&normalized, label) {
            values.insert(key.to_string(), value);
        }
    }

    HeaderRecord { values }
}

fn find_field(text: &str, label: &str) -> Option<String> {
    let pattern = format!(r"^[ \t/*#@]*{}:(.*)$", regex::escape(label));
    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .ok()?;
    let raw = matcher.captures(text)?.get(1)?.as_str();
    Some(cleanup_value(raw))
}

fn cleanup_value(raw: &str) -> String {
    COMMENT_TERMINATOR.replace(raw, "").trim().to_string()
}

/// Header extraction errors.
#[derive(Debug)]
pub enum HeaderError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for HeaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read header block of `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for HeaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
        }
    }
}
