//! JSON export of template documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::document::TemplateDocument;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Errors that can occur when exporting or importing a document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize template: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse template JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A rendered export, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name (`<slug>-website.json`)
    pub file_name: String,

    /// Pretty-printed JSON
    pub contents: String,
}

impl Export {
    /// Write the export into `dir`, returning the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.contents).map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}

/// Lowercase a name and collapse whitespace runs into `-`.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RE.replace_all(&name.to_lowercase(), "-").into_owned()
}

/// File name used for a document's export.
pub fn export_file_name(name: &str) -> String {
    format!("{}-website.json", slugify(name))
}

/// Serialize a document as pretty-printed JSON (two-space indent).
pub fn to_json(document: &TemplateDocument) -> Result<String, ExportError> {
    serde_json::to_string_pretty(document).map_err(ExportError::Serialize)
}

/// Parse a document previously produced by [`to_json`].
pub fn from_json(json: &str) -> Result<TemplateDocument, ExportError> {
    serde_json::from_str(json).map_err(ExportError::Parse)
}

/// Build the export for a document.
pub fn export(document: &TemplateDocument) -> Result<Export, ExportError> {
    Ok(Export {
        file_name: export_file_name(&document.name),
        contents: to_json(document)?,
    })
}
