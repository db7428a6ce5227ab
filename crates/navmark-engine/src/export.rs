//! Output rendering
//!
//! Both payloads are rendered before anything touches the disk, so a
//! serialization failure leaves no half-written output behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::engine::ExportError;

/// Rendered output files, ready to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub json: String,
    pub script: String,
}

/// Pretty-print the document with two-space indentation.
/// Non-ASCII characters are written as-is.
pub fn render_json(document: &Document) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Wrap JSON in a script assigning it to `global`
pub fn render_script(global: &str, json: &str) -> String {
    format!("{global} = {json};\n")
}

/// Render both output payloads
pub fn render(document: &Document, global: &str) -> Result<Rendered, ExportError> {
    let json = render_json(document)?;
    let script = render_script(global, &json);
    Ok(Rendered { json, script })
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<PathBuf, ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path.to_path_buf())
}
