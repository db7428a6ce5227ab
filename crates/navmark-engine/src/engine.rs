//! Engine - Main entry point

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use navmark_html::{BookmarkParser, ParseOptions};

use crate::config::Config;
use crate::decode::decode_lossy;
use crate::document::Document;
use crate::export;
use crate::grouper::{group_entries, GroupOptions};

/// Result of importing one bookmark file
#[derive(Debug, Clone)]
pub struct Import {
    /// Number of anchors the walker emitted
    pub links: usize,
    pub document: Document,
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub links: usize,
    pub json_path: PathBuf,
    pub script_path: PathBuf,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Imported {} links, generated {} and {}",
            self.links,
            self.json_path.display(),
            self.script_path.display()
        )
    }
}

/// The navmark bookmark importer
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
    parser: BookmarkParser,
    grouping: GroupOptions,
}

impl Engine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Self {
        tracing::debug!("navmark engine {} initialized", crate::VERSION);
        Self {
            config,
            parser: BookmarkParser::new(),
            grouping: GroupOptions::default(),
        }
    }

    /// Replace the walker options
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parser = BookmarkParser::with_options(options);
        self
    }

    /// Replace the grouping options
    pub fn with_group_options(mut self, options: GroupOptions) -> Self {
        self.grouping = options;
        self
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the document from bookmark markup
    pub fn import_str(&self, html: &str) -> Import {
        let entries = self.parser.parse(html);
        let links = entries.len();
        let groups = group_entries(entries, &self.grouping);
        Import {
            links,
            document: Document::new(self.config.title.clone(), self.config.description.clone(), groups),
        }
    }

    /// Read a bookmark file and build the document
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<Import, ExportError> {
        let path = path.as_ref();
        tracing::info!("Importing {}", path.display());
        let bytes = fs::read(path).map_err(|source| ExportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.import_str(&decode_lossy(&bytes)))
    }

    /// Write `data.json` and `data.js` into the output directory.
    /// Returns the JSON path and the script path.
    pub fn export(&self, document: &Document) -> Result<(PathBuf, PathBuf), ExportError> {
        let rendered = export::render(document, &self.config.script_global)?;
        let json_path = export::write_file(&self.config.json_path(), &rendered.json)?;
        let script_path = export::write_file(&self.config.script_path(), &rendered.script)?;
        Ok((json_path, script_path))
    }

    /// Import a bookmark file and export it
    pub fn run(&self, path: impl AsRef<Path>) -> Result<ExportSummary, ExportError> {
        let import = self.import_file(path)?;
        let (json_path, script_path) = self.export(&import.document)?;
        Ok(ExportSummary {
            links: import.links,
            json_path,
            script_path,
        })
    }
}

/// Export error
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Cannot locate executable directory: {0}")]
    ExecutableDir(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_str_counts_links() {
        let engine = Engine::default();
        let import = engine.import_str(r#"<h3>A</h3><dl><a href="1">1</a><a href="2">2</a></dl>"#);
        assert_eq!(import.links, 2);
        assert_eq!(import.document.link_count(), 2);
        assert_eq!(import.document.title, "My Navigation");
    }

    #[test]
    fn test_custom_options_flow_through() {
        let engine = Engine::default()
            .with_parse_options(ParseOptions {
                untitled_folder: "Untitled".to_string(),
            })
            .with_group_options(GroupOptions {
                unclassified: "Other".to_string(),
                separator: " > ".to_string(),
            });
        let html = r#"<a href="r">r</a><h3></h3><dl><h3>In</h3><dl><a href="x">x</a></dl></dl>"#;
        let document = engine.import_str(html).document;
        let names: Vec<&str> = document.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Other", "Untitled > In"]);
    }

    #[test]
    fn test_summary_line() {
        let summary = ExportSummary {
            links: 0,
            json_path: PathBuf::from("/opt/nav/data.json"),
            script_path: PathBuf::from("/opt/nav/data.js"),
        };
        assert_eq!(
            summary.to_string(),
            "Imported 0 links, generated /opt/nav/data.json and /opt/nav/data.js"
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Engine::default().import_file("/definitely/not/here.html").unwrap_err();
        assert!(matches!(err, ExportError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.html"));
    }
}
