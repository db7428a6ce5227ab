//! navmark HTML walker
//!
//! Streams a Netscape bookmark export through html5ever's tokenizer and
//! reconstructs the folder hierarchy implied by its `<H3>` + `<DL>` pairs.
//! Never fails: malformed markup degrades to fewer or flatter entries.

mod parser;
mod text;

use serde::Serialize;

pub use parser::{BookmarkParser, ParseOptions};
pub use text::normalize_whitespace;

/// Parse a bookmark file with default options
pub fn parse(html: &str) -> Vec<Entry> {
    BookmarkParser::new().parse(html)
}

/// A single bookmarked link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub title: String,
    /// Always empty, kept in the output shape for the page
    pub desc: String,
    /// Always empty, kept in the output shape for the page
    pub tags: Vec<String>,
}

impl Link {
    /// Create a link with empty description and tags
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            desc: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Folder names from the root down to a link's containing folder.
/// Empty for root-level links.
pub type FolderPath = Vec<String>;

/// One anchor element together with the folders enclosing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: FolderPath,
    pub link: Link,
}
