//! Navigation document

use navmark_html::Link;
use serde::Serialize;

/// Links sharing one folder path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Folder path joined with the group separator
    pub name: String,
    pub links: Vec<Link>,
}

/// The document handed to the navigation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub groups: Vec<Group>,
}

impl Document {
    pub fn new(title: impl Into<String>, description: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            groups,
        }
    }

    /// Total links across all groups
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }

    /// Find a group by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }
}
