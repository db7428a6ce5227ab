//! Folder grouping
//!
//! Collapses the walker's flat entry list into one group per folder path.
//! Groups appear in the order their path was first seen; links keep
//! document order within a group.

use indexmap::IndexMap;
use navmark_html::{Entry, Link};

use crate::document::Group;

/// Grouping options
#[derive(Debug, Clone)]
pub struct GroupOptions {
    /// Group name for links outside any folder
    pub unclassified: String,
    /// Joins folder path segments into a group name
    pub separator: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            unclassified: "unclassified".to_string(),
            separator: " / ".to_string(),
        }
    }
}

impl GroupOptions {
    /// Group name for a folder path
    pub fn group_name(&self, path: &[String]) -> String {
        if path.is_empty() {
            self.unclassified.clone()
        } else {
            path.join(&self.separator)
        }
    }
}

/// Group entries by folder path in first-seen order
pub fn group_entries<I>(entries: I, options: &GroupOptions) -> Vec<Group>
where
    I: IntoIterator<Item = Entry>,
{
    let mut by_name: IndexMap<String, Vec<Link>> = IndexMap::new();
    for entry in entries {
        by_name
            .entry(options.group_name(&entry.path))
            .or_default()
            .push(entry.link);
    }

    let groups: Vec<Group> = by_name
        .into_iter()
        .filter(|(_, links)| !links.is_empty())
        .map(|(name, links)| Group { name, links })
        .collect();
    tracing::debug!("Grouped links into {} groups", groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &[&str], url: &str) -> Entry {
        Entry {
            path: path.iter().map(|s| s.to_string()).collect(),
            link: Link::new(url, url),
        }
    }

    fn names(groups: &[Group]) -> Vec<&str> {
        groups.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(group_entries(Vec::<Entry>::new(), &GroupOptions::default()).is_empty());
    }

    #[test]
    fn test_root_links_are_unclassified() {
        let groups = group_entries(vec![entry(&[], "a"), entry(&[], "b")], &GroupOptions::default());
        assert_eq!(names(&groups), vec!["unclassified"]);
        let urls: Vec<&str> = groups[0].links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b"]);
    }

    #[test]
    fn test_nested_path_name() {
        let groups = group_entries(vec![entry(&["Work", "Projects"], "b")], &GroupOptions::default());
        assert_eq!(names(&groups), vec!["Work / Projects"]);
    }

    #[test]
    fn test_first_seen_order() {
        let entries = vec![
            entry(&["B"], "1"),
            entry(&[], "2"),
            entry(&["A"], "3"),
            entry(&["B"], "4"),
            entry(&[], "5"),
        ];
        let groups = group_entries(entries, &GroupOptions::default());
        assert_eq!(names(&groups), vec!["B", "unclassified", "A"]);
        let b: Vec<&str> = groups[0].links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(b, vec!["1", "4"]);
    }

    #[test]
    fn test_paths_that_join_equally_share_a_group() {
        let entries = vec![entry(&["a / b"], "1"), entry(&["a", "b"], "2")];
        let groups = group_entries(entries, &GroupOptions::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].links.len(), 2);
    }

    #[test]
    fn test_folder_named_like_sentinel_merges() {
        let entries = vec![entry(&[], "1"), entry(&["unclassified"], "2")];
        let groups = group_entries(entries, &GroupOptions::default());
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_custom_options() {
        let options = GroupOptions {
            unclassified: "misc".to_string(),
            separator: " > ".to_string(),
        };
        let groups = group_entries(vec![entry(&[], "1"), entry(&["x", "y"], "2")], &options);
        assert_eq!(names(&groups), vec!["misc", "x > y"]);
    }
}
