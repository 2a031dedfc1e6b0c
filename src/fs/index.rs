//! Archive Path Index
//!
//! Structural view of an archive's flat namespace. Some archives omit
//! entries for directories entirely, so directory existence is a
//! derived predicate: a path is a directory when it is stored with a
//! trailing slash or when some deeper entry uses it as a prefix.

use std::collections::BTreeSet;
use std::ops::Bound;

use super::path::archive_key;
use super::types::DirentEntry;

/// Sorted index over the stored entry names of one archive.
///
/// Built once when the archive is opened; answers every query with a
/// bounded range scan, so no directory tree is ever materialized.
pub struct ArchivePathIndex {
    names: BTreeSet<String>,
}

impl ArchivePathIndex {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// True iff `path` names a stored entry that is not a directory.
    pub fn exists_as_file(&self, path: &str) -> bool {
        let key = archive_key(path);
        !key.is_empty() && !key.ends_with('/') && self.names.contains(key)
    }

    /// True iff `path` is a directory: stored explicitly with a
    /// trailing slash, or implied as a prefix of some deeper entry.
    /// The root always exists.
    pub fn exists_as_directory(&self, path: &str) -> bool {
        let key = archive_key(path);
        if key.is_empty() {
            return true;
        }
        let prefix = format!("{}/", key.trim_end_matches('/'));
        self.first_with_prefix(&prefix).is_some()
    }

    /// Immediate children of `dir_path`, sorted by name.
    ///
    /// A stored entry is a direct child when the remainder after the
    /// directory prefix contains no `/` (a file) or exactly one `/` at
    /// its end (a direct subdirectory, listed without descendants).
    /// Deeper descendants are excluded; so are directories that exist
    /// only implicitly, since only stored names are considered.
    pub fn list_children(&self, dir_path: &str) -> Vec<DirentEntry> {
        let key = archive_key(dir_path);
        let prefix = if key.is_empty() {
            String::new()
        } else {
            format!("{}/", key.trim_end_matches('/'))
        };

        let mut children = Vec::new();
        for name in self.tail(&prefix) {
            if !name.starts_with(prefix.as_str()) {
                break;
            }
            let rest = &name[prefix.len()..];
            if rest.is_empty() {
                // The directory's own entry.
                continue;
            }
            match rest.find('/') {
                None => children.push(DirentEntry {
                    name: rest.to_string(),
                    is_directory: false,
                }),
                Some(pos) if pos + 1 == rest.len() => children.push(DirentEntry {
                    name: rest.to_string(),
                    is_directory: true,
                }),
                Some(_) => {}
            }
        }
        children
    }

    fn first_with_prefix(&self, prefix: &str) -> Option<&String> {
        self.tail(prefix)
            .next()
            .filter(|name| name.starts_with(prefix))
    }

    /// All names at or after `start`, in order.
    fn tail<'a>(&'a self, start: &str) -> impl Iterator<Item = &'a String> {
        self.names
            .range::<str, _>((Bound::Included(start), Bound::Unbounded))
    }
}
