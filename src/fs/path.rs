//! Path normalization for archive-backed paths.
//!
//! All paths handed to the filesystem layer are absolute `/`-separated
//! strings. Everything here is purely syntactic: no function in this
//! module consults the archive.

/// Collapse a path to its canonical absolute form.
///
/// Removes duplicate separators and `.` segments, resolves `..` by
/// popping the previous component (popping at the root is a no-op), and
/// drops any trailing slash except on the root itself.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Resolve a user-supplied path against a base directory.
///
/// Absolute inputs ignore `base`; relative inputs are joined onto it
/// before normalization.
pub fn resolve_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize_path(path)
    } else {
        normalize_path(&format!("{}/{}", base, path))
    }
}

/// View of an absolute path as an archive entry key: stored names carry
/// no leading slash.
pub(crate) fn archive_key(path: &str) -> &str {
    path.trim_start_matches('/')
}
