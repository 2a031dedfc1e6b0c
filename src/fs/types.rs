//! File System Types
//!
//! Core types and traits for the archive-backed virtual file system.

use async_trait::async_trait;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EILSEQ: invalid utf-8 data, {operation} '{path}'")]
    NotText { path: String, operation: String },

    #[error("archive error: {message}")]
    Archive { message: String },
}

/// Directory entry as produced by a listing.
///
/// Directory names keep the trailing slash they carry inside the
/// archive; file names have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub is_directory: bool,
}

/// Read-only archive backend: a flat list of stored entry names plus
/// byte access to individual entries.
///
/// Stored names use `/` as separator and carry no leading slash;
/// directory entries are conventionally suffixed with one. Backends
/// must not assume an explicit entry exists for every directory.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// All stored entry names, in no particular order.
    fn entry_names(&self) -> Vec<String>;

    /// Raw bytes of the stored entry `name` (exact match against the
    /// stored form).
    async fn read_entry(&self, name: &str) -> Result<Vec<u8>, FsError>;
}
