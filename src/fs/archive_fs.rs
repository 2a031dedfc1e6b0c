//! Archive File System
//!
//! The read-only virtual file system: one archive source plus the path
//! index built from its entry names. All paths taken here are absolute;
//! resolving user input against a working directory happens first, via
//! [`ArchiveFs::resolve_path`].

use super::index::ArchivePathIndex;
use super::path::{archive_key, resolve_path};
use super::types::{ArchiveSource, DirentEntry, FsError};

pub struct ArchiveFs {
    source: Box<dyn ArchiveSource>,
    index: ArchivePathIndex,
}

impl ArchiveFs {
    /// Mount an archive source, indexing its entry names.
    pub fn new(source: Box<dyn ArchiveSource>) -> Self {
        let index = ArchivePathIndex::new(source.entry_names());
        Self { source, index }
    }

    /// Resolve a user-supplied path against a base directory. Purely
    /// syntactic; existence checks are the caller's job.
    pub fn resolve_path(&self, base: &str, path: &str) -> String {
        resolve_path(base, path)
    }

    pub fn exists_as_file(&self, path: &str) -> bool {
        self.index.exists_as_file(path)
    }

    pub fn exists_as_directory(&self, path: &str) -> bool {
        self.index.exists_as_directory(path)
    }

    /// Immediate children of `path`, sorted; directories keep their
    /// trailing slash.
    pub fn list_children(&self, path: &str) -> Vec<DirentEntry> {
        self.index.list_children(path)
    }

    /// Read a file as raw bytes. Directory paths, implicit or explicit,
    /// are `NotFound` just like missing ones.
    pub async fn read_file_buffer(&self, path: &str) -> Result<Vec<u8>, FsError> {
        if !self.index.exists_as_file(path) {
            return Err(FsError::NotFound {
                path: path.to_string(),
                operation: "open".to_string(),
            });
        }
        self.source.read_entry(archive_key(path)).await
    }

    /// Read a file, decoding its bytes as UTF-8.
    pub async fn read_file(&self, path: &str) -> Result<String, FsError> {
        let buffer = self.read_file_buffer(path).await?;
        String::from_utf8(buffer).map_err(|_| FsError::NotText {
            path: path.to_string(),
            operation: "read".to_string(),
        })
    }
}
