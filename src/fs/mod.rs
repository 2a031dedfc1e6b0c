//! File System Module
//!
//! Read-only virtual file system backed by the contents of a single
//! archive. The index answers structural queries over the archive's
//! flat entry-name list; the source provides the bytes.

pub mod archive_fs;
pub mod index;
pub mod path;
pub mod types;
pub mod zip_source;

pub use archive_fs::ArchiveFs;
pub use index::ArchivePathIndex;
pub use path::{normalize_path, resolve_path};
pub use types::*;
pub use zip_source::ZipSource;
