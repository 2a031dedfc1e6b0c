//! Zip Archive Source
//!
//! Zip-backed implementation of [`ArchiveSource`]. The central
//! directory is scanned once at open time; entry bytes are decompressed
//! on demand.

use std::io::{Read, Seek};

use async_trait::async_trait;
use tokio::sync::Mutex;
use zip::ZipArchive;

use super::types::{ArchiveSource, FsError};

/// Archive source reading from a zip container.
///
/// The zip reader needs `&mut` access for every read, so it sits behind
/// a mutex; the entry-name list is cached at construction and served
/// without locking.
pub struct ZipSource<R: Read + Seek + Send> {
    archive: Mutex<ZipArchive<R>>,
    names: Vec<String>,
}

impl<R: Read + Seek + Send> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self, FsError> {
        let archive = ZipArchive::new(reader).map_err(|e| FsError::Archive {
            message: e.to_string(),
        })?;
        let names = archive.file_names().map(String::from).collect();
        Ok(Self {
            archive: Mutex::new(archive),
            names,
        })
    }
}

#[async_trait]
impl<R: Read + Seek + Send> ArchiveSource for ZipSource<R> {
    fn entry_names(&self) -> Vec<String> {
        self.names.clone()
    }

    async fn read_entry(&self, name: &str) -> Result<Vec<u8>, FsError> {
        let mut archive = self.archive.lock().await;
        let mut entry = archive.by_name(name).map_err(|_| FsError::NotFound {
            path: name.to_string(),
            operation: "open".to_string(),
        })?;
        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content).map_err(|e| FsError::Archive {
            message: e.to_string(),
        })?;
        Ok(content)
    }
}
