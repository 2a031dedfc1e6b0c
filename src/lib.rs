//! zip-shell - an interactive read-only shell over a zip archive
//!
//! Mounts a single zip file as a virtual filesystem and exposes a small
//! set of shell-like commands (`ls`, `cd`, `cat`, `uniq`, `tac`) that
//! operate on paths inside the archive rather than the host filesystem.

pub mod commands;
pub mod fs;
pub mod shell;

pub use fs::{ArchiveFs, ArchivePathIndex, ZipSource};
pub use shell::{Shell, ShellOptions};
