//! File system access for image lookup.
//!
//! The resolver only needs two primitives: "does this directory exist" and
//! "what files are in it". Keeping them behind a trait lets tests count
//! calls and lets hosts serve images from somewhere other than local disk.

use std::io;
use std::path::Path;

/// Directory primitives used by `ImageResolver`.
pub trait ImageStore: Send + Sync {
    /// Check whether a directory exists.
    fn dir_exists(&self, dir: &Path) -> bool;

    /// Names of the regular files directly inside `dir`, in listing order.
    ///
    /// A directory that does not exist has no files.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// `ImageStore` over the local file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalImageStore;

impl ImageStore for LocalImageStore {
    fn dir_exists(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // Non UTF-8 names can never match an image key.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}
