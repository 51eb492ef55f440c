//! Storage capability
//!
//! The SD card is mounted by the bootstrap layer; this crate only joins
//! paths under the mount point and enumerates the root for the listing
//! report.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Storage capability consumed by the command handlers.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Join the storage root with a relative file name from a command.
    ///
    /// No normalization or traversal checks are applied; the mount point is
    /// the confinement boundary on the appliance.
    fn resolve(&self, file: &str) -> PathBuf;

    /// Enumerate every entry in the storage root, files and subdirectories
    /// alike, in directory-enumeration order.
    ///
    /// The listing is built fresh on every call; it reflects the live
    /// directory, never a cached snapshot.
    async fn list_root(&self) -> io::Result<Vec<String>>;
}

/// [`Storage`] over a mounted SD card directory.
pub struct SdCardStorage {
    root: PathBuf,
}

impl SdCardStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Storage for SdCardStorage {
    fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    async fn list_root(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
