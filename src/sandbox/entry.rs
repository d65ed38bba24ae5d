use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// Metadata for a single entry in the cursor directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name (lossy UTF-8)
    pub name: String,
    pub kind: EntryKind,
    /// Length in bytes as reported by the host
    pub size: u64,
    /// Last modification time, if the platform reports one
    pub modified: Option<DateTime<Utc>>,
}

impl FileEntry {
    pub(crate) fn from_metadata(name: String, metadata: &Metadata) -> Self {
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        Self {
            name,
            kind,
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
