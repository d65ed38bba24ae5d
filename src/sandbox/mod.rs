mod entry;
mod error;


pub use entry::{EntryKind, FileEntry};
pub use error::SandboxError;

use crate::security::PathResolver;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A directory tree confined to a fixed root, with a movable cursor.
///
/// Every operation resolves its input through [`PathResolver`] before the
/// host filesystem is touched, so nothing outside `root` is ever read or
/// modified (symlinks aside).
#[derive(Debug)]
pub struct Sandbox {
    /// Absolute, normalized boundary. Never changes after `open`.
    root: PathBuf,
    /// Current directory. Always `root` or a descendant of it.
    cursor: PathBuf,
}

impl Sandbox {
    /// Open a sandbox at `root`, creating the directory if needed.
    ///
    /// Relative roots are taken relative to the process working directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, SandboxError> {
        let root = root.as_ref();
        let absolute = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()?.join(root)
        };
        let root = PathResolver::normalize(&absolute);

        if root.exists() {
            if !root.is_dir() {
                return Err(SandboxError::InvalidRoot(format!(
                    "{} is not a directory",
                    root.display()
                )));
            }
        } else {
            fs::create_dir_all(&root)?;
            tracing::info!(root = %root.display(), "created sandbox root");
        }

        tracing::info!(root = %root.display(), "sandbox initialized");
        Ok(Self {
            cursor: root.clone(),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cursor(&self) -> &Path {
        &self.cursor
    }

    /// Cursor as shown to users, e.g. `/docs`
    pub fn cursor_virtual(&self) -> String {
        PathResolver::virtual_path(&self.root, &self.cursor)
    }

    /// Resolve `input` relative to the cursor without touching the filesystem
    pub fn resolve(&self, input: &str) -> Result<PathBuf, SandboxError> {
        PathResolver::resolve(&self.root, &self.cursor, input)
    }

    /// Move the cursor into an existing directory
    pub fn enter(&mut self, input: &str) -> Result<&Path, SandboxError> {
        let target = self.resolve(input)?;
        if !target.is_dir() {
            return Err(SandboxError::NotFound(input.to_string()));
        }

        tracing::info!(cursor = %target.display(), "changed directory");
        self.cursor = target;
        Ok(&self.cursor)
    }

    /// Move the cursor to its parent, refusing to leave the root
    pub fn ascend(&mut self) -> Result<&Path, SandboxError> {
        if self.cursor == self.root {
            return Err(SandboxError::AtRoot);
        }

        // cursor is strictly below root, so its parent is root or below
        if let Some(parent) = self.cursor.parent() {
            self.cursor = parent.to_path_buf();
        }

        tracing::info!(cursor = %self.cursor.display(), "moved up");
        Ok(&self.cursor)
    }

    /// List the cursor directory, sorted by name
    pub fn list(&self) -> Result<Vec<FileEntry>, SandboxError> {
        let mut entries = Vec::new();
        for item in fs::read_dir(&self.cursor)? {
            let item = item?;
            let metadata = item.metadata()?;
            let name = item.file_name().to_string_lossy().into_owned();
            entries.push(FileEntry::from_metadata(name, &metadata));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Create a directory (and any missing parents)
    pub fn make_dir(&self, input: &str) -> Result<PathBuf, SandboxError> {
        let target = self.resolve(input)?;
        if target.exists() {
            return Err(SandboxError::AlreadyExists(input.to_string()));
        }
        self.check_ancestors(&target)?;

        fs::create_dir_all(&target)?;
        tracing::info!(path = %target.display(), "created directory");
        Ok(target)
    }

    /// Create a new file with `content`. Existing files are never overwritten.
    ///
    /// Inputs ending in a separator name a directory and are rejected, since
    /// normalization would otherwise drop the separator.
    pub fn create_file(&self, input: &str, content: &str) -> Result<PathBuf, SandboxError> {
        if input.ends_with(['/', std::path::MAIN_SEPARATOR]) {
            return Err(SandboxError::InvalidFileName(input.to_string()));
        }
        let target = self.resolve(input)?;
        self.check_ancestors(&target)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => SandboxError::AlreadyExists(input.to_string()),
                ErrorKind::NotFound => SandboxError::NotFound(
                    target
                        .parent()
                        .map(|p| PathResolver::virtual_path(&self.root, p))
                        .unwrap_or_else(|| input.to_string()),
                ),
                _ => SandboxError::Io(e),
            })?;
        file.write_all(content.as_bytes())?;

        tracing::info!(path = %target.display(), bytes = content.len(), "created file");
        Ok(target)
    }

    /// Fail with `NotFound` (naming the parent of `target`) if the nearest
    /// existing ancestor below the root is a file rather than a directory.
    fn check_ancestors(&self, target: &Path) -> Result<(), SandboxError> {
        let blocker = target
            .ancestors()
            .skip(1)
            .take_while(|p| p.starts_with(&self.root))
            .find(|p| p.exists());

        match (blocker, target.parent()) {
            (Some(p), Some(parent)) if !p.is_dir() => Err(SandboxError::NotFound(
                PathResolver::virtual_path(&self.root, parent),
            )),
            _ => Ok(()),
        }
    }

    /// Read a regular file as text
    pub fn read_file(&self, input: &str) -> Result<String, SandboxError> {
        let target = self.resolve(input)?;
        if !target.is_file() {
            return Err(SandboxError::NotFound(input.to_string()));
        }

        let bytes = fs::read(&target)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Remove a regular file
    pub fn delete_file(&self, input: &str) -> Result<PathBuf, SandboxError> {
        let target = self.resolve(input)?;
        if !target.is_file() {
            return Err(SandboxError::NotFound(input.to_string()));
        }

        fs::remove_file(&target)?;
        tracing::info!(path = %target.display(), "deleted file");
        Ok(target)
    }

    /// Remove a directory and everything below it.
    ///
    /// If the cursor was inside the removed tree it moves to the parent of
    /// the removed directory.
    pub fn delete_dir(&mut self, input: &str) -> Result<PathBuf, SandboxError> {
        let target = self.resolve(input)?;
        if target == self.root {
            return Err(SandboxError::RootProtected);
        }
        if !target.is_dir() {
            return Err(SandboxError::NotFound(input.to_string()));
        }

        fs::remove_dir_all(&target)?;
        tracing::info!(path = %target.display(), "deleted directory");

        if self.cursor.starts_with(&target) {
            if let Some(parent) = target.parent() {
                self.cursor = parent.to_path_buf();
                tracing::info!(cursor = %self.cursor.display(), "cursor moved out of deleted directory");
            }
        }

        Ok(target)
    }
}
