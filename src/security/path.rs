use crate::sandbox::SandboxError;
use std::path::{Component, Path, PathBuf};

pub struct PathResolver;

impl PathResolver {
    /// Resolve user input against the cursor and confine it to `root`.
    ///
    /// The check is purely lexical:
    /// - `.` and redundant separators are dropped
    /// - `..` pops the previous component, even if it does not exist on disk
    /// - the result must be `root` itself or lie beneath it
    ///
    /// Symlinks are not followed, so a link inside the root that points
    /// elsewhere is not caught here.
    pub fn resolve(root: &Path, cursor: &Path, input: &str) -> Result<PathBuf, SandboxError> {
        let resolved = Self::normalize(&cursor.join(input));

        // Component-wise comparison, so "/root2" never matches "/root"
        if !resolved.starts_with(root) {
            tracing::warn!(
                input,
                resolved = %resolved.display(),
                "rejected path outside sandbox root"
            );
            return Err(SandboxError::OutOfBounds {
                input: input.to_string(),
            });
        }

        tracing::debug!(input, resolved = %resolved.display(), "resolved path");
        Ok(resolved)
    }

    /// Collapse `.`, `..` and repeated separators without touching the filesystem.
    pub fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    normalized.push(component.as_os_str());
                }
                Component::CurDir => continue,
                // `pop` refuses to remove the root, so `/..` stays `/`
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::Normal(part) => normalized.push(part),
            }
        }

        normalized
    }

    /// Render a path inside `root` the way the shell shows it to users,
    /// e.g. `/docs/notes` (root itself is `/`).
    pub fn virtual_path(root: &Path, path: &Path) -> String {
        let parts: Vec<String> = path
            .strip_prefix(root)
            .map(|rest| {
                rest.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        format!("/{}", parts.join("/"))
    }
}
