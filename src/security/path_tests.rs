use crate::sandbox::SandboxError;
use crate::security::PathResolver;
use std::path::{Path, PathBuf};

fn root() -> &'static Path {
    Path::new("/sandbox")
}

#[test]
fn test_resolve_simple_child() {
    let result = PathResolver::resolve(root(), root(), "docs");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/docs"));
}

#[test]
fn test_resolve_nested_from_cursor() {
    let cursor = Path::new("/sandbox/a");
    let result = PathResolver::resolve(root(), cursor, "b/c.txt");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/a/b/c.txt"));
}

#[test]
fn test_empty_input_is_cursor() {
    let cursor = Path::new("/sandbox/a");
    let result = PathResolver::resolve(root(), cursor, "");
    assert_eq!(result.unwrap(), cursor);
}

#[test]
fn test_current_dir_is_idempotent() {
    for cursor in ["/sandbox", "/sandbox/a", "/sandbox/a/b"] {
        let cursor = Path::new(cursor);
        assert_eq!(PathResolver::resolve(root(), cursor, ".").unwrap(), cursor);
    }
}

#[test]
fn test_redundant_separators_collapsed() {
    let result = PathResolver::resolve(root(), root(), "a//./b///c");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/a/b/c"));
}

#[test]
fn test_parent_inside_root_allowed() {
    let cursor = Path::new("/sandbox/a/b");
    let result = PathResolver::resolve(root(), cursor, "../c");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/a/c"));
}

#[test]
fn test_parent_through_missing_dirs() {
    let result = PathResolver::resolve(root(), root(), "missing/deeper/../../x");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/x"));
}

#[test]
fn test_normalizes_to_root_is_allowed() {
    let cursor = Path::new("/sandbox/a/b");
    let result = PathResolver::resolve(root(), cursor, "../..");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox"));
}

#[test]
fn test_reject_parent_of_root() {
    let result = PathResolver::resolve(root(), root(), "..");
    assert!(matches!(
        result,
        Err(SandboxError::OutOfBounds { ref input }) if input == ".."
    ));
}

#[test]
fn test_reject_escape_from_subdirectory() {
    let cursor = Path::new("/sandbox/a");
    let result = PathResolver::resolve(root(), cursor, "../../etc");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("outside the root directory"));
}

#[test]
fn test_reject_sibling_with_shared_prefix() {
    let result = PathResolver::resolve(root(), root(), "../sandbox2/file");
    assert!(matches!(result, Err(SandboxError::OutOfBounds { .. })));
}

#[test]
fn test_reject_absolute_outside_root() {
    let result = PathResolver::resolve(root(), root(), "/etc/passwd");
    assert!(matches!(result, Err(SandboxError::OutOfBounds { .. })));
}

#[test]
fn test_absolute_inside_root_allowed() {
    let cursor = Path::new("/sandbox/a");
    let result = PathResolver::resolve(root(), cursor, "/sandbox/b");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/b"));
}

#[test]
fn test_reject_many_parents() {
    let result = PathResolver::resolve(root(), root(), "../../../../../../");
    assert!(matches!(result, Err(SandboxError::OutOfBounds { .. })));
}

#[test]
fn test_names_with_dots_are_normal() {
    let result = PathResolver::resolve(root(), root(), "...");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/..."));

    let result = PathResolver::resolve(root(), root(), "..hidden");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/..hidden"));
}

#[test]
fn test_path_with_spaces_and_unicode() {
    let result = PathResolver::resolve(root(), root(), "My Documents/文档");
    assert_eq!(result.unwrap(), PathBuf::from("/sandbox/My Documents/文档"));
}

#[test]
fn test_normalize_parent_at_filesystem_root() {
    assert_eq!(
        PathResolver::normalize(Path::new("/../..")),
        PathBuf::from("/")
    );
}

#[test]
fn test_virtual_path() {
    assert_eq!(PathResolver::virtual_path(root(), root()), "/");
    assert_eq!(
        PathResolver::virtual_path(root(), Path::new("/sandbox/a/b")),
        "/a/b"
    );
}
