// Public API exports
pub mod sandbox;
pub mod security;
pub mod shell;

// Re-export main types for convenience
pub use sandbox::{EntryKind, FileEntry, Sandbox, SandboxError};
pub use security::PathResolver;
pub use shell::{Command, Flow, Shell};
