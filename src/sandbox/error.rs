use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("Access outside the root directory is not allowed: {input}")]
    OutOfBounds { input: String },

    #[error("{0} does not exist")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("Cannot leave the root directory")]
    AtRoot,

    #[error("The root directory cannot be deleted")]
    RootProtected,

    #[error("{0} names a directory, not a file")]
    InvalidFileName(String),

    #[error("Failed to render listing: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Invalid sandbox root: {0}")]
    InvalidRoot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
