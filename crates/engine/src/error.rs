use thiserror::Error;

/// Every reportable failure, rendered in the conventional `path: reason`
/// diagnostic form. The path field holds whatever name the error should be
/// attributed to (a display name for targets, a joined path for children).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{path}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    OpenDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: joined path exceeds {limit} bytes")]
    PathTooLong { path: String, limit: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
