// crates/engine/src/options.rs

/// Listing behaviour, fixed for the whole invocation and shared read-only by
/// every component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Render permission bits, link count, owner, group, size and mtime.
    pub long_format: bool,
    /// List the `.` and `..` pseudo-entries of each directory.
    pub show_hidden: bool,
}

/// One path the tool was asked to list.
///
/// `path` is what the filesystem is queried with; `display` is what the user
/// sees. They are equal for explicit command-line arguments and differ only
/// for the implicit current-directory target, whose display name is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub display: String,
}

impl Target {
    /// Target for an explicit command-line argument.
    pub fn named(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            display: path.clone(),
            path,
        }
    }

    /// The implicit no-argument target: current directory, empty display name
    /// so no header is printed.
    pub fn current_dir() -> Self {
        Self {
            path: ".".to_owned(),
            display: String::new(),
        }
    }
}
