// crates/engine/src/lister.rs
use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::entry::{self, FileKind};
use crate::error::{EngineError, Result};
use crate::identity::IdentitySource;
use crate::options::{Options, Target};
use crate::render;

/// Longest lookup path the lister will build when joining a directory prefix
/// with a child name. Longer joins are a reported per-child error.
pub const MAX_PATH: usize = libc::PATH_MAX as usize;

/// Accumulated outcome of one run: rendered output lines in order, plus every
/// non-fatal error encountered along the way.
#[derive(Debug, Default)]
pub struct RunResult {
    pub lines: Vec<String>,
    pub errors: Vec<EngineError>,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Lookup path and display name for one directory child. The lookup keeps
/// the child name's raw bytes for the filesystem query; the display name is
/// its lossy UTF-8 form shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildPath {
    pub lookup: PathBuf,
    pub display: String,
}

/// Joins a directory display prefix with a child name.
///
/// An empty prefix (the implicit current-directory target) yields the bare
/// child name, resolved relative to the working directory.
///
/// # Errors
/// `PathTooLong` when the joined lookup path exceeds [`MAX_PATH`].
pub fn join_child(prefix: &str, name: &OsStr) -> Result<ChildPath> {
    let lookup = if prefix.is_empty() {
        PathBuf::from(name)
    } else {
        Path::new(prefix).join(name)
    };
    let display = lookup.to_string_lossy().into_owned();
    if lookup.as_os_str().as_bytes().len() > MAX_PATH {
        return Err(EngineError::PathTooLong {
            path: display,
            limit: MAX_PATH,
        });
    }
    Ok(ChildPath { lookup, display })
}

/// Lists one target: renders it directly if it is not a directory, otherwise
/// enumerates its children. Every failure is recorded in `out` and never
/// aborts sibling targets.
pub fn list_target(
    target: &Target,
    options: &Options,
    identities: &dyn IdentitySource,
    out: &mut RunResult,
) {
    let info = match entry::resolve(&target.path) {
        Ok(info) => info,
        Err(source) => {
            out.errors.push(EngineError::Resolve {
                path: report_name(target).to_owned(),
                source,
            });
            return;
        }
    };

    if info.kind == FileKind::Directory {
        list_directory(target, options, identities, out);
    } else {
        out.lines
            .push(render::render_entry(&info, &target.display, options, identities));
    }
}

fn list_directory(
    target: &Target,
    options: &Options,
    identities: &dyn IdentitySource,
    out: &mut RunResult,
) {
    if !target.display.is_empty() {
        out.lines.push(format!("{}:", target.display));
    }

    let reader = match fs::read_dir(&target.path) {
        Ok(reader) => reader,
        Err(source) => {
            out.errors.push(EngineError::OpenDir {
                path: report_name(target).to_owned(),
                source,
            });
            return;
        }
    };

    // read_dir never yields the `.` and `..` pseudo-entries, so they are
    // produced here when requested. Other dot-prefixed names are always
    // listed; the hidden-entry option affects these two names only.
    if options.show_hidden {
        for name in [".", ".."] {
            list_child(&target.display, OsStr::new(name), options, identities, out);
        }
    }

    for child in reader {
        match child {
            Ok(child) => {
                list_child(&target.display, &child.file_name(), options, identities, out);
            }
            Err(source) => out.errors.push(EngineError::ReadDir {
                path: report_name(target).to_owned(),
                source,
            }),
        }
    }
}

fn list_child(
    prefix: &str,
    name: &OsStr,
    options: &Options,
    identities: &dyn IdentitySource,
    out: &mut RunResult,
) {
    let child = match join_child(prefix, name) {
        Ok(child) => child,
        Err(err) => {
            out.errors.push(err);
            return;
        }
    };

    match entry::resolve(&child.lookup) {
        Ok(info) => out
            .lines
            .push(render::render_entry(&info, &child.display, options, identities)),
        Err(source) => out.errors.push(EngineError::Resolve {
            path: child.display,
            source,
        }),
    }
}

// Errors on a target itself are attributed to the display name when there is
// one, else to the raw lookup path.
fn report_name(target: &Target) -> &str {
    if target.display.is_empty() {
        &target.path
    } else {
        &target.display
    }
}
