// crates/engine/src/lib.rs

pub mod config;
pub mod entry;
pub mod error;
pub mod identity;
pub mod lister;
pub mod options;
pub mod render;

use crate::config::Config;
use crate::identity::{IdentitySource, SystemIdentities};
use crate::lister::RunResult;
use crate::options::Target;

/// Runs the lister over every configured target, resolving owner and group
/// names through the system identity database.
///
/// Never fails as a whole: per-target and per-child errors are collected in
/// [`RunResult::errors`] and the caller decides the process exit status.
pub fn run(config: &Config) -> RunResult {
    run_with_identities(config, &SystemIdentities)
}

/// Same as [`run`], with an explicit identity source. Tests use this with a
/// fixed mapping to keep long-format output deterministic.
pub fn run_with_identities(config: &Config, identities: &dyn IdentitySource) -> RunResult {
    let mut result = RunResult::default();

    if config.targets.is_empty() {
        lister::list_target(&Target::current_dir(), &config.options, identities, &mut result);
    } else {
        for target in &config.targets {
            lister::list_target(target, &config.options, identities, &mut result);
        }
    }

    result
}
