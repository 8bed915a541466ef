// crates/engine/src/config.rs
use crate::options::{Options, Target};
use derive_builder::Builder;

/// Immutable run configuration, constructed once at startup and passed by
/// reference into the engine. An empty target list stands for the implicit
/// current-directory target.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), default)]
pub struct Config {
    pub targets: Vec<Target>,
    pub options: Options,
}
