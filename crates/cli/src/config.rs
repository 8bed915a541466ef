// crates/cli/src/config.rs
use crate::args::Args;
pub use list_files_engine::config::Config;
use list_files_engine::options::{Options, Target};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let targets = if args.paths.is_empty() {
            // No arguments: list the current directory with an empty display
            // name, which suppresses the directory header.
            vec![Target::current_dir()]
        } else {
            args.paths.into_iter().map(Target::named).collect()
        };

        Self {
            targets,
            options: Options {
                long_format: args.long,
                show_hidden: args.all,
            },
        }
    }
}
