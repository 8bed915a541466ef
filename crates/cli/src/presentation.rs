// crates/cli/src/presentation.rs
use list_files_engine::lister::RunResult;

/// Writes every diagnostic to stderr in the `path: reason` form.
pub fn report_errors(result: &RunResult) {
    for err in &result.errors {
        eprintln!("{err}");
    }
}

/// Writes the rendered listing to stdout, one entry per line.
pub fn print_results(result: &RunResult) {
    for line in &result.lines {
        println!("{line}");
    }
}
