use clap::Parser;
use list_files_cli::args::Args;
use list_files_cli::config::Config;
use list_files_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    let result = list_files_engine::run(&config);

    presentation::report_errors(&result);
    presentation::print_results(&result);

    if result.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
