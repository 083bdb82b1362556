use std::process::ExitCode;

use clap::Parser;

use crate::cli::app::App;

mod cli;

fn main() -> ExitCode {
    let app = App::parse();
    cli::logging::init(app.verbose, app.quiet);

    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", console::style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
