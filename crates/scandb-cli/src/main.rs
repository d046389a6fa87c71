//! scandb: interactive linear-scan search over the demo catalogs.

mod prompt;
mod render;
mod shell;

use clap::Parser;
use shell::Shell;
use std::process::ExitCode;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "scandb",
    version,
    about = "Interactive linear-scan search over the demo product and employee catalogs"
)]
struct Cli {
    /// Render query results as JSON instead of text blocks.
    #[arg(long, env = "SCANDB_JSON")]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match Shell::new(cli.json).and_then(|mut shell| shell.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scandb: {err}");
            ExitCode::FAILURE
        }
    }
}
