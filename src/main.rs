//! Command-line entry point: `worklistgen [--root DIR] <list>`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the list to generate (selects data/<name>.csv,
    /// lists/<name>.json and output/<name>.txt)
    list: Option<String>,

    /// Root directory containing the data/, lists/ and output/ directories
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let Some(name) = cli.list else {
        log::error!("No list specified");
        eprintln!("Usage: worklistgen [--root DIR] <list>");
        return ExitCode::FAILURE;
    };

    match worklistgen::generate_list(&cli.root, &name) {
        Ok(output) => {
            log::info!("Generated list '{name}' at {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
