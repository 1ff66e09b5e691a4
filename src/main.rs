mod commands;

use clap::{error::ErrorKind, Parser};
use commands::refactor;
use std::error::Error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pyrefactor")]
#[command(author, version, about = "Move print() output of a Python function into its return value")]
struct Cli {
    #[command(flatten)]
    args: refactor::RefactorArgs,
}

impl Cli {
    fn run(self) -> Result<(), Box<dyn Error>> {
        refactor::run(self.args)
    }
}

fn main() {
    // Logs go to stderr so stdout only carries the rewritten code (e.g. PYREFACTOR_LOG=debug)
    let filter = match EnvFilter::try_from_env("PYREFACTOR_LOG") {
        Ok(f) => f,
        Err(_) => EnvFilter::new("warn"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
