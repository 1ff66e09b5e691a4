use std::{error::Error, path::PathBuf};

use clap::Args;
use pyrefactor::refactor::{
    refactor_file, report::RefactorReport, AccumulatorMode, RefactorOptions,
};
use tracing::info;

const SEPARATOR_WIDTH: usize = 52;

const DISCLAIMER: &str = "\
Note: This is a simplified refactoring. It has significant limitations,
such as only handling simple print statements and single return paths.";

/// Strip `print` calls from one function and return their arguments instead.
#[derive(Args, Debug)]
pub struct RefactorArgs {
    /// Python source file to read; it is never modified
    #[arg(value_name = "PATH_TO_PYTHON_FILE")]
    pub file: PathBuf,

    /// Name of the function to rewrite (first match wins)
    #[arg(value_name = "FUNCTION_NAME")]
    pub function: String,

    /// How collected print arguments flow between nested blocks
    #[arg(long, value_enum, default_value_t = AccumulatorMode::Shared)]
    pub mode: AccumulatorMode,

    /// Print a JSON report instead of the text layout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RefactorArgs) -> Result<(), Box<dyn Error>> {
    let options = RefactorOptions { mode: args.mode };
    info!(file = %args.file.display(), function = %args.function, mode = %options.mode, "starting refactor");

    if !args.json {
        println!(
            "--- Refactoring function '{}' in '{}' ---",
            args.function,
            args.file.display()
        );
    }

    let refactored = refactor_file(&args.file, &args.function, &options)?;

    if args.json {
        let report = RefactorReport::new(&args.file, options.mode, &refactored);
        println!("{}", report.to_json()?);
    } else {
        println!("Refactored function:");
        println!("{}", refactored.source);
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
        println!();
        println!("{}", DISCLAIMER);
    }
    Ok(())
}
