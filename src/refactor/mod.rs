//! Print stripping: find one function, move its `print` arguments into its
//! return values, and render the result.

pub mod error;
pub mod locator;
pub mod print_extractor;
pub mod report;
pub mod source;

use core::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info};

use crate::python::{
    ast::{expr::Expr, stmt::FunctionDef},
    parser::parse_module,
    unparse::unparse_function,
};

use self::{
    error::RefactorError, locator::FunctionPath, print_extractor::PrintExtractor,
    source::SourceFile,
};

/// How collected print arguments flow between blocks of the function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AccumulatorMode {
    /// One accumulator for the whole body: a return sees every print visited
    /// before it in source order, whichever branch the print was in.
    #[default]
    Shared,
    /// Prints collected inside a nested block are forgotten when the block
    /// ends, so a return only sees prints from its own and enclosing blocks.
    Scoped,
}

impl fmt::Display for AccumulatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccumulatorMode::Shared => f.write_str("shared"),
            AccumulatorMode::Scoped => f.write_str("scoped"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RefactorOptions {
    pub mode: AccumulatorMode,
}

/// The rewritten function and what was done to it.
#[derive(Debug, Clone)]
pub struct Refactored {
    pub function: FunctionDef,
    /// Python source of the rewritten function.
    pub source: String,
    /// Print arguments collected over the whole traversal, in order.
    pub diagnostics: Vec<Expr>,
    pub removed_prints: usize,
    pub rewritten_returns: usize,
}

/// Parse `file`, rewrite the first function called `name` and render it.
pub fn refactor(
    file: &SourceFile,
    name: &str,
    options: &RefactorOptions,
) -> Result<Refactored, RefactorError> {
    let not_found = || RefactorError::FunctionNotFound {
        name: name.to_string(),
        path: file.path.clone(),
    };

    let mut module = parse_module(&file.text).map_err(|source| {
        debug!(path = %file.path.display(), pos = %source.pos(), "parse failed");
        RefactorError::Parse {
            path: file.path.clone(),
            source,
        }
    })?;

    let path = FunctionPath::locate(&module, name).ok_or_else(not_found)?;
    let def = path.resolve_mut(&mut module).ok_or_else(not_found)?;
    debug!(function = name, depth = path.depth(), "located function");

    let mut extractor = PrintExtractor::new(options.mode);
    extractor.rewrite(def);
    info!(
        function = name,
        mode = %options.mode,
        removed_prints = extractor.removed_prints(),
        rewritten_returns = extractor.rewritten_returns(),
        "rewrote function"
    );

    Ok(Refactored {
        source: unparse_function(def),
        function: def.clone(),
        diagnostics: extractor.collected().to_vec(),
        removed_prints: extractor.removed_prints(),
        rewritten_returns: extractor.rewritten_returns(),
    })
}

/// [`refactor`] on a file read from disk.
pub fn refactor_file(
    path: impl AsRef<std::path::Path>,
    name: &str,
    options: &RefactorOptions,
) -> Result<Refactored, RefactorError> {
    let file = SourceFile::read(path)?;
    refactor(&file, name, options)
}
