use std::{io, path::PathBuf};

use thiserror::Error;

use crate::python::parser::errors::ParseError;

/// Why a refactoring run stopped. Every variant is terminal for the run.
#[derive(Debug, Error)]
pub enum RefactorError {
    #[error("Could not read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Function '{name}' not found in '{}'.", path.display())]
    FunctionNotFound { name: String, path: PathBuf },
}
