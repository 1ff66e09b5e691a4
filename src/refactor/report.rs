use std::path::Path;

use serde::Serialize;

use super::{AccumulatorMode, Refactored};

/// Machine-readable summary of one run, printed by `--json`.
#[derive(Debug, Serialize)]
pub struct RefactorReport<'a> {
    pub function: &'a str,
    pub file: String,
    pub mode: AccumulatorMode,
    pub removed_prints: usize,
    pub rewritten_returns: usize,
    pub source: &'a str,
}

impl<'a> RefactorReport<'a> {
    pub fn new(file: &Path, mode: AccumulatorMode, refactored: &'a Refactored) -> Self {
        RefactorReport {
            function: &refactored.function.name,
            file: file.display().to_string(),
            mode,
            removed_prints: refactored.removed_prints,
            rewritten_returns: refactored.rewritten_returns,
            source: &refactored.source,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
