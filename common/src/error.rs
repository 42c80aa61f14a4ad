use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure modes of a report pipeline. Only [`ReportError::MissingInput`] is
/// recoverable: the driver skips that report and moves on. Everything else
/// propagates and fails the run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input file missing: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("{}:{line}: malformed record: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("failed to render {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
