use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a single replacement can fail. All variants are terminal.
#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("old string must not be empty")]
    EmptyOldString,

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("old string not found in {}\n   searched for: {preview}...", path.display())]
    NoMatch { path: PathBuf, preview: String },

    #[error("replacement would produce no change in {}", path.display())]
    NoOpRejected { path: PathBuf },

    #[error("failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("verification read failed for {}: {source}", path.display())]
    VerifyRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "verification failed: change did not persist in {}{}",
        path.display(),
        if *rolled_back { " (original content restored)" } else { " (rollback failed)" }
    )]
    VerificationFailed { path: PathBuf, rolled_back: bool },
}

/// Fieldless mirror of [`ReplaceError`] for matching on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyOldString,
    NotFound,
    Read,
    NoMatch,
    NoOpRejected,
    Write,
    VerifyRead,
    VerificationFailed,
}

impl ReplaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyOldString => ErrorKind::EmptyOldString,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Read { .. } => ErrorKind::Read,
            Self::NoMatch { .. } => ErrorKind::NoMatch,
            Self::NoOpRejected { .. } => ErrorKind::NoOpRejected,
            Self::Write { .. } => ErrorKind::Write,
            Self::VerifyRead { .. } => ErrorKind::VerifyRead,
            Self::VerificationFailed { .. } => ErrorKind::VerificationFailed,
        }
    }

    /// True when the failure came at or after the write step, so the file may
    /// no longer hold its original content. False means it was never touched.
    pub fn may_have_modified_file(&self) -> bool {
        matches!(
            self,
            Self::Write { .. } | Self::VerifyRead { .. } | Self::VerificationFailed { .. }
        )
    }
}
