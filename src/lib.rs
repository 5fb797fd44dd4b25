//! Exact-match, single-occurrence string replacement in one text file, with
//! read-back verification and rollback when the change does not persist.

pub mod cli;
pub mod error;
pub mod formatters;
pub mod replacer;
pub mod store;
pub mod types;

pub use error::{ErrorKind, ReplaceError};
pub use replacer::{Replacer, replace};
pub use store::{DiskStore, TextStore};
pub use types::{ReplaceReport, Replacement, VerifiedCounts};
