use std::path::Path;

use crate::error::ReplaceError;
use crate::store::{DiskStore, TextStore};
use crate::types::{ReplaceReport, Replacement, VerifiedCounts};

/// How much of the searched text a `NoMatch` error echoes back.
const PREVIEW_CHARS: usize = 100;

/// Replaces the first occurrence of `old_string` in the file at `path` on disk.
///
/// # Errors
/// See [`Replacer::replace`].
pub fn replace(
    path: impl AsRef<Path>,
    old_string: &str,
    new_string: &str,
    verify: bool,
) -> Result<ReplaceReport, ReplaceError> {
    let replacement = Replacement::new(old_string, new_string).verify(verify);
    Replacer::new().replace(path.as_ref(), &replacement)
}

#[derive(Debug, Clone, Default)]
pub struct Replacer<S = DiskStore> {
    store: S,
}

impl Replacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: TextStore> Replacer<S> {
    pub fn with_store(store: S) -> Self {
        Replacer { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces exactly one occurrence (the first) of `old_string`, writes the
    /// result with a durability flush, and optionally reads it back.
    ///
    /// If the read-back no longer contains `new_string` the original content is
    /// written back before returning. A failed rollback is logged, not returned.
    ///
    /// # Errors
    /// Returns the first failing step as a [`ReplaceError`]. Failures before the
    /// write leave the file untouched; `Write` and `VerifyRead` leave the new
    /// content in place.
    pub fn replace(
        &self,
        path: &Path,
        replacement: &Replacement,
    ) -> Result<ReplaceReport, ReplaceError> {
        let old = replacement.old_string.as_str();
        let new = replacement.new_string.as_str();
        if old.is_empty() {
            return Err(ReplaceError::EmptyOldString);
        }

        let resolved = self.store.resolve(path).map_err(|e| {
            log::debug!("cannot resolve {}: {e}", path.display());
            ReplaceError::NotFound {
                path: path.to_path_buf(),
            }
        })?;
        log::info!("resolved {} -> {}", path.display(), resolved.display());

        let original = self
            .store
            .read_text(&resolved)
            .map_err(|source| ReplaceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("read {} bytes", original.len());

        let Some(offset) = find_first(&original, old) else {
            return Err(ReplaceError::NoMatch {
                path: path.to_path_buf(),
                preview: preview(old),
            });
        };
        let candidate = splice(&original, offset, old.len(), new);
        if candidate == original {
            return Err(ReplaceError::NoOpRejected {
                path: path.to_path_buf(),
            });
        }
        let line = line_of(&original, offset);
        log::debug!("first occurrence at byte {offset} (line {line})");

        self.store
            .write_text(&resolved, &candidate)
            .map_err(|source| ReplaceError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("wrote {} bytes to {}", candidate.len(), resolved.display());

        let mut report = ReplaceReport {
            path: path.to_path_buf(),
            resolved_path: resolved,
            replaced: 1,
            offset,
            line,
            verified: None,
        };
        if !replacement.verify {
            log::info!("skipping verification");
            return Ok(report);
        }

        let verified = self
            .store
            .read_text(&report.resolved_path)
            .map_err(|source| ReplaceError::VerifyRead {
                path: path.to_path_buf(),
                source,
            })?;
        if !verified.contains(new) {
            log::warn!(
                "new string missing from {} after write, restoring original content",
                report.resolved_path.display()
            );
            let rolled_back = self.rollback(&report.resolved_path, &original);
            return Err(ReplaceError::VerificationFailed {
                path: path.to_path_buf(),
                rolled_back,
            });
        }

        report.verified = Some(VerifiedCounts {
            new_string_count: verified.matches(new).count(),
            old_string_remaining: original.matches(old).count().saturating_sub(1),
        });
        log::info!("verified {}", report.resolved_path.display());
        Ok(report)
    }

    fn rollback(&self, path: &Path, original: &str) -> bool {
        match self.store.write_text(path, original) {
            Ok(()) => {
                log::info!("restored original content of {}", path.display());
                true
            }
            Err(e) => {
                log::warn!("rollback of {} failed: {e}", path.display());
                false
            }
        }
    }
}

fn find_first(hay: &str, needle: &str) -> Option<usize> {
    memchr::memmem::find(hay.as_bytes(), needle.as_bytes())
}

fn splice(original: &str, offset: usize, len: usize, with: &str) -> String {
    let mut out = String::with_capacity(original.len() - len + with.len());
    out.push_str(&original[..offset]);
    out.push_str(with);
    out.push_str(&original[offset + len..]);
    out
}

fn line_of(content: &str, offset: usize) -> usize {
    memchr::memchr_iter(b'\n', &content.as_bytes()[..offset]).count() + 1
}

fn preview(s: &str) -> String {
    s.chars().take(PREVIEW_CHARS).collect()
}
