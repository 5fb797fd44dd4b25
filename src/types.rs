use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// What to replace. Immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old_string: String,
    pub new_string: String,
    pub verify: bool,
}

impl Replacement {
    pub fn new(old_string: impl Into<String>, new_string: impl Into<String>) -> Self {
        Replacement {
            old_string: old_string.into(),
            new_string: new_string.into(),
            verify: true,
        }
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Counts gathered after a successful read-back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerifiedCounts {
    pub new_string_count: usize,
    /// Occurrences in the original content minus the one replaced; not a re-scan.
    pub old_string_remaining: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplaceReport {
    /// Path as the caller gave it.
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
    #[serde(serialize_with = "lossy_path")]
    pub resolved_path: PathBuf,
    pub replaced: usize,
    /// Byte offset of the replaced occurrence in the original content.
    pub offset: usize,
    pub line: usize,
    pub verified: Option<VerifiedCounts>,
}

// Non-UTF-8 file names must not turn a finished replacement into an error.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_verifies_by_default() {
        let r = Replacement::new("a", "b");
        assert!(r.verify);
        assert!(!r.verify(false).verify);
    }

    #[test]
    fn json_shape_of_report() {
        let report = ReplaceReport {
            path: PathBuf::from("src/App.jsx"),
            resolved_path: PathBuf::from("/work/src/App.jsx"),
            replaced: 1,
            offset: 0,
            line: 1,
            verified: Some(VerifiedCounts {
                new_string_count: 1,
                old_string_remaining: 0,
            }),
        };
        let s = serde_json::to_string_pretty(&report).unwrap();
        assert!(s.contains("\"resolved_path\""));
        assert!(s.contains("\"replaced\": 1"));
        assert!(s.contains("\"new_string_count\": 1"));
        assert!(s.contains("\"old_string_remaining\": 0"));

        let unverified = ReplaceReport {
            verified: None,
            ..report
        };
        let s = serde_json::to_string(&unverified).unwrap();
        assert!(s.contains("\"verified\":null"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_serialize_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = PathBuf::from(OsStr::from_bytes(b"caf\xe9.txt"));
        let report = ReplaceReport {
            path: name.clone(),
            resolved_path: PathBuf::from("/work").join(&name),
            replaced: 1,
            offset: 0,
            line: 1,
            verified: None,
        };
        let s = serde_json::to_string(&report).unwrap();
        assert!(s.contains("caf\u{fffd}.txt"));
        assert!(s.contains("/work/caf\u{fffd}.txt"));
    }
}
