use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File access used by the replacer. `DiskStore` is the real thing; tests swap in
/// wrappers that tamper with the file between steps.
pub trait TextStore {
    /// Resolve `path` to an absolute location. Errors if it does not exist.
    fn resolve(&self, path: &Path) -> io::Result<PathBuf>;

    /// Read the whole file as UTF-8.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Overwrite an existing file with `contents` and flush it to disk.
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl TextStore for DiskStore {
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        // No create: the target must still be there.
        let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }
}
