use super::DataStore;
use crate::error::{Result, RosterError};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Filesystem-backed store. Relative paths resolve against the process
/// working directory.
#[derive(Debug, Default, Clone)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl DataStore for FileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|source| RosterError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let file = File::create(path).map_err(|source| RosterError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|source| RosterError::FileWrite {
                path: path.to_path_buf(),
                source,
            })
    }
}
