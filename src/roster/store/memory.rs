use super::DataStore;
use crate::error::{Result, RosterError};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing whatever was there.
    pub fn insert_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    /// The stored contents, if present and valid UTF-8.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files
            .get(path.as_ref())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Make every subsequent write fail as if the file could not be opened.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RosterError::FileOpen {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(RosterError::FileOpen {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "simulated"),
            });
        }
        self.files.insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::StudentFields;
    use crate::roster::Roster;

    /// Builder for a roster plus a store, pre-populated for command tests.
    pub struct RosterFixture {
        pub roster: Roster,
        pub store: InMemoryStore,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self {
                roster: Roster::new(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, name: &str, age: i32, gpa: f64) -> Self {
            self.roster.add(StudentFields::new(name, age, gpa));
            self
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Student {}", i + 1);
                self.roster.add(StudentFields::new(name, 18 + i as i32, 3.0));
            }
            self
        }

        pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
            self.store.insert_file(path, contents);
            self
        }
    }
}
