//! # Storage Layer
//!
//! The [`DataStore`] trait is the only place that touches persistence. It deals
//! in whole files: raw bytes in, text out. Decoding and the CSV encoding
//! live in [`crate::format`].
//!
//! ## Design Rationale
//!
//! Storage sits behind a trait so that:
//! - Load/save commands are **testable** with `InMemoryStore` (no filesystem)
//! - File failures can be **simulated** in tests
//! - The codec stays independent of where bytes come from
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: reads and writes real files, relative paths resolved
//!   against the working directory.
//! - [`memory::InMemoryStore`]: a map of path to contents, for tests.
//!
//! Every call opens and releases its handle before returning, on both the
//! success and the failure path.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-file storage.
pub trait DataStore {
    /// Read the full contents at `path`, undecoded.
    ///
    /// Fails with [`RosterError::FileOpen`](crate::error::RosterError::FileOpen)
    /// when the file cannot be opened.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the contents at `path`, creating the file if needed.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}
