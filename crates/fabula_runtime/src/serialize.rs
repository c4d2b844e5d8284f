//! Save-state serialization using `MessagePack`.
//!
//! A [`SaveState`] holds only the fields that differ from the load-time
//! baselines, so a save file is small and only meaningful for the story
//! it was written from.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use fabula_engine::SaveStore;
use fabula_foundation::{Error, ErrorKind, Result};
use fabula_world::SaveState;

/// Serializes a save state to bytes, keeping field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &SaveState) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(state).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a save state from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a save state.
pub fn from_bytes(bytes: &[u8]) -> Result<SaveState> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!("failed to {action} '{}': {e}", path.display())))
}

/// Writes a save state to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &SaveState, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(state)?;
    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| io_error("write", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;
    Ok(())
}

/// Reads a save state from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SaveState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;
    from_bytes(&bytes)
}

/// A save slot backed by a file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a slot at the given path. Nothing is written yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file behind the slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<Option<SaveState>> {
        if !self.exists() {
            return Ok(None);
        }
        load_from_file(&self.path).map(Some)
    }

    fn store(&mut self, state: &SaveState) -> Result<()> {
        save_to_file(state, &self.path)?;
        tracing::debug!(path = %self.path.display(), "save written");
        Ok(())
    }
}
