//! The persisted slot: a durable, string-valued key-value location.
//!
//! The slot holds the serialized cart across restarts. It is a raw string
//! store; encoding and strict decoding live in the cart store, which is the
//! only writer.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a slot backend.
#[derive(Debug, Error)]
pub enum SlotError {
    /// The backing storage could not be read or written.
    #[error("slot I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A durable key-value slot holding one string value.
///
/// Implementations must treat `store` as a wholesale overwrite; there is no
/// incremental format.
pub trait CartSlot {
    /// Read the current value. Returns `None` if the slot has never been
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, SlotError>;

    /// Overwrite the slot with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if the backing storage cannot be written.
    fn store(&mut self, value: &str) -> Result<(), SlotError>;
}

/// File-backed slot used by the server binary.
///
/// A missing file is an absent slot, not an error; parent directories are
/// created on first write.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartSlot for FileSlot {
    fn load(&self) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, value: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// In-memory slot for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// Create an empty (never written) slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Create a slot pre-seeded with a value.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// The current raw value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl CartSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>, SlotError> {
        Ok(self.value.clone())
    }

    fn store(&mut self, value: &str) -> Result<(), SlotError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}
