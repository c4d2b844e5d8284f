//! The save-slot boundary.

use fabula_foundation::Result;
use fabula_world::SaveState;

/// A single save slot.
pub trait SaveStore {
    /// True if the slot holds a saved game.
    fn exists(&self) -> bool;

    /// Reads the saved game, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<SaveState>>;

    /// Writes a saved game, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    fn store(&mut self, state: &SaveState) -> Result<()>;
}

/// A save slot held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<SaveState>,
}

impl MemoryStore {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn exists(&self) -> bool {
        self.slot.is_some()
    }

    fn load(&self) -> Result<Option<SaveState>> {
        Ok(self.slot.clone())
    }

    fn store(&mut self, state: &SaveState) -> Result<()> {
        self.slot = Some(state.clone());
        Ok(())
    }
}
