//! Differential save state.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::Diff;

/// Everything that differs from the load-time baselines.
///
/// A field absent from a diff equals its baseline value, so a snapshot is
/// only meaningful against the world it was taken from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaveState {
    /// Per-entity diffs, keyed by entity key.
    pub entities: BTreeMap<String, Diff>,
    /// Per-location diffs, keyed by location key.
    pub locations: BTreeMap<String, Diff>,
    /// Player diff.
    pub player: Diff,
    /// Variables diff.
    pub variables: Diff,
}

impl SaveState {
    /// True if nothing differs from the baselines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.locations.is_empty()
            && self.player.is_empty()
            && self.variables.is_empty()
    }
}
