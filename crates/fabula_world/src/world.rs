//! The world: every entity and location, the player, and the variables.
//!
//! Records are stored in persistent vectors with key indexes, so cloning a
//! world for a snapshot or a test fixture is cheap.

use im::{HashMap, Vector};
use tracing::{debug, warn};

use fabula_foundation::Result;

use crate::character::Character;
use crate::entity::Entity;
use crate::fields::{Stateful, diff_fields};
use crate::location::Location;
use crate::save::SaveState;
use crate::variables::Variables;
use crate::{DESTROYED, INVENTORY};

/// Owner of all world state.
#[derive(Clone, Debug, Default)]
pub struct World {
    entities: Vector<Entity>,
    entity_index: HashMap<String, usize>,
    locations: Vector<Location>,
    location_index: HashMap<String, usize>,
    /// The player.
    pub player: Character,
    /// Adventure-wide variables.
    pub variables: Variables,
    variables_baseline: Variables,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Records ---

    /// Adds an entity. An entity with the same key is replaced.
    pub fn add_entity(&mut self, entity: Entity) {
        let key = entity.key().to_string();
        if let Some(&index) = self.entity_index.get(&key) {
            warn!(key = %key, "entity redefined; replacing earlier definition");
            self.entities[index] = entity;
        } else {
            self.entity_index.insert(key, self.entities.len());
            self.entities.push_back(entity);
        }
    }

    /// Adds a location. A location with the same key is replaced.
    pub fn add_location(&mut self, location: Location) {
        let key = location.key().to_string();
        if let Some(&index) = self.location_index.get(&key) {
            warn!(key = %key, "location redefined; replacing earlier definition");
            self.locations[index] = location;
        } else {
            self.location_index.insert(key, self.locations.len());
            self.locations.push_back(location);
        }
    }

    /// Looks up an entity by key.
    #[must_use]
    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entity_index.get(key).and_then(|&i| self.entities.get(i))
    }

    /// Looks up an entity by key for mutation.
    pub fn entity_mut(&mut self, key: &str) -> Option<&mut Entity> {
        let index = *self.entity_index.get(key)?;
        self.entities.get_mut(index)
    }

    /// Looks up a location by key.
    #[must_use]
    pub fn location(&self, key: &str) -> Option<&Location> {
        self.location_index.get(key).and_then(|&i| self.locations.get(i))
    }

    /// Looks up a location by key for mutation.
    pub fn location_mut(&mut self, key: &str) -> Option<&mut Location> {
        let index = *self.location_index.get(key)?;
        self.locations.get_mut(index)
    }

    /// Iterates over entities in definition order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterates over locations in definition order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Returns the player's current location, if it exists.
    #[must_use]
    pub fn here(&self) -> Option<&Location> {
        self.location(self.player.location())
    }

    /// Moves an entity. Returns false if the key is unknown.
    pub fn move_entity(&mut self, key: &str, destination: impl Into<String>) -> bool {
        match self.entity_mut(key) {
            Some(entity) => {
                entity.state.location = destination.into();
                true
            }
            None => false,
        }
    }

    // --- Reachability ---

    /// Entities directly at a location (or inside an entity) with this key.
    #[must_use]
    pub fn objects_at(&self, place: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.state.location == place).collect()
    }

    /// Entities the player is carrying.
    #[must_use]
    pub fn inventory(&self) -> Vec<&Entity> {
        self.objects_at(INVENTORY)
    }

    /// Entities that are carried or reachable from here.
    #[must_use]
    pub fn objects_here(&self) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| self.in_reach(&e.state.location))
            .collect()
    }

    /// True if the entity is carried or reachable from here.
    #[must_use]
    pub fn present(&self, key: &str) -> bool {
        self.entity(key).is_some_and(|e| self.in_reach(&e.state.location))
    }

    /// True if something placed at `place` can be reached by the player.
    ///
    /// `place` may be a location key, `inventory`, `destroyed`, or the key
    /// of a containing entity. Containment is followed outwards; a
    /// container, or a shut openable thing, anywhere on the way blocks reach.
    #[must_use]
    pub fn in_reach(&self, place: &str) -> bool {
        let mut place = place;
        // A containment cycle cannot be deeper than the entity count.
        for _ in 0..=self.entities.len() {
            if place == INVENTORY {
                return true;
            }
            if place == DESTROYED {
                return false;
            }
            if let Some(location) = self.location(place) {
                return self.location_in_reach(location);
            }
            let Some(container) = self.entity(place) else {
                return false;
            };
            if container.blocks_reach() {
                return false;
            }
            place = &container.state.location;
        }
        warn!(place = %place, "containment cycle while testing reach");
        false
    }

    /// True if `target` is the player's location or covered by its reach rule.
    #[must_use]
    pub fn location_in_reach(&self, target: &Location) -> bool {
        if target.key() == self.player.location() {
            return true;
        }
        self.here()
            .is_some_and(|here| here.reach().includes(target, self))
    }

    // --- Save state ---

    /// Takes the current player and variables as their baselines.
    pub fn capture_baseline(&mut self) {
        self.player.rebase();
        self.variables_baseline = self.variables.clone();
    }

    /// Resets every record to its baseline.
    pub fn reset(&mut self) {
        for entity in self.entities.iter_mut() {
            entity.reset();
        }
        for location in self.locations.iter_mut() {
            location.reset();
        }
        self.player.reset();
        self.variables = self.variables_baseline.clone();
    }

    /// Captures every difference from the baselines.
    #[must_use]
    pub fn serialize(&self) -> SaveState {
        let mut save = SaveState::default();
        for entity in &self.entities {
            let diff = entity.changes();
            if !diff.is_empty() {
                save.entities.insert(entity.key().to_string(), diff);
            }
        }
        for location in &self.locations {
            let diff = location.changes();
            if !diff.is_empty() {
                save.locations.insert(location.key().to_string(), diff);
            }
        }
        save.player = self.player.changes();
        save.variables = diff_fields(&self.variables, &self.variables_baseline);
        debug!(
            entities = save.entities.len(),
            locations = save.locations.len(),
            "serialized world"
        );
        save
    }

    /// Resets the world and replays a snapshot onto it.
    ///
    /// Records named in the snapshot that no longer exist are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a diff names an unknown field or carries a value
    /// of the wrong shape. The world is left partially restored.
    pub fn restore(&mut self, save: &SaveState) -> Result<()> {
        self.reset();
        for (key, diff) in &save.entities {
            match self.entity_mut(key) {
                Some(entity) => entity.apply_changes(diff)?,
                None => warn!(key = %key, "saved entity no longer exists; skipped"),
            }
        }
        for (key, diff) in &save.locations {
            match self.location_mut(key) {
                Some(location) => location.apply_changes(diff)?,
                None => warn!(key = %key, "saved location no longer exists; skipped"),
            }
        }
        self.player.apply_changes(&save.player)?;
        self.variables
            .apply(&save.variables)
            .map_err(|e| e.with_context("variables"))?;
        debug!("restored world");
        Ok(())
    }
}
