//! Entities: the things a player can name.
//!
//! An entity's scalar state lives in [`EntityState`]. The copy taken when
//! the entity is created is kept as its baseline; [`Entity::changes`]
//! reports the fields that differ from it and [`Entity::reset`] puts it
//! back. Computed text (descriptions that depend on the world) is held
//! beside the state and never diffed.

use std::fmt;
use std::rc::Rc;

use fabula_foundation::Result;

use crate::DESTROYED;
use crate::fields::{Diff, Stateful, diff_fields, stateful_fields};
use crate::world::World;

/// Text computed from the entity and the current world.
pub type EntityText = Rc<dyn Fn(&Entity, &World) -> String>;

/// Diffable state of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityState {
    /// Display name. Defaults to the entity key.
    pub name: String,
    /// Noun used to refer to the entity. Defaults to the last word of the name.
    pub noun: String,
    /// Optional adjective distinguishing it from entities with the same noun.
    pub adjective: Option<String>,
    /// A location key, another entity's key, `inventory`, or `destroyed`.
    pub location: String,
    /// Static description.
    pub description: Option<String>,
    /// Parenthesised detail appended to the name.
    pub details: Option<String>,
    /// Detail used instead of `details` in inventory listings.
    pub inventory_details: Option<String>,
    /// The name is a proper noun and takes no article.
    pub proper: bool,
    /// The name is a collective noun ("coins"), taking no indefinite article.
    pub many: bool,
    /// Can be worn.
    pub wearable: bool,
    /// Currently worn.
    pub worn: bool,
    /// Holds other entities.
    pub container: bool,
    /// Can be opened and closed.
    pub openable: bool,
    /// Currently open.
    pub open: bool,
    /// Part of the scenery; cannot be taken.
    pub scenery: bool,
    /// Not listed in location descriptions.
    pub hidden: bool,
    /// Can be sat on.
    pub sitting: bool,
    /// Can be laid on.
    pub laying: bool,
    /// Has been mentioned to the player.
    pub seen: bool,
}

impl Default for EntityState {
    fn default() -> Self {
        Self {
            name: String::new(),
            noun: String::new(),
            adjective: None,
            location: DESTROYED.to_string(),
            description: None,
            details: None,
            inventory_details: None,
            proper: false,
            many: false,
            wearable: false,
            worn: false,
            container: false,
            openable: false,
            open: false,
            scenery: false,
            hidden: false,
            sitting: false,
            laying: false,
            seen: false,
        }
    }
}

stateful_fields!(EntityState, "entity" {
    name, noun, adjective, location, description, details, inventory_details,
    proper, many, wearable, worn, container, openable, open, scenery, hidden,
    sitting, laying, seen,
});

impl EntityState {
    /// Creates a state with the given display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Places the entity.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the noun explicitly.
    #[must_use]
    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = noun.into();
        self
    }

    /// Sets the adjective.
    #[must_use]
    pub fn with_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.adjective = Some(adjective.into());
        self
    }

    /// Sets the static description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the static details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Marks the entity as wearable.
    #[must_use]
    pub fn wearable(mut self) -> Self {
        self.wearable = true;
        self
    }

    /// Marks the entity as scenery.
    #[must_use]
    pub fn scenery(mut self) -> Self {
        self.scenery = true;
        self
    }

    /// Hides the entity from location listings.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Marks the name as a proper noun.
    #[must_use]
    pub fn proper(mut self) -> Self {
        self.proper = true;
        self
    }

    /// Marks the name as a collective noun.
    #[must_use]
    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }

    /// Marks the entity as a container.
    #[must_use]
    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }

    /// Makes the entity openable, initially open or closed.
    #[must_use]
    pub fn openable(mut self, open: bool) -> Self {
        self.openable = true;
        self.open = open;
        self
    }

    /// Makes the entity something to sit on.
    #[must_use]
    pub fn seat(mut self) -> Self {
        self.sitting = true;
        self
    }

    /// Makes the entity something to lie on.
    #[must_use]
    pub fn bed(mut self) -> Self {
        self.laying = true;
        self
    }
}

/// An entity with its load-time baseline and computed text.
#[derive(Clone)]
pub struct Entity {
    key: String,
    /// Current state.
    pub state: EntityState,
    baseline: EntityState,
    describe: Option<EntityText>,
    details: Option<EntityText>,
    inventory_details: Option<EntityText>,
}

impl Entity {
    /// Creates an entity, filling in a missing name and noun.
    ///
    /// The finished state becomes the baseline.
    #[must_use]
    pub fn new(key: impl Into<String>, mut state: EntityState) -> Self {
        let key = key.into();
        if state.name.is_empty() {
            state.name.clone_from(&key);
        }
        if state.noun.is_empty() {
            state.noun = state
                .name
                .rsplit(' ')
                .next()
                .unwrap_or_default()
                .to_string();
        }
        Self {
            key,
            baseline: state.clone(),
            state,
            describe: None,
            details: None,
            inventory_details: None,
        }
    }

    /// Uses a computed description instead of the static one.
    #[must_use]
    pub fn with_describe(mut self, f: impl Fn(&Entity, &World) -> String + 'static) -> Self {
        self.describe = Some(Rc::new(f));
        self
    }

    /// Uses computed details instead of the static ones.
    #[must_use]
    pub fn with_computed_details(mut self, f: impl Fn(&Entity, &World) -> String + 'static) -> Self {
        self.details = Some(Rc::new(f));
        self
    }

    /// Uses computed inventory details instead of the static ones.
    #[must_use]
    pub fn with_computed_inventory_details(
        mut self,
        f: impl Fn(&Entity, &World) -> String + 'static,
    ) -> Self {
        self.inventory_details = Some(Rc::new(f));
        self
    }

    /// Returns the identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the load-time state.
    #[must_use]
    pub fn baseline(&self) -> &EntityState {
        &self.baseline
    }

    /// Restores the load-time state.
    pub fn reset(&mut self) {
        self.state = self.baseline.clone();
    }

    /// Returns the fields that differ from the baseline.
    #[must_use]
    pub fn changes(&self) -> Diff {
        diff_fields(&self.state, &self.baseline)
    }

    /// Applies a diff on top of the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff names an unknown field or carries a
    /// value of the wrong shape.
    pub fn apply_changes(&mut self, diff: &Diff) -> Result<()> {
        self.state
            .apply(diff)
            .map_err(|e| e.with_context(format!("entity '{}'", self.key)))
    }

    /// Returns the description, computed if a function was supplied.
    #[must_use]
    pub fn description(&self, world: &World) -> Option<String> {
        match &self.describe {
            Some(f) => Some(f(self, world)),
            None => self.state.description.clone(),
        }
    }

    /// Returns the name followed by its details in parentheses, if any.
    ///
    /// In inventory mode the inventory details are preferred.
    #[must_use]
    pub fn full_name(&self, inventory_mode: bool, world: &World) -> String {
        let details = if inventory_mode {
            self.inventory_details_text(world)
                .or_else(|| self.details_text(world))
        } else {
            self.details_text(world)
        };
        match details {
            Some(d) if !d.is_empty() => format!("{} ({d})", self.state.name),
            _ => self.state.name.clone(),
        }
    }

    fn details_text(&self, world: &World) -> Option<String> {
        match &self.details {
            Some(f) => Some(f(self, world)),
            None => self.state.details.clone(),
        }
    }

    fn inventory_details_text(&self, world: &World) -> Option<String> {
        match &self.inventory_details {
            Some(f) => Some(f(self, world)),
            None => self.state.inventory_details.clone(),
        }
    }

    /// True if things inside this entity cannot be reached.
    ///
    /// A container always blocks; anything else blocks only while it is
    /// openable and shut.
    #[must_use]
    pub fn blocks_reach(&self) -> bool {
        self.state.container || (self.state.openable && !self.state.open)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
