//! Story modules.
//!
//! A [`Module`] bundles everything one layer of a story contributes:
//! vocabulary, entities, locations, responses, areas and hooks. The engine
//! loads modules in order; later modules see the words of earlier ones.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use fabula_foundation::TurnResult;
use fabula_parser::{Order, WordTables};
use fabula_world::{Entity, EntityState, ExitHint, Location, LocationState, Reach, World};

use crate::engine::Engine;
use crate::hooks::{EntityHooks, LocationHooks, ModuleHooks};
use crate::response::{Response, Responses};

// =============================================================================
// Entities
// =============================================================================

/// An entity with its behaviour.
pub struct EntityDef {
    /// The world record.
    pub entity: Entity,
    /// Hooks.
    pub hooks: EntityHooks,
    /// Responses that apply while the entity is the present first object.
    pub responses: Responses,
}

impl EntityDef {
    /// Creates an entity definition with no behaviour.
    #[must_use]
    pub fn new(key: impl Into<String>, state: EntityState) -> Self {
        Self {
            entity: Entity::new(key, state),
            hooks: EntityHooks::default(),
            responses: Responses::new(),
        }
    }

    /// Builder method to compute the description.
    #[must_use]
    pub fn describe(mut self, f: impl Fn(&Entity, &World) -> String + 'static) -> Self {
        self.entity = self.entity.with_describe(f);
        self
    }

    /// Builder method to compute the details shown after the name.
    #[must_use]
    pub fn details(mut self, f: impl Fn(&Entity, &World) -> String + 'static) -> Self {
        self.entity = self.entity.with_computed_details(f);
        self
    }

    /// Builder method to add a response.
    #[must_use]
    pub fn respond(mut self, key: impl Into<String>, response: impl Into<Response>) -> Self {
        self.responses.insert(key, response);
        self
    }

    /// Builder method to set the condition.
    #[must_use]
    pub fn conditions(mut self, f: impl Fn(&Engine, &str) -> bool + 'static) -> Self {
        self.hooks.conditions = Some(Rc::new(f));
        self
    }

    /// Builder method to set the before hook.
    #[must_use]
    pub fn before(mut self, f: impl Fn(&mut Engine, &mut Order, &str) -> TurnResult + 'static) -> Self {
        self.hooks.before = Some(Rc::new(f));
        self
    }

    /// Builder method to set the execute hook.
    #[must_use]
    pub fn execute(mut self, f: impl Fn(&mut Engine, &mut Order, &str) -> TurnResult + 'static) -> Self {
        self.hooks.execute = Some(Rc::new(f));
        self
    }

    /// Builder method to set the after-turn hook.
    #[must_use]
    pub fn after_turn(
        mut self,
        f: impl Fn(&mut Engine, &Order, &str) -> Option<TurnResult> + 'static,
    ) -> Self {
        self.hooks.after_turn = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for EntityDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDef")
            .field("entity", &self.entity)
            .field("responses", &self.responses.entries().len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Locations
// =============================================================================

/// A location with its behaviour.
pub struct LocationDef {
    /// The world record.
    pub location: Location,
    /// Hooks.
    pub hooks: LocationHooks,
    /// Responses that apply while the player is here.
    pub responses: Responses,
}

impl LocationDef {
    /// Creates a location definition with no behaviour.
    #[must_use]
    pub fn new(key: impl Into<String>, state: LocationState) -> Self {
        Self {
            location: Location::new(key, state),
            hooks: LocationHooks::default(),
            responses: Responses::new(),
        }
    }

    /// Builder method to compute the description.
    #[must_use]
    pub fn describe(mut self, f: impl Fn(&Location, &World) -> String + 'static) -> Self {
        self.location = self.location.with_describe(f);
        self
    }

    /// Builder method to rename an exit.
    #[must_use]
    pub fn exit_name(mut self, direction: impl Into<String>, name: impl Into<String>) -> Self {
        self.location = self.location.with_exit_name(direction, name);
        self
    }

    /// Builder method to add an exit hint.
    #[must_use]
    pub fn hint(mut self, direction: impl Into<String>, hint: impl Into<String>) -> Self {
        self.location = self.location.with_hint(direction, ExitHint::Text(hint.into()));
        self
    }

    /// Builder method to set the reach rule.
    #[must_use]
    pub fn reach(mut self, reach: Reach) -> Self {
        self.location = self.location.with_reach(reach);
        self
    }

    /// Builder method to join an area.
    #[must_use]
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.location = self.location.in_area(area);
        self
    }

    /// Builder method to add a response.
    #[must_use]
    pub fn respond(mut self, key: impl Into<String>, response: impl Into<Response>) -> Self {
        self.responses.insert(key, response);
        self
    }

    /// Builder method to set the condition.
    #[must_use]
    pub fn conditions(mut self, f: impl Fn(&Engine) -> bool + 'static) -> Self {
        self.hooks.conditions = Some(Rc::new(f));
        self
    }

    /// Builder method to set the before hook.
    #[must_use]
    pub fn before(mut self, f: impl Fn(&mut Engine, &mut Order) -> TurnResult + 'static) -> Self {
        self.hooks.before = Some(Rc::new(f));
        self
    }

    /// Builder method to set the execute hook.
    #[must_use]
    pub fn execute(mut self, f: impl Fn(&mut Engine, &mut Order) -> TurnResult + 'static) -> Self {
        self.hooks.execute = Some(Rc::new(f));
        self
    }

    /// Builder method to run something after this location is described.
    #[must_use]
    pub fn after_description(mut self, f: impl Fn(&mut Engine) + 'static) -> Self {
        self.hooks.after_description = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for LocationDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationDef")
            .field("location", &self.location.key())
            .field("responses", &self.responses.entries().len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Modules
// =============================================================================

/// One layer of a story.
#[derive(Default)]
pub struct Module {
    /// Module name, used in logs and as the response owner.
    pub name: String,
    /// Vocabulary contributed by this module.
    pub words: WordTables,
    /// Entities.
    pub entities: Vec<EntityDef>,
    /// Locations.
    pub locations: Vec<LocationDef>,
    /// Module-wide responses.
    pub responses: Responses,
    /// Response tables shared by every location in an area.
    pub areas: BTreeMap<String, Responses>,
    /// Display names for directions.
    pub exit_names: BTreeMap<String, String>,
    /// Where the player starts.
    pub start_location: Option<String>,
    /// Hooks.
    pub hooks: ModuleHooks,
}

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the vocabulary.
    #[must_use]
    pub fn words(mut self, words: WordTables) -> Self {
        self.words = words;
        self
    }

    /// Builder method to add an entity.
    #[must_use]
    pub fn entity(mut self, entity: EntityDef) -> Self {
        self.entities.push(entity);
        self
    }

    /// Builder method to add a location.
    #[must_use]
    pub fn location(mut self, location: LocationDef) -> Self {
        self.locations.push(location);
        self
    }

    /// Builder method to add a response.
    #[must_use]
    pub fn respond(mut self, key: impl Into<String>, response: impl Into<Response>) -> Self {
        self.responses.insert(key, response);
        self
    }

    /// Builder method to add an area.
    #[must_use]
    pub fn area(mut self, name: impl Into<String>, responses: Responses) -> Self {
        self.areas.insert(name.into(), responses);
        self
    }

    /// Builder method to name a direction.
    #[must_use]
    pub fn exit_name(mut self, direction: impl Into<String>, name: impl Into<String>) -> Self {
        self.exit_names.insert(direction.into(), name.into());
        self
    }

    /// Builder method to set the starting location.
    #[must_use]
    pub fn start_at(mut self, location: impl Into<String>) -> Self {
        self.start_location = Some(location.into());
        self
    }

    /// Builder method to set the initialize hook.
    #[must_use]
    pub fn on_initialize(mut self, f: impl Fn(&mut Engine) + 'static) -> Self {
        self.hooks.initialize = Some(Rc::new(f));
        self
    }

    /// Builder method to set the start-game hook.
    #[must_use]
    pub fn on_start_game(mut self, f: impl Fn(&mut Engine) + 'static) -> Self {
        self.hooks.start_game = Some(Rc::new(f));
        self
    }

    /// Builder method to set the condition.
    #[must_use]
    pub fn conditions(mut self, f: impl Fn(&Engine) -> bool + 'static) -> Self {
        self.hooks.conditions = Some(Rc::new(f));
        self
    }

    /// Builder method to set the before hook.
    #[must_use]
    pub fn before(mut self, f: impl Fn(&mut Engine, &mut Order) -> TurnResult + 'static) -> Self {
        self.hooks.before = Some(Rc::new(f));
        self
    }

    /// Builder method to set the execute hook.
    #[must_use]
    pub fn execute(mut self, f: impl Fn(&mut Engine, &mut Order) -> TurnResult + 'static) -> Self {
        self.hooks.execute = Some(Rc::new(f));
        self
    }

    /// Builder method to set the check hook.
    #[must_use]
    pub fn check(mut self, f: impl Fn(&Engine, &Order) -> bool + 'static) -> Self {
        self.hooks.check = Some(Rc::new(f));
        self
    }

    /// Builder method to set the after hook.
    #[must_use]
    pub fn after(mut self, f: impl Fn(&mut Engine, &Order) -> Option<TurnResult> + 'static) -> Self {
        self.hooks.after = Some(Rc::new(f));
        self
    }

    /// Builder method to set the after-turn hook.
    #[must_use]
    pub fn after_turn(
        mut self,
        f: impl Fn(&mut Engine, &Order) -> Option<TurnResult> + 'static,
    ) -> Self {
        self.hooks.after_turn = Some(Rc::new(f));
        self
    }

    /// Builder method to set the before-description hook.
    #[must_use]
    pub fn before_description(mut self, f: impl Fn(&mut Engine, &str) -> TurnResult + 'static) -> Self {
        self.hooks.before_description = Some(Rc::new(f));
        self
    }

    /// Builder method to set the after-description hook.
    #[must_use]
    pub fn after_description(mut self, f: impl Fn(&mut Engine, &str) + 'static) -> Self {
        self.hooks.after_description = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("entities", &self.entities.len())
            .field("locations", &self.locations.len())
            .field("responses", &self.responses.entries().len())
            .field("areas", &self.areas.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
