//! Locations, their exits, and reach rules.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use fabula_foundation::{Error, FieldValue, Result, Value};

use crate::fields::{Diff, Stateful, diff_fields};
use crate::world::World;

/// Text computed from a location and the current world.
pub type LocationText = Rc<dyn Fn(&Location, &World) -> String>;

/// Computes the keys of the locations reachable from here, given the
/// location being tested.
pub type ReachFn = Rc<dyn Fn(&Location, &World) -> Vec<String>>;

const EXIT_PREFIX: &str = "exit.";

/// Diffable state of a location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationState {
    /// Display name.
    pub name: String,
    /// Short description.
    pub brief: Option<String>,
    /// Static description.
    pub description: Option<String>,
    /// Has been described to the player.
    pub seen: bool,
    /// Suppress the "you can see" listing.
    pub hide_objects: bool,
    /// Direction → destination key.
    pub exits: BTreeMap<String, String>,
}

impl LocationState {
    /// Creates a state with the given display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the static description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the brief description.
    #[must_use]
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = Some(brief.into());
        self
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: impl Into<String>, destination: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), destination.into());
        self
    }

    /// Suppresses the object listing.
    #[must_use]
    pub fn hide_objects(mut self) -> Self {
        self.hide_objects = true;
        self
    }
}

impl Stateful for LocationState {
    fn fields(&self) -> Diff {
        let mut fields = Diff::new();
        fields.insert("name".into(), self.name.to_value());
        fields.insert("brief".into(), self.brief.to_value());
        fields.insert("description".into(), self.description.to_value());
        fields.insert("seen".into(), self.seen.to_value());
        fields.insert("hide_objects".into(), self.hide_objects.to_value());
        for (direction, destination) in &self.exits {
            fields.insert(format!("{EXIT_PREFIX}{direction}"), Value::Text(destination.clone()));
        }
        fields
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        if let Some(direction) = name.strip_prefix(EXIT_PREFIX) {
            match value {
                Value::Nil => {
                    self.exits.remove(direction);
                }
                Value::Text(destination) => {
                    self.exits.insert(direction.to_string(), destination);
                }
                _ => return Err(Error::field_type(name, "a location key or nil")),
            }
            return Ok(());
        }
        match name {
            "name" => self.name = FieldValue::from_value(name, value)?,
            "brief" => self.brief = FieldValue::from_value(name, value)?,
            "description" => self.description = FieldValue::from_value(name, value)?,
            "seen" => self.seen = FieldValue::from_value(name, value)?,
            "hide_objects" => self.hide_objects = FieldValue::from_value(name, value)?,
            _ => return Err(Error::unknown_field("location", name)),
        }
        Ok(())
    }
}

/// Hint text shown next to an exit's name.
#[derive(Clone)]
pub enum ExitHint {
    /// Fixed text.
    Text(String),
    /// Text computed from the location.
    Computed(LocationText),
}

impl ExitHint {
    /// Renders the hint.
    #[must_use]
    pub fn render(&self, location: &Location, world: &World) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Computed(f) => f(location, world),
        }
    }
}

/// Which other locations count as "here" for reaching objects.
#[derive(Clone, Default)]
pub enum Reach {
    /// Only this location.
    #[default]
    None,
    /// A fixed list of location keys.
    Keys(Vec<String>),
    /// Computed from the target location.
    Computed(ReachFn),
}

impl Reach {
    /// Returns true if `target` can be reached from `here` under this rule.
    #[must_use]
    pub fn includes(&self, target: &Location, world: &World) -> bool {
        match self {
            Self::None => false,
            Self::Keys(keys) => keys.iter().any(|k| k == target.key()),
            Self::Computed(f) => f(target, world).iter().any(|k| k == target.key()),
        }
    }
}

/// A location with its load-time baseline and authoring data.
#[derive(Clone)]
pub struct Location {
    key: String,
    /// Current state.
    pub state: LocationState,
    baseline: LocationState,
    describe: Option<LocationText>,
    exit_names: BTreeMap<String, String>,
    hints: BTreeMap<String, ExitHint>,
    reach: Reach,
    areas: Vec<String>,
}

impl Location {
    /// Creates a location; its state becomes the baseline.
    #[must_use]
    pub fn new(key: impl Into<String>, state: LocationState) -> Self {
        Self {
            key: key.into(),
            baseline: state.clone(),
            state,
            describe: None,
            exit_names: BTreeMap::new(),
            hints: BTreeMap::new(),
            reach: Reach::None,
            areas: Vec::new(),
        }
    }

    /// Uses a computed description instead of the static one.
    #[must_use]
    pub fn with_describe(mut self, f: impl Fn(&Location, &World) -> String + 'static) -> Self {
        self.describe = Some(Rc::new(f));
        self
    }

    /// Names an exit for exit listings.
    #[must_use]
    pub fn with_exit_name(mut self, direction: impl Into<String>, name: impl Into<String>) -> Self {
        self.exit_names.insert(direction.into(), name.into());
        self
    }

    /// Attaches a hint to an exit.
    #[must_use]
    pub fn with_hint(mut self, direction: impl Into<String>, hint: ExitHint) -> Self {
        self.hints.insert(direction.into(), hint);
        self
    }

    /// Sets the reach rule.
    #[must_use]
    pub fn with_reach(mut self, reach: Reach) -> Self {
        self.reach = reach;
        self
    }

    /// Tags the location with a shared response area.
    #[must_use]
    pub fn in_area(mut self, area: impl Into<String>) -> Self {
        self.areas.push(area.into());
        self
    }

    /// Returns the identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the reach rule.
    #[must_use]
    pub fn reach(&self) -> &Reach {
        &self.reach
    }

    /// Returns the area tags.
    #[must_use]
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Returns the location's own name for an exit, if any.
    #[must_use]
    pub fn exit_name(&self, direction: &str) -> Option<&str> {
        self.exit_names.get(direction).map(String::as_str)
    }

    /// Returns the hint for an exit, if any.
    #[must_use]
    pub fn hint(&self, direction: &str) -> Option<&ExitHint> {
        self.hints.get(direction)
    }

    /// Returns the destination of an exit.
    #[must_use]
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.state.exits.get(direction).map(String::as_str)
    }

    /// Returns the description, computed if a function was supplied.
    #[must_use]
    pub fn description(&self, world: &World) -> Option<String> {
        match &self.describe {
            Some(f) => Some(f(self, world)),
            None => self.state.description.clone(),
        }
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
            .map_err(|e| e.with_context(format!("location '{}'", self.key)))
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("key", &self.key)
            .field("state", &self.state)
            .field("areas", &self.areas)
            .finish_non_exhaustive()
    }
}
