//! The player character.
//!
//! The inventory is not stored here: an entity is carried when its
//! location is `inventory`.

use fabula_foundation::{Error, FieldValue, Result, Value};

use crate::DESTROYED;
use crate::fields::{Diff, Stateful, diff_fields, stateful_fields};

/// What the character is sitting or lying on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Seat {
    /// On their feet.
    #[default]
    Standing,
    /// On the floor.
    Floor,
    /// On the entity with this key.
    On(String),
}

impl FieldValue for Seat {
    fn to_value(&self) -> Value {
        match self {
            Self::Standing => Value::Bool(false),
            Self::Floor => Value::Bool(true),
            Self::On(key) => Value::Text(key.clone()),
        }
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Nil | Value::Bool(false) => Ok(Self::Standing),
            Value::Bool(true) => Ok(Self::Floor),
            Value::Text(key) => Ok(Self::On(key)),
            Value::Int(_) => Err(Error::field_type(field, "a boolean or entity key")),
        }
    }
}

/// How the character is resting when not standing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Posture {
    /// Sitting.
    #[default]
    Sitting,
    /// Lying down.
    Laying,
}

impl Posture {
    /// Returns the participle used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sitting => "sitting",
            Self::Laying => "laying",
        }
    }
}

impl FieldValue for Posture {
    fn to_value(&self) -> Value {
        Value::Text(self.as_str().to_string())
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Nil => Ok(Self::Sitting),
            Value::Text(s) if s == "sitting" => Ok(Self::Sitting),
            Value::Text(s) if s == "laying" => Ok(Self::Laying),
            _ => Err(Error::field_type(field, "\"sitting\" or \"laying\"")),
        }
    }
}

/// Diffable state of the character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterState {
    /// Current location key.
    pub location: String,
    /// Carrying capacity.
    pub max_carried: u32,
    /// What the character is sitting or lying on.
    pub seat: Seat,
    /// Sitting or lying, when not standing.
    pub posture: Posture,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            location: DESTROYED.to_string(),
            max_carried: 99,
            seat: Seat::Standing,
            posture: Posture::Sitting,
        }
    }
}

stateful_fields!(CharacterState, "player" { location, max_carried, seat, posture });

/// The player character with its baseline.
#[derive(Clone, Debug)]
pub struct Character {
    key: String,
    /// Current state.
    pub state: CharacterState,
    baseline: CharacterState,
}

impl Character {
    /// Creates a character; its state becomes the baseline.
    #[must_use]
    pub fn new(key: impl Into<String>, state: CharacterState) -> Self {
        Self {
            key: key.into(),
            baseline: state.clone(),
            state,
        }
    }

    /// Returns the identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the current location key.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.state.location
    }

    /// True if standing.
    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.state.seat == Seat::Standing
    }

    /// Takes the current state as the new baseline.
    pub fn rebase(&mut self) {
        self.baseline = self.state.clone();
    }

    /// Restores the baseline state.
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
            .map_err(|e| e.with_context(format!("character '{}'", self.key)))
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new("player", CharacterState::default())
    }
}
