//! Top-level adventure variables.
//!
//! Holds the presentation switches that take part in save/restore, plus
//! an open map of author flags (`flag.<name>` in diffs).

use std::collections::BTreeMap;

use fabula_foundation::{Error, FieldValue, Result, Value};

use crate::fields::{Diff, Stateful};

const FLAG_PREFIX: &str = "flag.";

/// Adventure-wide variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variables {
    /// Prompt shown when waiting for a command.
    pub prompt: String,
    /// Prompt shown when waiting for an answer.
    pub ask_prompt: String,
    /// Address the player as "you" rather than "I".
    pub third_person: bool,
    /// Use inventory details when naming carried objects.
    pub inventory_mode: bool,
    /// Print the location name in bold on first visit.
    pub print_location_names: bool,
    /// Author-defined flags.
    pub flags: BTreeMap<String, Value>,
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            ask_prompt: "> ".to_string(),
            third_person: true,
            inventory_mode: true,
            print_location_names: false,
            flags: BTreeMap::new(),
        }
    }
}

impl Variables {
    /// Returns a flag, `Nil` when unset.
    #[must_use]
    pub fn flag(&self, name: &str) -> Value {
        self.flags.get(name).cloned().unwrap_or(Value::Nil)
    }

    /// Sets a flag. Setting `Nil` clears it.
    pub fn set_flag(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        match value.into() {
            Value::Nil => {
                self.flags.remove(&name);
            }
            value => {
                self.flags.insert(name, value);
            }
        }
    }

    /// True if the flag is set to boolean true.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).and_then(Value::as_bool).unwrap_or(false)
    }
}

impl Stateful for Variables {
    fn fields(&self) -> Diff {
        let mut fields = Diff::new();
        fields.insert("prompt".into(), self.prompt.to_value());
        fields.insert("ask_prompt".into(), self.ask_prompt.to_value());
        fields.insert("third_person".into(), self.third_person.to_value());
        fields.insert("inventory_mode".into(), self.inventory_mode.to_value());
        fields.insert("print_location_names".into(), self.print_location_names.to_value());
        for (name, value) in &self.flags {
            fields.insert(format!("{FLAG_PREFIX}{name}"), value.clone());
        }
        fields
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        if let Some(flag) = name.strip_prefix(FLAG_PREFIX) {
            self.set_flag(flag, value);
            return Ok(());
        }
        match name {
            "prompt" => self.prompt = FieldValue::from_value(name, value)?,
            "ask_prompt" => self.ask_prompt = FieldValue::from_value(name, value)?,
            "third_person" => self.third_person = FieldValue::from_value(name, value)?,
            "inventory_mode" => self.inventory_mode = FieldValue::from_value(name, value)?,
            "print_location_names" => {
                self.print_location_names = FieldValue::from_value(name, value)?;
            }
            _ => return Err(Error::unknown_field("variables", name)),
        }
        Ok(())
    }
}
