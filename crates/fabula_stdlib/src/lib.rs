//! Standard English vocabulary and verbs for Fabula.
//!
//! This crate provides the [`english`] module that most stories load first:
//! - Directions, prepositions, pronouns and the common verbs with synonyms
//! - Order rewrites ("pick up X", "put on X", "get up", …)
//! - Movement, inventory handling, clothing, sitting and lying down
//! - Save, load, restart and quit with confirmation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod english;
pub mod movement;
pub mod objects;
pub mod posture;
pub mod rewrite;
pub mod system;
pub mod words;

pub use english::english;
pub use words::{EXIT_NAMES, english_words};

#[cfg(test)]
pub(crate) mod fixture {
    use fabula_engine::{Engine, EngineConfig, EntityDef, LocationDef, Module};
    use fabula_world::{EntityState, LocationState};

    pub fn story() -> Module {
        Module::new("fixture")
            .location(LocationDef::new(
                "study",
                LocationState::named("Study")
                    .with_description("A quiet study.")
                    .with_exit("north", "hall"),
            ))
            .location(LocationDef::new(
                "hall",
                LocationState::named("Hall")
                    .with_description("An echoing hall.")
                    .with_exit("south", "study")
                    .with_exit("up", "attic"),
            ))
            .entity(EntityDef::new("coin", EntityState::named("coin").at("study")))
            .entity(EntityDef::new(
                "pen",
                EntityState::named("pen")
                    .at("study")
                    .with_description("A fountain pen."),
            ))
            .entity(EntityDef::new("apple", EntityState::named("apple").at("study")))
            .entity(EntityDef::new(
                "chair",
                EntityState::named("chair").at("study").seat().scenery().hidden(),
            ))
            .entity(EntityDef::new(
                "sofa",
                EntityState::named("sofa").at("hall").seat().bed().scenery().hidden(),
            ))
            .entity(EntityDef::new("coat", EntityState::named("coat").at("hall").wearable()))
            .entity(EntityDef::new(
                "red ball",
                EntityState::named("red ball").with_adjective("red").at("hall"),
            ))
            .entity(EntityDef::new(
                "blue ball",
                EntityState::named("blue ball").with_adjective("blue").at("hall"),
            ))
            .start_at("study")
    }

    pub fn engine() -> Engine {
        engine_with(EngineConfig::default())
    }

    pub fn engine_with(config: EngineConfig) -> Engine {
        let mut engine = Engine::new(config.with_auto_indent(""));
        engine.add_module(crate::english());
        engine.add_module(story());
        engine.start_game();
        engine
    }

    /// Runs a command and returns only the text it printed.
    pub fn say(engine: &mut Engine, line: &str) -> String {
        let before = engine.transcript().len();
        engine.submit_line(line);
        engine.transcript().get(before..).unwrap_or_default().to_string()
    }

    pub fn location_of<'a>(engine: &'a Engine, key: &str) -> &'a str {
        engine
            .world()
            .entity(key)
            .map_or("", |e| e.state.location.as_str())
    }
}
