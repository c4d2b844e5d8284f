//! Configuration tests.

use fabula_engine::{EngineConfig, EntityDef, LocationDef, Module};
use fabula_foundation::TurnResult;
use fabula_world::{EntityState, LocationState};

use crate::common::{engine_with_config, say};

fn story() -> Module {
    Module::new("story")
        .location(LocationDef::new("den", LocationState::named("Den").with_description("[You're] in a den.")))
        .entity(EntityDef::new("apple", EntityState::named("apple").at("den")))
        .respond("jump", "[You] jump.")
        .respond("frown", "*[You] frown.")
        .start_at("den")
}

#[test]
fn first_person_story_text() {
    let config = EngineConfig::default().with_auto_indent("").with_third_person(false);
    let mut engine = engine_with_config(config, vec![story()]);
    assert!(engine.transcript().contains("I'm in a den."));
    assert!(engine.transcript().contains("I can see an apple here."));
    assert!(say(&mut engine, "jump").contains("I jump."));
}

#[test]
fn fallback_message_is_configurable() {
    let config = EngineConfig::default()
        .with_auto_indent("")
        .with_fallback_message("Eh?");
    let mut engine = engine_with_config(config, vec![story()]);
    assert_eq!(engine.submit_line("dance wildly"), TurnResult::NoAction);
    assert!(engine.transcript().ends_with("Eh?\n\n"));
}

#[test]
fn location_names_can_head_descriptions() {
    let config = EngineConfig::default()
        .with_auto_indent("")
        .with_print_location_names(true);
    let engine = engine_with_config(config, vec![story()]);
    assert!(engine.transcript().starts_with("<b>Den</b>\n"));
}

#[test]
fn unknown_response_words_can_be_rejected() {
    let config = EngineConfig::default()
        .with_auto_indent("")
        .with_auto_register_response_words(false);
    let mut engine = engine_with_config(config, vec![story()]);
    assert!(!engine.vocabulary().contains("jump"));
    assert_eq!(engine.submit_line("jump"), TurnResult::NoAction);
}

#[test]
fn auto_indent_follows_each_line() {
    let mut engine = engine_with_config(EngineConfig::default(), vec![story()]);
    let out = say(&mut engine, "jump");
    assert!(out.starts_with("You jump.\n    "));
}
