//! WAIT and ASK suspension tests.

use fabula_engine::{Awaiting, LocationDef, Module};
use fabula_foundation::{TurnResult, Value};
use fabula_parser::{WordKind, WordTables};
use fabula_world::LocationState;

use crate::common::{Trace, engine_with, entries, say, trace};

fn story(log: &Trace) -> Module {
    let (before, after) = (log.clone(), log.clone());
    Module::new("story")
        .words(
            WordTables::new()
                .with(WordKind::Verb, "pause", &[])
                .with(WordKind::Verb, "sign", &[])
                .with(WordKind::Verb, "hum", &[]),
        )
        .location(LocationDef::new("office", LocationState::named("Office")))
        .before(move |_, order| {
            before.borrow_mut().push(format!("before {}", order.verb().unwrap_or_default()));
            TurnResult::NoAction
        })
        .execute(|engine, order| {
            if order.verb_is("pause") {
                engine.message("Press any key.");
                return engine.wait_for_key(|engine, key| {
                    engine.message(&format!("Got '{key}'."));
                    TurnResult::Done
                });
            }
            if order.verb_is("sign") {
                engine.message("Sign here?");
                return engine.ask_with_prompt("Name: ", |engine, answer| {
                    if answer.trim().is_empty() {
                        engine.message("Unsigned.");
                        return TurnResult::NotDone;
                    }
                    engine.world_mut().variables.set_flag("signed", answer.trim());
                    engine.message("Signed.");
                    TurnResult::Done
                });
            }
            if order.verb_is("hum") {
                engine.message("You hum.");
                return TurnResult::Done;
            }
            TurnResult::NoAction
        })
        .after(move |_, order| {
            after.borrow_mut().push(format!("after {}", order.verb().unwrap_or_default()));
            None
        })
        .start_at("office")
}

#[test]
fn wait_resumes_without_rerunning_hooks() {
    let log = trace();
    let mut engine = engine_with(vec![story(&log)]);

    assert_eq!(engine.submit_line("pause"), TurnResult::Wait);
    assert_eq!(engine.awaiting(), Awaiting::Key);
    assert_eq!(engine.prompt(), "");
    assert_eq!(entries(&log), vec!["before pause"]);

    assert_eq!(engine.submit_key("x"), TurnResult::Done);
    assert!(engine.transcript().contains("Got 'x'."));
    assert_eq!(entries(&log), vec!["before pause", "after pause"]);
    assert_eq!(engine.awaiting(), Awaiting::Command);
}

#[test]
fn a_line_answers_a_key_wait_with_its_first_character() {
    let log = trace();
    let mut engine = engine_with(vec![story(&log)]);
    engine.submit_line("pause");
    engine.submit_line("yes");
    assert!(engine.transcript().contains("Got 'y'."));
}

#[test]
fn key_presses_are_ignored_while_a_command_is_awaited() {
    let log = trace();
    let mut engine = engine_with(vec![story(&log)]);
    assert_eq!(engine.submit_key("x"), TurnResult::NoAction);
    assert!(entries(&log).is_empty());
}

#[test]
fn ask_uses_its_own_prompt_then_restores_the_default() {
    let log = trace();
    let mut engine = engine_with(vec![story(&log)]);

    assert_eq!(engine.submit_line("sign"), TurnResult::Ask);
    assert_eq!(engine.awaiting(), Awaiting::Line);
    assert_eq!(engine.prompt(), "Name: ");

    let out = say(&mut engine, "  Ada  ");
    assert!(out.contains("Signed."));
    assert_eq!(engine.world().variables.flag("signed"), Value::from("Ada"));
    assert_eq!(engine.prompt(), "> ");
}

#[test]
fn the_answer_decides_the_turn() {
    let log = trace();
    let mut engine = engine_with(vec![story(&log)]);
    engine.submit_line("sign");
    assert_eq!(engine.submit_line(""), TurnResult::NotDone);
    assert!(engine.transcript().contains("Unsigned."));
    assert_eq!(entries(&log), vec!["before sign"]);
}

#[test]
fn answers_are_not_parsed_as_commands() {
    let log = trace();
    let mut engine = engine_with(vec![story(&log)]);
    engine.submit_line("sign");
    let out = say(&mut engine, "hum");
    assert!(!out.contains("You hum."));
    assert_eq!(engine.world().variables.flag("signed"), Value::from("hum"));
}
