//! Dispatch layer tests.

use fabula_engine::{Awaiting, EntityDef, LocationDef, Module, Response, Responses};
use fabula_foundation::TurnResult;
use fabula_parser::{WordKind, WordTables};
use fabula_world::{EntityState, INVENTORY, LocationState};

use crate::common::{Trace, engine_with, entries, say, trace};

fn words() -> WordTables {
    WordTables::new()
        .with(WordKind::Verb, "poke", &["prod"])
        .with(WordKind::Verb, "wave", &[])
        .with(WordKind::Verb, "hum", &[])
        .with(WordKind::Direction, "north", &["n"])
}

/// Every layer records that it saw the order and claims nothing.
fn layered(log: &Trace) -> Module {
    let (a, b, c, d, e) = (log.clone(), log.clone(), log.clone(), log.clone(), log.clone());
    Module::new("layers")
        .words(words())
        .location(
            LocationDef::new("cell", LocationState::named("Cell").with_exit("north", "yard"))
                .area("prison")
                .before(move |_, _| {
                    a.borrow_mut().push("location before".into());
                    TurnResult::NoAction
                })
                .execute(move |_, _| {
                    b.borrow_mut().push("location execute".into());
                    TurnResult::NoAction
                }),
        )
        .location(LocationDef::new("yard", LocationState::named("Yard")))
        .entity(
            EntityDef::new("rat", EntityState::named("rat").at("cell"))
                .before(move |_, _, key| {
                    c.borrow_mut().push(format!("{key} before"));
                    TurnResult::NoAction
                })
                .execute(move |_, _, key| {
                    d.borrow_mut().push(format!("{key} execute"));
                    TurnResult::NoAction
                }),
        )
        .before(move |_, _| {
            e.borrow_mut().push("module before".into());
            TurnResult::NoAction
        })
        .start_at("cell")
}

#[test]
fn layers_run_in_order_when_nobody_claims() {
    let log = trace();
    let observer = log.clone();
    let tail = Module::new("tail").execute(move |_, _| {
        observer.borrow_mut().push("module execute".into());
        TurnResult::NoAction
    });
    let mut engine = engine_with(vec![layered(&log), tail]);

    assert_eq!(engine.submit_line("poke rat"), TurnResult::NoAction);
    assert_eq!(
        entries(&log),
        vec![
            "module before",
            "location before",
            "rat before",
            "rat execute",
            "location execute",
            "module execute",
        ]
    );
    assert!(engine.transcript().contains("You can't do that."));
}

#[test]
fn absent_objects_are_skipped() {
    let log = trace();
    let mut engine = engine_with(vec![layered(&log)]);
    engine.world_mut().move_entity("rat", "yard");

    engine.submit_line("poke rat");
    assert!(!entries(&log).iter().any(|e| e.starts_with("rat")));
}

#[test]
fn object_response_beats_location_response() {
    let story = Module::new("story")
        .words(words())
        .location(
            LocationDef::new("cell", LocationState::named("Cell"))
                .respond("poke *", "You poke at the air.")
                .respond("wave", "Nobody waves back."),
        )
        .entity(EntityDef::new("rat", EntityState::named("rat").at("cell")).respond("poke rat", "The rat squeaks."))
        .start_at("cell");
    let mut engine = engine_with(vec![story]);

    assert!(say(&mut engine, "prod rat").contains("The rat squeaks."));
    assert!(say(&mut engine, "wave").contains("Nobody waves back."));
}

#[test]
fn module_responses_run_before_everything_else() {
    let story = Module::new("story")
        .words(words())
        .location(LocationDef::new("cell", LocationState::named("Cell")).respond("hum", "You hum."))
        .start_at("cell");
    let rules = Module::new("rules").respond("hum", "*Silence in the cell!");
    let mut engine = engine_with(vec![story, rules]);

    assert_eq!(engine.submit_line("hum"), TurnResult::NotDone);
    assert!(engine.transcript().contains("Silence in the cell!"));
    assert!(!engine.transcript().contains("You hum."));
}

#[test]
fn module_response_handlers_can_ask() {
    let story = Module::new("story")
        .words(words())
        .location(LocationDef::new("cell", LocationState::named("Cell")))
        .respond(
            "hum",
            Response::handler(|engine, _, _| {
                engine.ask_with_prompt("Which tune? ", |engine, answer| {
                    let line = format!("You hum {answer}.");
                    engine.message(&line);
                    TurnResult::Done
                })
            }),
        )
        .start_at("cell");
    let mut engine = engine_with(vec![story]);

    assert_eq!(engine.submit_line("hum"), TurnResult::Ask);
    assert_eq!(engine.awaiting(), Awaiting::Line);
    assert_eq!(engine.prompt(), "Which tune? ");
    assert_eq!(engine.submit_line("a shanty"), TurnResult::Done);
    assert!(engine.transcript().contains("You hum a shanty."));
    assert_eq!(engine.awaiting(), Awaiting::Command);
}

#[test]
fn area_responses_apply_to_member_locations() {
    let story = Module::new("story")
        .words(words())
        .location(
            LocationDef::new("cell", LocationState::named("Cell").with_exit("north", "yard")).area("prison"),
        )
        .location(LocationDef::new("yard", LocationState::named("Yard")))
        .area("prison", Responses::new().on("hum", "The walls hum back."))
        .execute(|engine, order| {
            if let Some(to) = order
                .direction()
                .and_then(|d| engine.world().here().and_then(|l| l.exit(d)).map(str::to_string))
            {
                engine.world_mut().player.state.location = to;
                return TurnResult::Done;
            }
            TurnResult::NoAction
        })
        .start_at("cell");
    let mut engine = engine_with(vec![story]);

    assert_eq!(engine.submit_line("hum"), TurnResult::Done);
    engine.submit_line("n");
    assert_eq!(engine.world().player.location(), "yard");
    assert_eq!(engine.submit_line("hum"), TurnResult::NoAction);
}

#[test]
fn handler_responses_see_their_owner() {
    let story = Module::new("story")
        .words(words())
        .location(LocationDef::new("cell", LocationState::named("Cell")))
        .entity(
            EntityDef::new("rat", EntityState::named("rat").at("cell")).respond(
                "poke rat",
                Response::handler(|engine, _, owner| {
                    let key = owner.key().to_string();
                    engine.world_mut().move_entity(&key, INVENTORY);
                    engine.message("Got it.");
                    TurnResult::Done
                }),
            ),
        )
        .start_at("cell");
    let mut engine = engine_with(vec![story]);

    assert_eq!(engine.submit_line("poke rat"), TurnResult::Done);
    assert_eq!(engine.world().entity("rat").unwrap().state.location, INVENTORY);
}

#[test]
fn not_done_skips_after_hooks() {
    let log = trace();
    let observer = log.clone();
    let story = Module::new("story")
        .words(words())
        .location(LocationDef::new("cell", LocationState::named("Cell")))
        .respond("wave", "*Your arms are chained.")
        .respond("hum", "You hum.")
        .after(move |_, order| {
            observer.borrow_mut().push(order.verb().unwrap_or_default().to_string());
            None
        })
        .start_at("cell");
    let mut engine = engine_with(vec![story]);

    engine.submit_line("wave");
    engine.submit_line("hum");
    assert_eq!(entries(&log), vec!["hum"]);
}

#[test]
fn chained_clauses_run_as_separate_turns() {
    let log = trace();
    let observer = log.clone();
    let story = Module::new("story")
        .words(words())
        .location(LocationDef::new("cell", LocationState::named("Cell")))
        .respond("hum", "You hum.")
        .respond("wave", "You wave.")
        .after(move |_, order| {
            observer.borrow_mut().push(order.verb().unwrap_or_default().to_string());
            None
        })
        .start_at("cell");
    let mut engine = engine_with(vec![story]);

    let out = say(&mut engine, "hum, then wave and hum");
    assert_eq!(entries(&log), vec!["hum", "wave", "hum"]);
    assert_eq!(out.matches("You hum.").count(), 2);
}
