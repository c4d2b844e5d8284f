//! Plays the demo story to its end.

use fabula_foundation::TurnResult;
use fabula_runtime::{ScriptedEditor, Session};
use fabula_world::{INVENTORY, Seat};

use crate::common::{demo_engine, location_of, say};

#[test]
fn full_walkthrough() {
    let mut engine = demo_engine();

    assert!(say(&mut engine, "up").contains("You can't go that way."));
    assert!(say(&mut engine, "pick up bottle").contains("You now have the bottle."));
    assert!(say(&mut engine, "open it").contains("Inside is a brass key."));
    assert!(say(&mut engine, "get brass key").contains("You now have the brass key."));

    let out = say(&mut engine, "n");
    assert!(out.contains("The cottage is bare but dry."));
    assert!(out.contains("You can see an oilskin here."));

    assert!(say(&mut engine, "put on oilskin").contains("It smells of tar"));
    assert!(engine.world().entity("oilskin").unwrap().state.worn);

    say(&mut engine, "sit on bunk");
    assert_eq!(engine.world().player.state.seat, Seat::On("bunk".into()));

    let out = say(&mut engine, "up");
    assert!(out.contains("Glass on every side"), "{out}");
    assert!(engine.world().player.is_standing());

    let out = say(&mut engine, "light lamp");
    assert!(out.contains("*** The End ***"));

    let out = say(&mut engine, "i");
    assert!(out.contains("oilskin"));
    assert!(out.contains("brass key"));
}

#[test]
fn inventory_lists_worn_and_carried_things() {
    let mut engine = demo_engine();
    say(&mut engine, "take shell");
    say(&mut engine, "n");
    say(&mut engine, "wear oilskin");
    let out = say(&mut engine, "inventory");
    assert!(out.contains("shell"), "{out}");
    assert!(out.contains("oilskin"), "{out}");
}

#[test]
fn refusals_leave_the_world_alone() {
    let mut engine = demo_engine();
    let before = engine.serialize();
    assert_eq!(engine.submit_line("swim"), TurnResult::NotDone);
    assert_eq!(engine.submit_line("take key"), TurnResult::NotDone);
    assert_eq!(engine.submit_line("wear shell"), TurnResult::NotDone);
    assert_eq!(location_of(&engine, "key"), "bottle");
    assert_eq!(location_of(&engine, "shell"), "shore");
    assert_eq!(engine.serialize().entities, before.entities);
}

#[test]
fn scripted_session_plays_a_sequence() {
    let engine = demo_engine();
    let editor = ScriptedEditor::new(["take all", "open bottle", "take key", "north", "up", "light lamp"]);
    let mut session = Session::new(engine, editor);
    session.run().unwrap();

    assert_eq!(session.turns(), 6);
    let engine = session.into_engine();
    assert_eq!(engine.world().player.location(), "lamp room");
    assert_eq!(location_of(&engine, "key"), INVENTORY);
    assert!(engine.world().variables.is_set(fabula_runtime::demo::LAMP_LIT));
}
