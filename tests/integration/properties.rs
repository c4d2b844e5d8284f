//! Whole-game properties.

use fabula_foundation::TurnResult;
use fabula_world::INVENTORY;

use crate::common::{demo_engine, location_of, say};

#[test]
fn empty_commands_do_nothing() {
    let mut engine = demo_engine();
    let before = engine.serialize();
    for line in ["", "   ", "the", ". , ;", "please kindly"] {
        assert_eq!(engine.execute(line), TurnResult::NoAction, "{line:?}");
    }
    assert_eq!(engine.serialize(), before);
}

#[test]
fn take_all_reports_once() {
    let mut engine = demo_engine();
    let out = say(&mut engine, "take all");
    assert_eq!(out.matches("You now have").count(), 1);
    assert!(out.contains("You now have the shell, the coil of rope and the bottle."), "{out}");
    for key in ["shell", "rope", "bottle"] {
        assert_eq!(location_of(&engine, key), INVENTORY);
    }
}

#[test]
fn counter_answers_depend_only_on_the_world() {
    let mut engine = demo_engine();
    say(&mut engine, "take rope");
    say(&mut engine, "north");

    let first = engine.submit_line("break counter");
    let second = engine.submit_line("break counter");
    assert_eq!(first, TurnResult::NotDone);
    assert_eq!(first, second);

    say(&mut engine, "drop rope");
    let first = engine.submit_line("break counter");
    let second = engine.submit_line("break counter");
    assert_eq!(first, TurnResult::Done);
    assert_eq!(first, second);
}

#[test]
fn restore_undoes_a_move_and_nothing_else() {
    let mut engine = demo_engine();
    say(&mut engine, "take shell");
    let snapshot = engine.serialize();

    engine.world_mut().move_entity("shell", "cottage");
    engine.restore(&snapshot).unwrap();

    assert_eq!(location_of(&engine, "shell"), INVENTORY);
    assert_eq!(location_of(&engine, "rope"), "shore");
    assert_eq!(engine.serialize(), snapshot);
}

#[test]
fn restart_puts_everything_back() {
    let mut engine = demo_engine();
    let initial = engine.serialize();
    say(&mut engine, "take all");
    say(&mut engine, "north");

    assert_eq!(engine.submit_line("restart"), TurnResult::Ask);
    assert_eq!(engine.submit_line("yes"), TurnResult::Restart);
    assert_eq!(engine.serialize(), initial);
    assert_eq!(engine.world().player.location(), "shore");
    assert!(engine.transcript().contains("A strip of shingle"));
}
