//! Save and load through the English verbs and the file store.

use fabula_engine::{Engine, EngineConfig};
use fabula_foundation::TurnResult;
use fabula_runtime::{FileStore, from_bytes, load_from_file, to_bytes};
use fabula_world::INVENTORY;

use crate::common::{demo_engine, location_of, say};

#[test]
fn save_then_load_in_memory() {
    let mut engine = demo_engine();
    say(&mut engine, "take shell");
    assert_eq!(engine.submit_line("save"), TurnResult::NotDone);
    assert!(engine.transcript().contains("Progress saved."));

    say(&mut engine, "drop shell");
    say(&mut engine, "north");
    engine.submit_line("load");
    assert!(engine.transcript().starts_with("A strip of shingle"), "{}", engine.transcript());
    assert_eq!(location_of(&engine, "shell"), INVENTORY);
    assert_eq!(engine.world().player.location(), "shore");
}

#[test]
fn snapshot_survives_message_pack() {
    let mut engine = demo_engine();
    say(&mut engine, "open bottle");
    say(&mut engine, "take key");
    say(&mut engine, "n");
    engine.world_mut().variables.set_flag("visits", 3_i64);

    let snapshot = engine.serialize();
    let bytes = to_bytes(&snapshot).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), snapshot);
}

#[test]
fn save_file_restores_into_a_new_game() {
    let path = std::env::temp_dir().join(format!("fabula-integration-{}.sav", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let new_game = || {
        let mut engine = Engine::new(EngineConfig::default().with_auto_indent(""))
            .with_store(Box::new(FileStore::new(&path)));
        engine.add_module(fabula_stdlib::english());
        engine.add_module(fabula_runtime::demo());
        engine.start_game();
        engine
    };

    let mut engine = new_game();
    assert!(say(&mut engine, "restore").contains("Your progress hasn't been saved yet."));
    say(&mut engine, "take rope");
    say(&mut engine, "north");
    say(&mut engine, "save");
    assert!(load_from_file(&path).is_ok());

    let mut engine = new_game();
    say(&mut engine, "load");
    assert_eq!(engine.world().player.location(), "cottage");
    assert_eq!(location_of(&engine, "rope"), INVENTORY);

    std::fs::remove_file(&path).unwrap();
}
