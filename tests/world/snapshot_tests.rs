//! Snapshot tests.

use fabula_foundation::{ErrorKind, Value};
use fabula_world::{Entity, EntityState, INVENTORY, Location, LocationState, Posture, SaveState, Seat, World};

fn build() -> World {
    let mut world = World::new();
    world.add_location(Location::new("hall", LocationState::named("Hall").with_exit("north", "yard")));
    world.add_location(Location::new("yard", LocationState::named("Yard").with_exit("south", "hall")));
    world.add_entity(Entity::new("lamp", EntityState::named("brass lamp").at("hall")));
    world.add_entity(Entity::new("sofa", EntityState::named("sofa").at("hall").seat().bed().scenery()));
    world.add_entity(Entity::new("coat", EntityState::named("coat").at("yard").wearable()));
    world.player.state.location = "hall".into();
    world.capture_baseline();
    world
}

fn play(world: &mut World) {
    world.move_entity("lamp", INVENTORY);
    world.move_entity("coat", INVENTORY);
    world.entity_mut("coat").unwrap().state.worn = true;
    world.location_mut("yard").unwrap().state.seen = true;
    world.player.state.location = "yard".into();
    world.player.state.seat = Seat::On("sofa".into());
    world.player.state.posture = Posture::Laying;
    world.variables.set_flag("score", 5_i64);
    world.variables.third_person = false;
}

#[test]
fn untouched_world_has_an_empty_snapshot() {
    assert!(build().serialize().is_empty());
}

#[test]
fn snapshot_holds_only_differences() {
    let mut world = build();
    play(&mut world);
    let save = world.serialize();

    assert_eq!(save.entities.len(), 2);
    assert!(!save.entities.contains_key("sofa"));
    assert_eq!(save.entities["lamp"].len(), 1);
    assert_eq!(save.entities["lamp"].get("location"), Some(&Value::from(INVENTORY)));
    assert_eq!(save.entities["coat"].get("worn"), Some(&Value::from(true)));
    assert_eq!(save.locations["yard"].get("seen"), Some(&Value::from(true)));
    assert_eq!(save.player.get("seat"), Some(&Value::from("sofa")));
    assert_eq!(save.variables.get("flag.score"), Some(&Value::from(5_i64)));
}

#[test]
fn restore_into_a_fresh_world_reproduces_state() {
    let mut world = build();
    play(&mut world);
    let save = world.serialize();

    let mut fresh = build();
    fresh.restore(&save).unwrap();
    assert_eq!(fresh.serialize(), save);
    assert_eq!(fresh.player.location(), "yard");
    assert_eq!(fresh.player.state.posture, Posture::Laying);
    assert!(fresh.entity("coat").unwrap().state.worn);
    assert!(!fresh.variables.third_person);
}

#[test]
fn restore_discards_changes_made_since() {
    let mut world = build();
    world.move_entity("lamp", INVENTORY);
    let save = world.serialize();

    world.move_entity("coat", "hall");
    world.variables.set_flag("door", "open");
    world.restore(&save).unwrap();

    assert_eq!(world.entity("coat").unwrap().state.location, "yard");
    assert_eq!(world.entity("lamp").unwrap().state.location, INVENTORY);
    assert_eq!(world.variables.flag("door"), Value::Nil);
}

#[test]
fn reset_returns_to_baseline() {
    let mut world = build();
    play(&mut world);
    world.reset();
    assert!(world.serialize().is_empty());
    assert!(world.player.is_standing());
}

#[test]
fn stale_records_are_skipped() {
    let mut save = SaveState::default();
    save.entities.insert(
        "sword".into(),
        [("location".to_string(), Value::from(INVENTORY))].into_iter().collect(),
    );
    let mut world = build();
    world.restore(&save).unwrap();
    assert!(world.entity("sword").is_none());
}

#[test]
fn bad_field_is_an_error() {
    let mut save = SaveState::default();
    save.entities.insert(
        "lamp".into(),
        [("colour".to_string(), Value::from("red"))].into_iter().collect(),
    );
    let err = build().restore(&save).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownField { .. }));

    let mut save = SaveState::default();
    save.entities.insert(
        "lamp".into(),
        [("worn".to_string(), Value::from("yes"))].into_iter().collect(),
    );
    let err = build().restore(&save).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FieldType { .. }));
}
