//! Reachability tests.

use fabula_world::{DESTROYED, Entity, EntityState, INVENTORY, Location, LocationState, Reach, World};

fn build() -> World {
    let mut world = World::new();
    world.add_location(Location::new("kitchen", LocationState::named("Kitchen")));
    world.add_location(
        Location::new("larder", LocationState::named("Larder"))
            .with_reach(Reach::Keys(vec!["kitchen".into()])),
    );
    world.add_location(
        Location::new("garden", LocationState::named("Garden")).with_reach(Reach::Computed(std::rc::Rc::new(
            |_: &Location, world: &World| {
                if world.variables.is_set("window_open") {
                    vec!["kitchen".to_string()]
                } else {
                    Vec::new()
                }
            },
        ))),
    );
    world.add_entity(Entity::new("table", EntityState::named("table").at("kitchen").scenery()));
    world.add_entity(Entity::new("tin", EntityState::named("tin").at("kitchen").openable(false)));
    world.add_entity(Entity::new("biscuit", EntityState::named("biscuit").at("tin")));
    world.add_entity(Entity::new("bag", EntityState::named("bag").at(INVENTORY).openable(true)));
    world.add_entity(Entity::new("crumb", EntityState::named("crumb").at("bag")));
    world.add_entity(Entity::new("jar", EntityState::named("jar").at("kitchen").container().openable(true)));
    world.add_entity(Entity::new("bean", EntityState::named("bean").at("jar")));
    world.add_entity(Entity::new("cake", EntityState::named("cake").at(DESTROYED)));
    world.player.state.location = "kitchen".into();
    world.capture_baseline();
    world
}

fn keys(entities: &[&Entity]) -> Vec<String> {
    entities.iter().map(|e| e.key().to_string()).collect()
}

#[test]
fn objects_here_follow_containers() {
    let mut world = build();
    assert_eq!(keys(&world.objects_here()), vec!["table", "tin", "bag", "crumb", "jar"]);

    world.entity_mut("tin").unwrap().state.open = true;
    assert!(world.present("biscuit"));

    world.entity_mut("bag").unwrap().state.open = false;
    assert!(!world.present("crumb"));
    assert!(world.present("bag"));
}

#[test]
fn containers_keep_their_contents_out_of_reach() {
    let world = build();
    assert!(world.entity("jar").unwrap().state.open);
    assert!(world.present("jar"));
    assert!(!world.present("bean"));
}

#[test]
fn reach_keys_extend_the_room() {
    let mut world = build();
    world.player.state.location = "larder".into();
    assert!(world.present("table"));
    assert!(world.present("crumb"));
}

#[test]
fn computed_reach_reads_the_world() {
    let mut world = build();
    world.player.state.location = "garden".into();
    assert!(!world.present("table"));
    world.variables.set_flag("window_open", true);
    assert!(world.present("table"));
}

#[test]
fn destroyed_things_are_gone() {
    let world = build();
    assert!(!world.present("cake"));
    assert!(world.objects_at(DESTROYED).iter().any(|e| e.key() == "cake"));
}
