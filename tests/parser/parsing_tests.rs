//! Clause parsing tests against a small world.

use fabula_parser::{Parser, Vocabulary, WordKind};
use fabula_stdlib::english_words;
use fabula_world::{Entity, EntityState, World};

fn setup() -> (Parser, World) {
    let mut vocabulary = Vocabulary::with_tables(&english_words());
    for noun in ["ball", "coin", "box", "lamp"] {
        vocabulary.add_word(noun, WordKind::Noun);
    }
    for adjective in ["red", "blue", "brass"] {
        vocabulary.add_word(adjective, WordKind::Adjective);
    }

    let mut world = World::new();
    world.add_entity(Entity::new("red ball", EntityState::named("red ball").with_adjective("red")));
    world.add_entity(Entity::new("blue ball", EntityState::named("blue ball").with_adjective("blue")));
    world.add_entity(Entity::new("coin", EntityState::named("coin")));
    world.add_entity(Entity::new("box", EntityState::named("box").container()));
    world.add_entity(Entity::new("lamp", EntityState::named("brass lamp").with_adjective("brass")));
    (Parser::new(vocabulary), world)
}

#[test]
fn take_key_fills_verb_noun_and_object() {
    let (mut parser, world) = setup();
    let order = parser.parse("get lamp", &world);
    assert!(order.verb_is("take"));
    assert_eq!(order.verb_written(), Some("get"));
    assert_eq!(order.noun(), Some("lamp"));
    assert_eq!(order.object.as_deref(), Some("lamp"));
    assert!(order.ambiguous_objects.is_empty());
}

#[test]
fn adjective_picks_one_of_several() {
    let (mut parser, world) = setup();
    let order = parser.parse("take red ball", &world);
    assert_eq!(order.object.as_deref(), Some("red ball"));

    let order = parser.parse("take ball", &world);
    assert!(order.object.is_none());
    assert_eq!(order.ambiguous_objects, vec!["red ball", "blue ball"]);
}

#[test]
fn second_noun_and_preposition() {
    let (mut parser, world) = setup();
    let order = parser.parse("put coin in box", &world);
    assert!(order.verb_is("put"));
    assert!(order.preposition_is("into"));
    assert!(order.direction.is_none());
    assert_eq!(order.object.as_deref(), Some("coin"));
    assert_eq!(order.object2.as_deref(), Some("box"));
}

#[test]
fn bare_in_is_a_direction() {
    let (mut parser, world) = setup();
    let order = parser.parse("in", &world);
    assert!(order.direction_is("enter"));
    assert!(order.preposition.is_none());
}

#[test]
fn clauses_split_on_conjunctions_and_terminators() {
    let (mut parser, world) = setup();
    let order = parser.parse("take coin, then go north", &world);
    assert!(order.verb_is("take"));
    assert_eq!(order.remaining_text, "then go north");

    let order = parser.parse("then go north", &world);
    assert!(order.is_empty());
    assert_eq!(order.remaining_text, "go north");
}

#[test]
fn quoted_text_is_kept_whole_in_lowercase() {
    let (mut parser, world) = setup();
    let order = parser.parse("say \"Open, Sesame\"", &world);
    assert!(order.verb_is("say"));
    assert_eq!(order.quoted_text.as_deref(), Some("open, sesame"));
    assert!(order.remaining_text.is_empty());
}

#[test]
fn pronoun_refers_to_the_last_noun() {
    let (mut parser, world) = setup();
    parser.parse("examine lamp", &world);
    let order = parser.parse("take it", &world);
    assert_eq!(order.object.as_deref(), Some("lamp"));

    parser.forget_pronouns();
    let order = parser.parse("take it", &world);
    assert!(order.noun.is_none());
}

#[test]
fn inventory_is_a_verb_only_in_first_place() {
    let (mut parser, world) = setup();
    assert!(parser.parse("i", &world).verb_is("inventory"));
    let order = parser.parse("examine inventory", &world);
    assert!(order.verb_is("examine"));
    assert!(order.noun_is("inventory"));
}

#[test]
fn unknown_words_are_counted_not_fatal() {
    let (mut parser, world) = setup();
    let order = parser.parse("carefully polish the lamp", &world);
    assert_eq!(order.unknown_words, 3);
    assert!(order.verb.is_none());
    assert_eq!(order.object.as_deref(), Some("lamp"));
}
