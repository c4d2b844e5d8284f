//! Property tests for the vocabulary and the parser.

use std::collections::HashMap;

use proptest::prelude::*;

use fabula_parser::{Parser, Vocabulary, WordKind, WordTables};
use fabula_stdlib::english_words;
use fabula_world::{Entity, EntityState, World};

const KINDS: [WordKind; 5] = [
    WordKind::Verb,
    WordKind::Noun,
    WordKind::Adjective,
    WordKind::Direction,
    WordKind::Preposition,
];

fn entry() -> impl Strategy<Value = (usize, String, String)> {
    (0..KINDS.len(), "[a-d]{1,2}", "[a-d]{1,2}")
}

fn english_parser() -> (Parser, World) {
    let mut vocabulary = Vocabulary::with_tables(&english_words());
    vocabulary.add_word("lamp", WordKind::Noun);
    vocabulary.add_word("brass", WordKind::Adjective);
    let mut world = World::new();
    world.add_entity(Entity::new("lamp", EntityState::named("brass lamp").with_adjective("brass")));
    (Parser::new(vocabulary), world)
}

proptest! {
    /// Within one kind a word folds to exactly one base word: the first
    /// one it was registered under.
    #[test]
    fn first_registration_wins(entries in prop::collection::vec(entry(), 1..40)) {
        let mut vocabulary = Vocabulary::new();
        let mut expected: HashMap<(String, WordKind), String> = HashMap::new();

        for (kind, base, synonym) in &entries {
            let kind = KINDS[*kind];
            vocabulary.add_words(&WordTables::new().with(kind, base, &[synonym.as_str()]));
            expected.entry((base.clone(), kind)).or_insert_with(|| base.clone());
            expected.entry((synonym.clone(), kind)).or_insert_with(|| base.clone());
        }

        for ((word, kind), base) in &expected {
            let readings = vocabulary.find_word(word).unwrap();
            prop_assert_eq!(readings.iter().filter(|d| d.kind == *kind).count(), 1);
            prop_assert_eq!(&vocabulary.lookup(word, *kind).unwrap().base, base);
        }
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,60}") {
        let (mut parser, world) = english_parser();
        let order = parser.parse(&input, &world);
        prop_assert!(input.contains(order.remaining_text.as_str()));
    }

    #[test]
    fn parser_handles_word_soup(words in prop::collection::vec(
        prop::sample::select(vec![
            "take", "it", "all", "lamp", "brass", "in", "north", "and", "then", ",", ".", "\"", "42", "-1", "zork",
        ]),
        0..12,
    )) {
        let (mut parser, world) = english_parser();
        let input = words.join(" ");
        let order = parser.parse(&input, &world);
        if order.object.is_some() {
            prop_assert_eq!(order.object.as_deref(), Some("lamp"));
        }
        prop_assert!(order.number.is_none_or(|n| n > 0));
    }
}
