//! Vocabulary tests.

use fabula_parser::{Vocabulary, WordKind, WordTables};
use fabula_stdlib::english_words;

#[test]
fn synonyms_fold_to_base_words() {
    let vocabulary = Vocabulary::with_tables(&english_words());
    assert_eq!(vocabulary.base_word("don"), Some("wear"));
    assert_eq!(vocabulary.base_word("l"), Some("look"));
    assert_eq!(vocabulary.base_word("everything"), Some("all"));
    assert_eq!(vocabulary.base_word("n"), Some("north"));
    assert_eq!(vocabulary.base_word("xyzzy"), None);
}

#[test]
fn one_word_can_have_several_readings() {
    let vocabulary = Vocabulary::with_tables(&english_words());
    let kinds: Vec<WordKind> = vocabulary
        .find_word("leave")
        .unwrap()
        .iter()
        .map(|d| d.kind)
        .collect();
    assert_eq!(kinds, vec![WordKind::Direction, WordKind::Verb]);
    assert_eq!(vocabulary.lookup("leave", WordKind::Verb).unwrap().base, "exit");
}

#[test]
fn collision_keeps_the_first_base_word() {
    let mut vocabulary = Vocabulary::with_tables(&WordTables::new().with(WordKind::Verb, "take", &["get"]));
    vocabulary.add_words(&WordTables::new().with(WordKind::Verb, "fetch", &["get"]));

    assert_eq!(vocabulary.base_word("get"), Some("take"));
    assert_eq!(vocabulary.base_word("fetch"), Some("fetch"));
    let collision = &vocabulary.collisions()[0];
    assert_eq!(collision.word, "get");
    assert_eq!(collision.existing, "take");
    assert_eq!(collision.rejected, "fetch");
}

#[test]
fn earlier_declaration_wins_within_one_table() {
    let tables = WordTables::new()
        .with(WordKind::Verb, "wave", &["flap"])
        .with(WordKind::Verb, "beat", &["flap"]);
    let vocabulary = Vocabulary::with_tables(&tables);

    assert_eq!(vocabulary.base_word("flap"), Some("wave"));
    assert_eq!(vocabulary.collisions().len(), 1);
    assert_eq!(vocabulary.collisions()[0].existing, "wave");
    assert_eq!(vocabulary.collisions()[0].rejected, "beat");
}

#[test]
fn same_word_in_another_kind_is_not_a_collision() {
    let mut vocabulary = Vocabulary::new();
    vocabulary.add_words(&WordTables::new().with(WordKind::Noun, "light", &[]));
    vocabulary.add_words(&WordTables::new().with(WordKind::Verb, "light", &["ignite"]));

    assert!(vocabulary.collisions().is_empty());
    assert_eq!(vocabulary.find_word("light").unwrap().len(), 2);
    assert_eq!(vocabulary.base_word("light"), Some("light"));
}

#[test]
fn suppressed_words_stay_unknown() {
    let mut vocabulary = Vocabulary::new();
    vocabulary.suppress("please");
    assert!(vocabulary.find_word("please").is_none());
    assert!(vocabulary.base_word("please").is_none());

    vocabulary.add_word("lamp", WordKind::Noun);
    vocabulary.suppress("lamp");
    assert!(vocabulary.find_word("lamp").is_some());
}

#[test]
fn word_list_feeds_completion() {
    let vocabulary = Vocabulary::with_tables(&english_words());
    let words = vocabulary.words();
    assert!(words.contains(&"examine"));
    assert!(words.contains(&"northwest"));
    assert_eq!(words.len(), vocabulary.len());
}
