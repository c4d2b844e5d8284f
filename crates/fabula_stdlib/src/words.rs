//! The English word tables.

use fabula_parser::{WordKind, WordTables};

/// Display names for directions in exit lists.
pub const EXIT_NAMES: &[(&str, &str)] = &[
    ("enter", "inside"),
    ("leave", "outside"),
    ("north", "North"),
    ("south", "South"),
    ("east", "East"),
    ("west", "West"),
    ("northeast", "Northeast"),
    ("northwest", "Northwest"),
    ("southeast", "Southeast"),
    ("southwest", "Southwest"),
];

/// Builds the English vocabulary.
#[must_use]
pub fn english_words() -> WordTables {
    use WordKind::{
        Conjunction, ConvertibleNoun, Direction, Preposition, Pronoun, SpecialNoun, Verb,
    };

    WordTables::new()
        // Directions
        .with(Direction, "north", &["n"])
        .with(Direction, "south", &["s"])
        .with(Direction, "east", &["e"])
        .with(Direction, "west", &["w"])
        .with(Direction, "northeast", &["ne"])
        .with(Direction, "northwest", &["nw"])
        .with(Direction, "southeast", &["se"])
        .with(Direction, "southwest", &["sw"])
        .with(Direction, "up", &[])
        .with(Direction, "down", &[])
        .with(Direction, "enter", &["in", "inside"])
        .with(Direction, "leave", &["out", "outside"])
        // Nouns that act as verbs when they come first
        .with(ConvertibleNoun, "inventory", &["i"])
        .with(ConvertibleNoun, "exits", &["x"])
        // Prepositions
        .with(Preposition, "into", &["inside", "in"])
        .with(Preposition, "on", &["over"])
        .with(Preposition, "under", &[])
        .with(Preposition, "off", &[])
        .with(Preposition, "at", &[])
        // Verbs
        .with(Verb, "break", &["destroy", "split", "force", "smash"])
        .with(Verb, "close", &[])
        .with(Verb, "drop", &["throw"])
        .with(Verb, "enter", &[])
        .with(
            Verb,
            "examine",
            &["ex", "check", "read", "search", "find", "scan", "investigate", "inspect"],
        )
        .with(Verb, "exit", &["leave"])
        .with(Verb, "lay", &["lie", "crouch"])
        .with(Verb, "load", &["restore"])
        .with(Verb, "look", &["re-describe", "l"])
        .with(Verb, "make", &[])
        .with(Verb, "open", &[])
        .with(Verb, "pick", &[])
        .with(Verb, "punch", &["strike", "kick", "attack"])
        .with(Verb, "put", &[])
        .with(Verb, "quit", &["end", "quitf"])
        .with(Verb, "remove", &["disrobe", "unwear", "doff"])
        .with(Verb, "restart", &[])
        .with(Verb, "save", &[])
        .with(Verb, "say", &["speak", "talk", "tell"])
        .with(Verb, "sit", &[])
        .with(Verb, "stand", &["rise"])
        .with(Verb, "take", &["get"])
        .with(Verb, "wear", &["don"])
        .with(Verb, "use", &[])
        // Nouns that never become "it"
        .with(SpecialNoun, "all", &["everything"])
        .with(SpecialNoun, "clothes", &[])
        .with(SpecialNoun, "floor", &[])
        .with(Pronoun, "it", &[])
        .with(Pronoun, "them", &[])
        .with(Conjunction, "and", &[])
        .with(Conjunction, "then", &[])
}
