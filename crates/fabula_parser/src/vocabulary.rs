//! Vocabulary: word → classification dictionary with synonym folding.
//!
//! Every entry maps a written word to one or more [`WordDef`]s, each a
//! classification plus the base word it folds to. Within a classification
//! a synonym folds to exactly one base word; a second, different base word
//! is a collision, logged and recorded but never fatal (first entry wins).

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

/// Grammatical classification of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordKind {
    /// An action ("take").
    Verb,
    /// A thing ("lamp").
    Noun,
    /// A modifier of a noun ("red").
    Adjective,
    /// A modifier of the action ("quietly").
    Adverb,
    /// A relation ("on", "into").
    Preposition,
    /// A compass or movement word ("north").
    Direction,
    /// Ends the clause and carries the rest forward ("and").
    Conjunction,
    /// Refers back to the last noun ("it").
    Pronoun,
    /// A verb when no verb has been seen yet, otherwise a noun ("inventory").
    ConvertibleNoun,
    /// A noun that never becomes a pronoun antecedent ("all").
    SpecialNoun,
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Verb => "verb",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Direction => "direction",
            Self::Conjunction => "conjunction",
            Self::Pronoun => "pronoun",
            Self::ConvertibleNoun => "convertible noun",
            Self::SpecialNoun => "special noun",
        };
        f.write_str(name)
    }
}

/// One reading of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordDef {
    /// Classification.
    pub kind: WordKind,
    /// Canonical word within that classification.
    pub base: String,
}

/// Base word → synonyms, for one classification, in declaration order.
pub type Words = Vec<(String, Vec<String>)>;

/// Author-supplied word tables, one per classification.
#[derive(Clone, Debug, Default)]
pub struct WordTables {
    /// Adjectives.
    pub adjectives: Words,
    /// Adverbs.
    pub adverbs: Words,
    /// Conjunctions.
    pub conjunctions: Words,
    /// Convertible nouns.
    pub convertible_nouns: Words,
    /// Directions.
    pub directions: Words,
    /// Nouns.
    pub nouns: Words,
    /// Prepositions.
    pub prepositions: Words,
    /// Pronouns.
    pub pronouns: Words,
    /// Special nouns.
    pub special_nouns: Words,
    /// Verbs.
    pub verbs: Words,
}

impl WordTables {
    /// Creates empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a base word with synonyms to the table of the given kind.
    #[must_use]
    pub fn with(mut self, kind: WordKind, base: &str, synonyms: &[&str]) -> Self {
        let synonyms = synonyms.iter().map(|s| (*s).to_string());
        let table = self.table_mut(kind);
        match table.iter_mut().find(|(b, _)| b == base) {
            Some((_, existing)) => existing.extend(synonyms),
            None => table.push((base.to_string(), synonyms.collect())),
        }
        self
    }

    /// Returns the table for a classification.
    #[must_use]
    pub fn table(&self, kind: WordKind) -> &Words {
        match kind {
            WordKind::Adjective => &self.adjectives,
            WordKind::Adverb => &self.adverbs,
            WordKind::Conjunction => &self.conjunctions,
            WordKind::ConvertibleNoun => &self.convertible_nouns,
            WordKind::Direction => &self.directions,
            WordKind::Noun => &self.nouns,
            WordKind::Preposition => &self.prepositions,
            WordKind::Pronoun => &self.pronouns,
            WordKind::SpecialNoun => &self.special_nouns,
            WordKind::Verb => &self.verbs,
        }
    }

    fn table_mut(&mut self, kind: WordKind) -> &mut Words {
        match kind {
            WordKind::Adjective => &mut self.adjectives,
            WordKind::Adverb => &mut self.adverbs,
            WordKind::Conjunction => &mut self.conjunctions,
            WordKind::ConvertibleNoun => &mut self.convertible_nouns,
            WordKind::Direction => &mut self.directions,
            WordKind::Noun => &mut self.nouns,
            WordKind::Preposition => &mut self.prepositions,
            WordKind::Pronoun => &mut self.pronouns,
            WordKind::SpecialNoun => &mut self.special_nouns,
            WordKind::Verb => &mut self.verbs,
        }
    }
}

/// Import order of the word tables.
pub const TABLE_ORDER: [WordKind; 10] = [
    WordKind::Adjective,
    WordKind::Adverb,
    WordKind::Conjunction,
    WordKind::ConvertibleNoun,
    WordKind::Direction,
    WordKind::Noun,
    WordKind::Preposition,
    WordKind::Pronoun,
    WordKind::SpecialNoun,
    WordKind::Verb,
];

/// A synonym declared for two different base words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    /// The contested word.
    pub word: String,
    /// Classification in which it collided.
    pub kind: WordKind,
    /// Base word it already folds to.
    pub existing: String,
    /// Base word the rejected declaration wanted.
    pub rejected: String,
}

/// The word dictionary.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: HashMap<String, Vec<WordDef>>,
    collisions: Vec<Collision>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary from word tables.
    #[must_use]
    pub fn with_tables(tables: &WordTables) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.add_words(tables);
        vocabulary
    }

    /// Registers a word as its own base word.
    ///
    /// Re-registering the same word and classification does nothing.
    pub fn add_word(&mut self, word: &str, kind: WordKind) {
        if word.is_empty() {
            return;
        }
        let defs = self.words.entry(word.to_string()).or_default();
        if !defs.iter().any(|d| d.kind == kind) {
            defs.push(WordDef {
                kind,
                base: word.to_string(),
            });
        }
    }

    /// Imports word tables in [`TABLE_ORDER`].
    pub fn add_words(&mut self, tables: &WordTables) {
        for kind in TABLE_ORDER {
            for (base, synonyms) in tables.table(kind) {
                self.add_base_word(base, kind);
                for synonym in synonyms {
                    self.add_synonym(synonym, base, kind);
                }
            }
        }
    }

    fn add_base_word(&mut self, base: &str, kind: WordKind) {
        let defs = self.words.entry(base.to_string()).or_default();
        match defs.iter().find(|d| d.kind == kind) {
            None => defs.push(WordDef {
                kind,
                base: base.to_string(),
            }),
            Some(existing) if existing.base != base => {
                let collision = Collision {
                    word: base.to_string(),
                    kind,
                    existing: existing.base.clone(),
                    rejected: base.to_string(),
                };
                self.record(collision);
            }
            Some(_) => {}
        }
    }

    fn add_synonym(&mut self, synonym: &str, base: &str, kind: WordKind) {
        if synonym.is_empty() {
            return;
        }
        let defs = self.words.entry(synonym.to_string()).or_default();
        match defs.iter().find(|d| d.kind == kind) {
            None => defs.push(WordDef {
                kind,
                base: base.to_string(),
            }),
            Some(existing) if existing.base != base => {
                let collision = Collision {
                    word: synonym.to_string(),
                    kind,
                    existing: existing.base.clone(),
                    rejected: base.to_string(),
                };
                self.record(collision);
            }
            Some(_) => {}
        }
    }

    fn record(&mut self, collision: Collision) {
        warn!(
            word = %collision.word,
            kind = %collision.kind,
            existing = %collision.existing,
            rejected = %collision.rejected,
            "dictionary collision; keeping the first base word"
        );
        self.collisions.push(collision);
    }

    /// Marks a word as deliberately unknown.
    ///
    /// Has no effect on a word that already has readings.
    pub fn suppress(&mut self, word: &str) {
        self.words.entry(word.to_string()).or_default();
    }

    /// Returns every reading of a word, in registration order.
    ///
    /// Returns `None` for unknown and suppressed words.
    #[must_use]
    pub fn find_word(&self, word: &str) -> Option<&[WordDef]> {
        self.words
            .get(word)
            .filter(|defs| !defs.is_empty())
            .map(Vec::as_slice)
    }

    /// Returns the reading of a word in one classification.
    #[must_use]
    pub fn lookup(&self, word: &str, kind: WordKind) -> Option<&WordDef> {
        self.find_word(word)?.iter().find(|d| d.kind == kind)
    }

    /// Folds a word to the base word of its first reading.
    #[must_use]
    pub fn base_word(&self, word: &str) -> Option<&str> {
        self.find_word(word)?.first().map(|d| d.base.as_str())
    }

    /// True if the word has at least one reading.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find_word(word).is_some()
    }

    /// Collisions reported so far.
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// All known words, sorted.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, defs)| !defs.is_empty())
            .map(|(w, _)| w.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.values().filter(|defs| !defs.is_empty()).count()
    }

    /// True if no word is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
