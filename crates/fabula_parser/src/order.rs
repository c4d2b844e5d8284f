//! Parsed orders.
//!
//! An [`Order`] is the flat record the parser fills in from one clause.
//! Every word slot keeps both the base word (what handlers match on) and
//! the word as written (what messages quote back to the player), because
//! modules rewrite base words freely.

use crate::vocabulary::WordKind;

/// A word slot: canonical base word plus the word the player typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    /// Base word.
    pub base: String,
    /// Word as written.
    pub written: String,
}

impl Word {
    /// Creates a word slot.
    #[must_use]
    pub fn new(base: impl Into<String>, written: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            written: written.into(),
        }
    }

    /// Creates a slot whose written form equals its base.
    #[must_use]
    pub fn plain(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            written: base.clone(),
            base,
        }
    }
}

fn base(slot: Option<&Word>) -> Option<&str> {
    slot.map(|w| w.base.as_str())
}

fn written(slot: Option<&Word>) -> Option<&str> {
    slot.map(|w| w.written.as_str())
}

/// Replaces the base word of a slot, keeping what was written.
fn rewrite(slot: &mut Option<Word>, new_base: &str) {
    match slot {
        Some(word) => word.base = new_base.to_string(),
        None => *slot = Some(Word::plain(new_base)),
    }
}

/// One parsed clause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Order {
    /// Direction.
    pub direction: Option<Word>,
    /// Verb.
    pub verb: Option<Word>,
    /// Second verb, for compound forms.
    pub verb2: Option<Word>,
    /// Adjective of the first noun.
    pub adjective: Option<Word>,
    /// First noun.
    pub noun: Option<Word>,
    /// Second noun.
    pub noun2: Option<Word>,
    /// Adjective of the second noun.
    pub adjective2: Option<Word>,
    /// Adverb.
    pub adverb: Option<Word>,
    /// Preposition.
    pub preposition: Option<Word>,
    /// Classification of the token just before the preposition.
    pub preposition_after: Option<WordKind>,
    /// Conjunction that ended the clause.
    pub conjunction: Option<Word>,
    /// Positive number typed by the player.
    pub number: Option<i64>,
    /// Text between quotes.
    pub quoted_text: Option<String>,
    /// Text after the clause, to run as the next command.
    pub remaining_text: String,
    /// Count of words not in the vocabulary.
    pub unknown_words: u32,
    /// Entity the first noun resolved to.
    pub object: Option<String>,
    /// Entity the second noun resolved to.
    pub object2: Option<String>,
    /// Candidates when the first noun matched several entities.
    pub ambiguous_objects: Vec<String>,
    /// Candidates when the second noun matched several entities.
    pub ambiguous_objects2: Vec<String>,
    /// Set while running as one item of a multi-item order ("take all").
    /// Standard verbs stay quiet on success so the caller can report once.
    pub partial: bool,
}

impl Order {
    /// Creates an empty order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if direction, verb, noun, adverb and adjective are all unset.
    ///
    /// An empty order never reaches dispatch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.direction.is_none()
            && self.verb.is_none()
            && self.noun.is_none()
            && self.adverb.is_none()
            && self.adjective.is_none()
    }

    // --- Base words ---

    /// Base verb.
    #[must_use]
    pub fn verb(&self) -> Option<&str> {
        base(self.verb.as_ref())
    }

    /// Base direction.
    #[must_use]
    pub fn direction(&self) -> Option<&str> {
        base(self.direction.as_ref())
    }

    /// Base first noun.
    #[must_use]
    pub fn noun(&self) -> Option<&str> {
        base(self.noun.as_ref())
    }

    /// Base second noun.
    #[must_use]
    pub fn noun2(&self) -> Option<&str> {
        base(self.noun2.as_ref())
    }

    /// Base adjective.
    #[must_use]
    pub fn adjective(&self) -> Option<&str> {
        base(self.adjective.as_ref())
    }

    /// Base preposition.
    #[must_use]
    pub fn preposition(&self) -> Option<&str> {
        base(self.preposition.as_ref())
    }

    /// Base adverb.
    #[must_use]
    pub fn adverb(&self) -> Option<&str> {
        base(self.adverb.as_ref())
    }

    // --- As written ---

    /// Verb as written.
    #[must_use]
    pub fn verb_written(&self) -> Option<&str> {
        written(self.verb.as_ref())
    }

    /// First noun as written.
    #[must_use]
    pub fn noun_written(&self) -> Option<&str> {
        written(self.noun.as_ref())
    }

    // --- Tests ---

    /// True if the base verb is `verb`.
    #[must_use]
    pub fn verb_is(&self, verb: &str) -> bool {
        self.verb() == Some(verb)
    }

    /// True if the verb was written as `word`.
    #[must_use]
    pub fn verb_written_is(&self, word: &str) -> bool {
        self.verb_written() == Some(word)
    }

    /// True if the base direction is `direction`.
    #[must_use]
    pub fn direction_is(&self, direction: &str) -> bool {
        self.direction() == Some(direction)
    }

    /// True if the base first noun is `noun`.
    #[must_use]
    pub fn noun_is(&self, noun: &str) -> bool {
        self.noun() == Some(noun)
    }

    /// True if the base preposition is `preposition`.
    #[must_use]
    pub fn preposition_is(&self, preposition: &str) -> bool {
        self.preposition() == Some(preposition)
    }

    // --- Rewrites ---

    /// Replaces the base verb, keeping what was written.
    pub fn set_verb(&mut self, verb: &str) {
        rewrite(&mut self.verb, verb);
    }

    /// Replaces the base direction, keeping what was written.
    pub fn set_direction(&mut self, direction: &str) {
        rewrite(&mut self.direction, direction);
    }

    /// Points the first noun slot at an entity.
    pub fn target(&mut self, key: &str, noun: &str, adjective: Option<&str>) {
        self.noun = Some(Word::plain(noun));
        self.adjective = adjective.map(Word::plain);
        self.object = Some(key.to_string());
        self.ambiguous_objects.clear();
    }

    /// Copies every filled slot of `changes` over this order.
    ///
    /// Unfilled slots of `changes` leave this order's slots alone, so a
    /// redirect such as "examine" keeps the noun of "look at lamp".
    pub fn overlay(&mut self, changes: &Order) {
        fn put<T: Clone>(slot: &mut Option<T>, change: Option<&T>) {
            if let Some(value) = change {
                *slot = Some(value.clone());
            }
        }
        put(&mut self.direction, changes.direction.as_ref());
        put(&mut self.verb, changes.verb.as_ref());
        put(&mut self.verb2, changes.verb2.as_ref());
        put(&mut self.adjective, changes.adjective.as_ref());
        put(&mut self.noun, changes.noun.as_ref());
        put(&mut self.noun2, changes.noun2.as_ref());
        put(&mut self.adjective2, changes.adjective2.as_ref());
        put(&mut self.adverb, changes.adverb.as_ref());
        put(&mut self.preposition, changes.preposition.as_ref());
        put(&mut self.preposition_after, changes.preposition_after.as_ref());
        put(&mut self.conjunction, changes.conjunction.as_ref());
        put(&mut self.number, changes.number.as_ref());
        put(&mut self.quoted_text, changes.quoted_text.as_ref());
        put(&mut self.object, changes.object.as_ref());
        put(&mut self.object2, changes.object2.as_ref());
        if !changes.remaining_text.is_empty() {
            self.remaining_text.clone_from(&changes.remaining_text);
        }
        if changes.unknown_words > 0 {
            self.unknown_words = changes.unknown_words;
        }
        if !changes.ambiguous_objects.is_empty() {
            self.ambiguous_objects.clone_from(&changes.ambiguous_objects);
        }
        if !changes.ambiguous_objects2.is_empty() {
            self.ambiguous_objects2.clone_from(&changes.ambiguous_objects2);
        }
    }

    /// Returns this order with the verb replaced.
    #[must_use]
    pub fn with_verb(mut self, verb: &str) -> Self {
        self.set_verb(verb);
        self
    }
}
