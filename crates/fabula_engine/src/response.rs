//! Response tables.
//!
//! A response table maps phrase patterns to canned outcomes. Pattern keys
//! hold one or more comma-separated phrases; each phrase is a verb (or
//! direction, or wildcard) followed by nouns and prepositions:
//!
//! ```text
//! "take lamp, get lamp"   "put _ in box"   "* lamp"   "north"
//! ```
//!
//! Words are folded to base words when the table is compiled, so a phrase
//! written with a synonym matches the canonical order. `*` and `_` match
//! any word in the head position and any filled noun slot elsewhere.
//!
//! Response text is interpreted by its first character:
//!
//! | Prefix | Meaning                                               |
//! |--------|-------------------------------------------------------|
//! | `*`    | print the rest; the command did not work (`NotDone`)   |
//! | `>`    | parse the rest and run it as a sub-order              |
//! | `!`    | run the default action quietly; on success print rest  |
//! | other  | print the text (`Done`)                                |

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use fabula_foundation::TurnResult;
use fabula_parser::{Order, Vocabulary, WordKind};

use crate::engine::Engine;

// =============================================================================
// Responses
// =============================================================================

/// Who owns a matched response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Owner {
    /// A module, by name.
    Module(String),
    /// A location, by key.
    Location(String),
    /// An area, by name.
    Area(String),
    /// An entity, by key.
    Entity(String),
}

impl Owner {
    /// The owner's key or name.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Module(k) | Self::Location(k) | Self::Area(k) | Self::Entity(k) => k,
        }
    }
}

/// A response handler.
pub type Handler = Rc<dyn Fn(&mut Engine, &mut Order, &Owner) -> TurnResult>;

/// What happens when a pattern matches.
#[derive(Clone)]
pub enum Response {
    /// Print the text; `Done`.
    Literal(String),
    /// Print the text; `NotDone`.
    Refusal(String),
    /// Run the text as a sub-order over the current one.
    Redirect(String),
    /// Run the default action, replacing its success output with the text.
    Suppressed(String),
    /// Call a handler.
    Handler(Handler),
}

impl Response {
    /// Interprets response text by its prefix character.
    #[must_use]
    pub fn text(text: &str) -> Self {
        if let Some(rest) = text.strip_prefix('*') {
            Self::Refusal(rest.to_string())
        } else if let Some(rest) = text.strip_prefix('>') {
            Self::Redirect(rest.to_string())
        } else if let Some(rest) = text.strip_prefix('!') {
            Self::Suppressed(rest.to_string())
        } else {
            Self::Literal(text.to_string())
        }
    }

    /// Wraps a handler.
    #[must_use]
    pub fn handler(f: impl Fn(&mut Engine, &mut Order, &Owner) -> TurnResult + 'static) -> Self {
        Self::Handler(Rc::new(f))
    }
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Response {
    fn from(text: String) -> Self {
        Self::text(&text)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(t) => f.debug_tuple("Literal").field(t).finish(),
            Self::Refusal(t) => f.debug_tuple("Refusal").field(t).finish(),
            Self::Redirect(t) => f.debug_tuple("Redirect").field(t).finish(),
            Self::Suppressed(t) => f.debug_tuple("Suppressed").field(t).finish(),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// Responses as authored: pattern keys in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Responses {
    entries: Vec<(String, Response)>,
}

impl Responses {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a pattern key.
    #[must_use]
    pub fn on(mut self, key: impl Into<String>, response: impl Into<Response>) -> Self {
        self.entries.push((key.into(), response.into()));
        self
    }

    /// Adds a pattern key.
    pub fn insert(&mut self, key: impl Into<String>, response: impl Into<Response>) {
        self.entries.push((key.into(), response.into()));
    }

    /// The authored entries.
    #[must_use]
    pub fn entries(&self) -> &[(String, Response)] {
        &self.entries
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Compiled Patterns
// =============================================================================

/// One compiled pattern word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternWord {
    /// `*` or `_`.
    Any,
    /// Every base word the written word can stand for.
    Word(Vec<String>),
}

impl PatternWord {
    fn is(&self, base: Option<&str>) -> bool {
        match (self, base) {
            (Self::Word(bases), Some(base)) => bases.iter().any(|b| b == base),
            _ => false,
        }
    }
}

/// One compiled phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    words: Vec<PatternWord>,
}

impl Pattern {
    /// The compiled words.
    #[must_use]
    pub fn words(&self) -> &[PatternWord] {
        &self.words
    }

    /// True if the order fits this phrase.
    ///
    /// The head must be a wildcard, the verb, or the direction. Each later
    /// word either consumes the next noun slot or equals the preposition.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        let Some((head, rest)) = self.words.split_first() else {
            return false;
        };
        let head_matches = matches!(head, PatternWord::Any)
            || head.is(order.verb())
            || head.is(order.direction());
        if !head_matches {
            return false;
        }

        let nouns = [order.noun(), order.noun2()];
        let mut slot = 0;
        for word in rest {
            let noun = nouns.get(slot).copied().flatten();
            match word {
                PatternWord::Any if noun.is_some() => slot += 1,
                PatternWord::Any => return false,
                word if word.is(noun) => slot += 1,
                word if word.is(order.preposition()) => {}
                _ => return false,
            }
        }
        true
    }
}

/// A phrase that could not be compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedPattern {
    /// The phrase as written.
    pub phrase: String,
    /// The word that is not in the vocabulary.
    pub word: String,
}

#[derive(Clone, Debug)]
struct Entry {
    patterns: Vec<Pattern>,
    response: Response,
}

/// A compiled response table.
#[derive(Clone, Debug, Default)]
pub struct ResponseTable {
    entries: Vec<Entry>,
    rejected: Vec<RejectedPattern>,
}

impl ResponseTable {
    /// Compiles authored responses against a vocabulary.
    ///
    /// Unknown words are registered (as verbs in the head position, nouns
    /// elsewhere) when `register_unknown` is set. Otherwise the phrase is
    /// rejected with a warning and left out of the table.
    pub fn compile(
        responses: &Responses,
        vocabulary: &mut Vocabulary,
        register_unknown: bool,
    ) -> Self {
        let mut table = Self::default();
        for (key, response) in responses.entries() {
            let mut patterns = Vec::new();
            for phrase in key.split(',') {
                match compile_phrase(phrase, vocabulary, register_unknown) {
                    Ok(Some(pattern)) => patterns.push(pattern),
                    Ok(None) => {}
                    Err(word) => {
                        warn!(phrase = %phrase.trim(), word = %word, "response word not in vocabulary; phrase ignored");
                        table.rejected.push(RejectedPattern {
                            phrase: phrase.trim().to_string(),
                            word,
                        });
                    }
                }
            }
            if !patterns.is_empty() {
                table.entries.push(Entry {
                    patterns,
                    response: response.clone(),
                });
            }
        }
        debug!(
            entries = table.entries.len(),
            rejected = table.rejected.len(),
            "compiled response table"
        );
        table
    }

    /// Responses whose key matches the order, in declaration order.
    pub fn matching<'a>(&'a self, order: &'a Order) -> impl Iterator<Item = &'a Response> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.patterns.iter().any(|p| p.matches(order)))
            .map(|e| &e.response)
    }

    /// Phrases left out because of unknown words.
    #[must_use]
    pub fn rejected(&self) -> &[RejectedPattern] {
        &self.rejected
    }

    /// Number of compiled keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compile_phrase(
    phrase: &str,
    vocabulary: &mut Vocabulary,
    register_unknown: bool,
) -> Result<Option<Pattern>, String> {
    let mut words = Vec::new();
    for (position, raw) in phrase.split_whitespace().enumerate() {
        if raw == "*" || raw == "_" {
            words.push(PatternWord::Any);
            continue;
        }
        let word = raw.to_lowercase();
        if !vocabulary.contains(&word) {
            if !register_unknown {
                return Err(word);
            }
            let kind = if position == 0 { WordKind::Verb } else { WordKind::Noun };
            vocabulary.add_word(&word, kind);
        }
        let mut bases: Vec<String> = Vec::new();
        for def in vocabulary.find_word(&word).unwrap_or_default() {
            if !bases.contains(&def.base) {
                bases.push(def.base.clone());
            }
        }
        words.push(PatternWord::Word(bases));
    }
    Ok((!words.is_empty()).then_some(Pattern { words }))
}
