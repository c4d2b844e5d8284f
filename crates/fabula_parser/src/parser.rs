//! Main parser pipeline.
//!
//! One left-to-right pass over the tokens of a sentence fills an
//! [`Order`]. The pass stops at a conjunction, or at a clause terminator
//! once the order has something in it; the rest of the sentence is kept
//! as the order's remaining text. Noun slots are then resolved against the
//! world.

use tracing::debug;

use fabula_world::World;

use crate::order::{Order, Word};
use crate::pronouns::PronounState;
use crate::resolution::{NounResolution, resolve_noun};
use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::{Vocabulary, WordDef, WordKind};

/// The sentence parser.
///
/// Owns the vocabulary and the pronoun antecedent, which persists from one
/// parse to the next.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    vocabulary: Vocabulary,
    pronouns: PronounState,
}

impl Parser {
    /// Creates a parser with the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            pronouns: PronounState::new(),
        }
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the vocabulary for mutation.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Returns the pronoun state.
    #[must_use]
    pub fn pronouns(&self) -> &PronounState {
        &self.pronouns
    }

    /// Forgets the pronoun antecedent.
    pub fn forget_pronouns(&mut self) {
        self.pronouns.clear();
    }

    /// Parses one clause of player input.
    pub fn parse(&mut self, input: &str, world: &World) -> Order {
        let mut order = Order::new();
        let mut last_kind: Option<WordKind> = None;
        let mut noun_is_special = false;

        for token in InputTokenizer::tokenize(input) {
            match token {
                InputToken::Quoted(text) => order.quoted_text = Some(text),
                InputToken::Terminator { rest } => {
                    if !order.is_empty() {
                        order.remaining_text = input[rest..].trim().to_string();
                        break;
                    }
                }
                InputToken::Word { text, rest } => {
                    let Some(def) = self
                        .vocabulary
                        .find_word(&text)
                        .and_then(|defs| choose(defs, &order))
                        .cloned()
                    else {
                        note_unknown(&mut order, &mut last_kind, text);
                        continue;
                    };

                    let word = Word::new(def.base, text);
                    match def.kind {
                        WordKind::Conjunction => {
                            order.conjunction = Some(word);
                            order.remaining_text = input[rest..].trim().to_string();
                            break;
                        }
                        WordKind::Direction => {
                            if order.direction.is_none() {
                                order.direction = Some(word);
                            }
                        }
                        WordKind::Verb => {
                            if order.verb.is_none() {
                                order.verb = Some(word);
                            } else if order.verb2.is_none() {
                                order.verb2 = Some(word);
                            }
                        }
                        WordKind::Pronoun => {
                            if let Some(antecedent) = self.pronouns.resolve().cloned() {
                                fill_noun(&mut order, antecedent);
                            }
                        }
                        WordKind::ConvertibleNoun => {
                            if order.verb.is_none() {
                                order.verb = Some(word);
                            } else if fill_noun(&mut order, word) == Some(1) {
                                noun_is_special = true;
                            }
                        }
                        WordKind::Noun => {
                            fill_noun(&mut order, word);
                        }
                        WordKind::SpecialNoun => {
                            if fill_noun(&mut order, word) == Some(1) {
                                noun_is_special = true;
                            }
                        }
                        WordKind::Preposition => {
                            if order.preposition.is_none() {
                                order.preposition = Some(word);
                                order.preposition_after = last_kind;
                            }
                        }
                        WordKind::Adverb => {
                            if order.adverb.is_none() {
                                order.adverb = Some(word);
                            }
                        }
                        WordKind::Adjective => {
                            attach_adjective(&mut order, word, last_kind);
                        }
                    }
                    last_kind = Some(def.kind);
                }
            }
        }

        if order.noun2.is_none() {
            if let Some(adjective) = order.adjective2.take() {
                order.adjective = Some(adjective);
            }
        }

        if !noun_is_special {
            if let Some(noun) = &order.noun {
                self.pronouns.remember(noun.clone());
            }
        }

        resolve_slots(&mut order, world);
        debug!(?order, "parsed order");
        order
    }
}

/// Counts an unknown word, or takes it as a positive number.
fn note_unknown(order: &mut Order, last_kind: &mut Option<WordKind>, text: String) {
    match text.parse::<i64>() {
        Ok(number) if number > 0 => {
            order.number = Some(number);
            fill_noun(order, Word::new(number.to_string(), text));
        }
        _ => {
            debug!(word = %text, "word not in vocabulary; ignored");
            order.unknown_words += 1;
            *last_kind = None;
        }
    }
}

/// Picks the reading of a word to use in the current context.
///
/// The first registered reading wins, except that a direction reading gives
/// way to a preposition reading once a verb and a noun have been parsed
/// ("put coin in box", but "go in").
fn choose<'a>(defs: &'a [WordDef], order: &Order) -> Option<&'a WordDef> {
    let first = defs.first()?;
    if first.kind == WordKind::Direction && order.verb.is_some() && order.noun.is_some() {
        if let Some(preposition) = defs.iter().find(|d| d.kind == WordKind::Preposition) {
            return Some(preposition);
        }
    }
    Some(first)
}

/// Fills the first free noun slot. Returns which slot was filled.
fn fill_noun(order: &mut Order, word: Word) -> Option<u8> {
    if order.noun.is_none() {
        order.noun = Some(word);
        Some(1)
    } else if order.noun2.is_none() {
        order.noun2 = Some(word);
        Some(2)
    } else {
        None
    }
}

/// Attaches an adjective to a noun slot.
///
/// The precedence is kept exactly as content relies on it, overlapping
/// branches included: slot 2 once its noun is filled; slot 1 right after
/// the first noun; slot 2 if the first noun is filled; otherwise slot 1,
/// spilling into slot 2.
fn attach_adjective(order: &mut Order, word: Word, last_kind: Option<WordKind>) {
    if order.noun2.is_some() {
        if order.adjective2.is_none() {
            order.adjective2 = Some(word);
        }
    } else if order.noun.is_some() && last_kind == Some(WordKind::Noun) {
        if order.adjective.is_none() {
            order.adjective = Some(word);
        } else {
            order.adjective2 = Some(word);
        }
    } else if order.noun.is_some() {
        if order.adjective2.is_none() {
            order.adjective2 = Some(word);
        }
    } else if order.adjective.is_none() {
        order.adjective = Some(word);
    } else {
        order.adjective2 = Some(word);
    }
}

fn resolve_slots(order: &mut Order, world: &World) {
    if let Some(noun) = order.noun() {
        match resolve_noun(world, noun, order.adjective()) {
            NounResolution::Unique(key) => order.object = Some(key),
            NounResolution::Ambiguous(keys) => order.ambiguous_objects = keys,
            NounResolution::NotFound => {}
        }
    }
    if let Some(noun) = order.noun2() {
        let adjective = order.adjective2.as_ref().map(|w| w.base.as_str());
        match resolve_noun(world, noun, adjective) {
            NounResolution::Unique(key) => order.object2 = Some(key),
            NounResolution::Ambiguous(keys) => order.ambiguous_objects2 = keys,
            NounResolution::NotFound => {}
        }
    }
}
