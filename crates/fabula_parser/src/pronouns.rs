//! Pronoun tracking state.
//!
//! Remembers the last noun that can stand behind "it" or "them". The
//! state belongs to the parser and changes only when a parsed order's
//! first noun is an ordinary noun.

use crate::order::Word;

/// Antecedent cache for pronoun resolution.
#[derive(Clone, Debug, Default)]
pub struct PronounState {
    antecedent: Option<Word>,
}

impl PronounState {
    /// Creates a new pronoun state with no antecedent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the noun a later pronoun refers to.
    pub fn remember(&mut self, noun: Word) {
        self.antecedent = Some(noun);
    }

    /// Returns the current antecedent.
    #[must_use]
    pub fn resolve(&self) -> Option<&Word> {
        self.antecedent.as_ref()
    }

    /// Forgets the antecedent.
    pub fn clear(&mut self) {
        self.antecedent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        assert!(PronounState::new().resolve().is_none());
    }

    #[test]
    fn test_remember_replaces() {
        let mut state = PronounState::new();
        state.remember(Word::plain("lamp"));
        state.remember(Word::new("key", "keys"));
        assert_eq!(state.resolve().map(|w| w.written.as_str()), Some("keys"));
        state.clear();
        assert!(state.resolve().is_none());
    }
}
