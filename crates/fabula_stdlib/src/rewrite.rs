//! Order rewrites.
//!
//! Runs as the English module's before hook, so every order (sub-orders
//! included) is normalised before anything else sees it.

use fabula_engine::Engine;
use fabula_foundation::TurnResult;
use fabula_parser::{Order, WordKind};

/// Normalises idioms and narrows ambiguous nouns. Never claims the order.
pub fn before(engine: &mut Engine, order: &mut Order) -> TurnResult {
    rewrite_idioms(order);
    narrow(engine, &mut order.object, &mut order.ambiguous_objects);
    narrow(engine, &mut order.object2, &mut order.ambiguous_objects2);
    TurnResult::NoAction
}

/// Rewrites phrasal verbs and bare directions into their plain forms.
pub fn rewrite_idioms(order: &mut Order) {
    if order.verb_written_is("pick") && order.direction_is("up") {
        order.set_verb("take");
        order.direction = None;
    }
    if order.verb_written_is("put") {
        if order.preposition_is("on") && order.preposition_after == Some(WordKind::Verb) {
            order.set_verb("wear");
        }
        if order.noun2.is_none() {
            order.set_verb("wear");
        }
    }
    if order.verb_written_is("take") && order.preposition_is("off") {
        order.set_verb("remove");
    }
    if order.verb_written_is("make") && order.noun_is("inventory") {
        order.set_verb("inventory");
    }
    if order.verb_written_is("x") && (order.noun.is_some() || order.unknown_words > 0) {
        order.set_verb("examine");
    }

    if order.verb_is("enter") || order.verb_is("exit") {
        let direction = if order.verb_is("enter") { "enter" } else { "leave" };
        let mut word = order.verb.take();
        if let Some(word) = &mut word {
            direction.clone_into(&mut word.base);
        }
        order.direction = word;
    }
    if order.preposition_is("into")
        && order.noun.is_none()
        && order.verb.is_none()
        && order.unknown_words == 0
    {
        let mut word = order.preposition.take();
        if let Some(word) = &mut word {
            "enter".clone_into(&mut word.base);
        }
        order.direction = word;
    }

    if (order.verb_is("sit") || order.verb_is("lay")) && order.direction_is("down") {
        order.direction = None;
    }
    if order.verb_written_is("get") && order.direction_is("up") {
        order.set_verb("stand");
        order.direction = None;
    }
}

/// Keeps only the candidates the player can reach.
///
/// A single reachable candidate becomes the object.
fn narrow(engine: &Engine, object: &mut Option<String>, ambiguous: &mut Vec<String>) {
    if ambiguous.is_empty() {
        return;
    }
    ambiguous.retain(|key| engine.world().present(key));
    if ambiguous.len() == 1 {
        *object = ambiguous.pop();
    }
}
