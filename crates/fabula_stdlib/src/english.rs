//! The English module.

use fabula_engine::{Engine, Module, Param};
use fabula_foundation::TurnResult;
use fabula_parser::Order;
use fabula_world::Posture;

use crate::words::{EXIT_NAMES, english_words};
use crate::{movement, objects, posture, rewrite, system};

/// Verbs that ask the player to choose when a noun is ambiguous.
const CHOOSING_VERBS: &[&str] = &["examine", "take", "drop", "wear", "remove"];

/// Builds the English module: vocabulary, rewrites and the standard verbs.
#[must_use]
pub fn english() -> Module {
    EXIT_NAMES
        .iter()
        .fold(Module::new("english"), |module, (direction, name)| {
            module.exit_name(*direction, *name)
        })
        .words(english_words())
        .before(rewrite::before)
        .execute(execute)
        .after_description(posture::after_description)
}

/// Runs the standard verbs.
pub fn execute(engine: &mut Engine, order: &mut Order) -> TurnResult {
    if order.direction.is_some() && order.verb.is_none() {
        return movement::go(engine, order);
    }
    let Some(verb) = order.verb().map(str::to_string) else {
        return TurnResult::NoAction;
    };

    if CHOOSING_VERBS.contains(&verb.as_str())
        && order.object.is_none()
        && !order.ambiguous_objects.is_empty()
    {
        let options = Param::entities(order.ambiguous_objects.clone());
        engine.message_with("Which do you mean, [the options]?", &options);
        return TurnResult::NotDone;
    }

    match verb.as_str() {
        "exits" => movement::exits(engine),
        "restart" => system::restart(engine),
        "load" => system::load(engine),
        "save" => system::save(engine),
        "quit" => system::quit(engine),
        "inventory" => system::inventory(engine),
        "look" => system::look(engine, order),
        "use" => system::vague_use(engine),
        "examine" => objects::examine(engine, order),
        "take" => objects::take(engine, order),
        "drop" => objects::drop(engine, order),
        "wear" => objects::wear(engine, order),
        "remove" => objects::remove(engine, order),
        "sit" => posture::rest(engine, order, Posture::Sitting),
        "lay" => posture::rest(engine, order, Posture::Laying),
        "stand" => posture::stand(engine),
        _ => TurnResult::NoAction,
    }
}
