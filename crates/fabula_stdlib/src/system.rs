//! Out-of-story commands: restart, save, load, quit, and a few
//! informational verbs.

use tracing::warn;

use fabula_engine::{Engine, Param};
use fabula_foundation::TurnResult;
use fabula_parser::Order;
use fabula_world::{Entity, INVENTORY};

const CONFIRM_PROMPT: &str = "Are you sure? ";

fn confirmed(answer: &str) -> bool {
    answer.trim_start().starts_with(['y', 'Y'])
}

/// Asks for confirmation, then restarts.
pub fn restart(engine: &mut Engine) -> TurnResult {
    engine.ask_with_prompt(CONFIRM_PROMPT, |engine, answer| {
        if confirmed(answer) {
            engine.clear();
            TurnResult::Restart
        } else {
            TurnResult::NotDone
        }
    })
}

/// Restores the saved game and describes where it left off.
pub fn load(engine: &mut Engine) -> TurnResult {
    match engine.load_game() {
        Ok(true) => {
            engine.clear();
            engine.describe(None);
        }
        Ok(false) => engine.message("Your progress hasn't been saved yet."),
        Err(e) => {
            warn!(error = %e, "could not load saved game");
            engine.message("Your saved game could not be loaded.");
        }
    }
    TurnResult::NotDone
}

/// Saves the game, asking first if that overwrites an earlier save.
pub fn save(engine: &mut Engine) -> TurnResult {
    if !engine.has_saved_game() {
        store(engine);
        return TurnResult::NotDone;
    }
    engine.message("This will overwrite your previous save.");
    engine.ask_with_prompt(CONFIRM_PROMPT, |engine, answer| {
        if confirmed(answer) {
            store(engine);
        }
        TurnResult::NotDone
    })
}

fn store(engine: &mut Engine) {
    match engine.save_game() {
        Ok(()) => engine.message("Progress saved."),
        Err(e) => {
            warn!(error = %e, "could not save game");
            engine.message("Your progress could not be saved.");
        }
    }
}

/// Asks for confirmation, then tells the host to stop.
pub fn quit(engine: &mut Engine) -> TurnResult {
    engine.ask_with_prompt(CONFIRM_PROMPT, |engine, answer| {
        if confirmed(answer) {
            engine.request_quit();
            TurnResult::Done
        } else {
            TurnResult::NotDone
        }
    })
}

/// Lists what the player carries and wears.
pub fn inventory(engine: &mut Engine) -> TurnResult {
    let (carrying, wearing): (Vec<String>, Vec<String>) = {
        let (worn, carried): (Vec<_>, Vec<_>) = engine
            .world()
            .objects_at(INVENTORY)
            .into_iter()
            .filter(|e| !e.state.hidden)
            .partition(|e| e.state.worn);
        let keys = |list: Vec<&Entity>| -> Vec<String> {
            list.iter().map(|e| e.key().to_string()).collect()
        };
        (keys(carried), keys(worn))
    };

    let previous = engine.world().variables.inventory_mode;
    engine.world_mut().variables.inventory_mode = true;
    if carrying.is_empty() && wearing.is_empty() {
        engine.message("[You are] not carrying anything.");
    }
    if !carrying.is_empty() {
        engine.message_with("[You are] carrying [a list].", &Param::entities(carrying));
    }
    if !wearing.is_empty() {
        engine.message_with("[You are] wearing [a list].", &Param::entities(wearing));
    }
    engine.world_mut().variables.inventory_mode = previous;
    TurnResult::Done
}

/// Describes the location, or examines what is named.
pub fn look(engine: &mut Engine, order: &mut Order) -> TurnResult {
    if order.noun.is_none() {
        engine.describe(None);
        return TurnResult::Done;
    }
    if order.noun_is("exits") {
        return engine.sub_order_text("exits");
    }
    order.set_verb("examine");
    engine.sub_order(order)
}

/// "use" is too vague to act on.
pub fn vague_use(engine: &mut Engine) -> TurnResult {
    const REPLIES: [&str; 3] = [
        "How?",
        "What do you want to do, exactly?",
        "You'd have to be more specific.",
    ];
    if let Some(reply) = engine.pick(&REPLIES) {
        engine.message(reply);
    }
    TurnResult::NotDone
}
