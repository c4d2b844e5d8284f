//! Walking between locations.

use fabula_engine::{Engine, Param};
use fabula_foundation::TurnResult;
use fabula_parser::Order;

/// Moves the player along an exit of the current location.
///
/// A seated player stands up first. Revisited locations print only their
/// brief name; new ones get a full description.
pub fn go(engine: &mut Engine, order: &mut Order) -> TurnResult {
    let Some(direction) = order.direction().map(str::to_string) else {
        return TurnResult::NoAction;
    };
    let here = engine.world().player.location().to_string();
    let exit = engine
        .world()
        .location(&here)
        .and_then(|place| place.exit(&direction))
        .map(str::to_string);

    let Some(destination) = exit else {
        if direction == "up" && !engine.world().player.is_standing() {
            return engine.sub_order_text("stand up");
        }
        engine.mess("[You] can't go that way. ");
        report_exits(engine, &here);
        return TurnResult::NotDone;
    };

    if !engine.check(order) {
        return TurnResult::NotDone;
    }
    let Some(seen) = engine.world().location(&destination).map(|l| l.state.seen) else {
        engine.message(&format!("[You] can't go {direction}."));
        return TurnResult::NotDone;
    };
    if !engine.world().player.is_standing() {
        let result = engine.sub_order_text("stand up");
        if result != TurnResult::Done {
            return result;
        }
    }

    engine.world_mut().player.state.location.clone_from(&destination);
    tracing::debug!(from = %here, to = %destination, "player moved");
    if seen {
        let title = engine
            .world()
            .location(&destination)
            .map(|l| l.state.brief.clone().unwrap_or_else(|| l.state.name.clone()))
            .unwrap_or_default();
        engine.mess(&format!("<b>{title}</b>\n"));
    } else if engine.describe(Some(&destination)) == TurnResult::NotDone {
        return TurnResult::NotDone;
    }
    TurnResult::Done
}

/// Lists the exits of the current location.
pub fn exits(engine: &mut Engine) -> TurnResult {
    let here = engine.world().player.location().to_string();
    report_exits(engine, &here);
    TurnResult::NotDone
}

fn report_exits(engine: &mut Engine, location: &str) {
    let exits = engine.exits_from(location);
    match exits.len() {
        0 => engine.message("There is no exit."),
        1 => engine.message_with("[You] can only go [the options].", &Param::from(exits)),
        _ => engine.message_with("[You] can go [the options].", &Param::from(exits)),
    }
}
