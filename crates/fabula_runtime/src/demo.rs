//! "The Lighthouse", a three-room demo story.
//!
//! Load it after the English module:
//!
//! ```no_run
//! use fabula_engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! engine.add_module(fabula_stdlib::english());
//! engine.add_module(fabula_runtime::demo());
//! engine.start_game();
//! ```

use fabula_engine::{Engine, EntityDef, LocationDef, Module, Owner, Response, Responses};
use fabula_foundation::TurnResult;
use fabula_parser::Order;
use fabula_world::{EntityState, INVENTORY, LocationState};

/// Flag set once the lamp is burning.
pub const LAMP_LIT: &str = "lamp_lit";

const ENDED: &str = "ended";

/// Builds the demo story module.
#[must_use]
pub fn demo() -> Module {
    Module::new("lighthouse")
        .location(shore())
        .location(cottage())
        .location(lamp_room())
        .area(
            "lighthouse",
            Responses::new()
                .on("listen", "The sea booms against the rocks below.")
                .on("sleep", "*Not while the lamp is dark."),
        )
        .entity(
            EntityDef::new(
                "shell",
                EntityState::named("shell")
                    .at("shore")
                    .with_description("A spiral shell, pink inside."),
            ),
        )
        .entity(
            EntityDef::new(
                "rope",
                EntityState::named("coil of rope")
                    .at("shore")
                    .with_description("Twenty feet of tarred rope."),
            )
            .respond("climb rope", ">examine rope"),
        )
        .entity(
            EntityDef::new(
                "bottle",
                EntityState::named("bottle")
                    .with_adjective("green")
                    .at("shore")
                    .openable(false)
                    .with_description("An old green bottle, corked. Something rattles inside."),
            )
            .respond("open bottle", Response::handler(open_bottle)),
        )
        .entity(EntityDef::new(
            "key",
            EntityState::named("brass key")
                .with_adjective("brass")
                .at("bottle")
                .with_description("A small brass key, green with age."),
        ))
        .entity(
            EntityDef::new(
                "oilskin",
                EntityState::named("oilskin")
                    .at("cottage")
                    .wearable()
                    .with_description("A yellow oilskin coat."),
            )
            .respond("wear oilskin", "!It smells of tar, but it is warm."),
        )
        .entity(EntityDef::new(
            "bunk",
            EntityState::named("bunk").at("cottage").seat().bed().scenery().hidden(),
        ))
        .entity(
            EntityDef::new(
                "counter",
                EntityState::named("counter")
                    .at("cottage")
                    .scenery()
                    .hidden()
                    .with_description("A counter of scarred oak."),
            )
            .respond("break counter", Response::handler(break_counter)),
        )
        .entity(
            EntityDef::new(
                "lamp",
                EntityState::named("lamp")
                    .at("lamp room")
                    .scenery()
                    .hidden(),
            )
            .describe(|_, world| {
                if world.variables.is_set(LAMP_LIT) {
                    "The lamp blazes behind its lenses.".to_string()
                } else {
                    "A great lamp, cold and dark.".to_string()
                }
            })
            .respond("light lamp", Response::handler(light_lamp)),
        )
        .after(ending)
        .start_at("shore")
}

fn shore() -> LocationDef {
    LocationDef::new(
        "shore",
        LocationState::named("Shore")
            .with_description(
                "A strip of shingle below the lighthouse. A path climbs north to the keeper's cottage.",
            )
            .with_exit("north", "cottage"),
    )
    .respond("swim", "*The water is far too cold.")
}

fn cottage() -> LocationDef {
    LocationDef::new(
        "cottage",
        LocationState::named("Keeper's Cottage")
            .with_brief("Cottage")
            .with_description(
                "The cottage is bare but dry. A bunk stands by the wall and a counter by the stove. A ladder climbs to a hatch.",
            )
            .with_exit("south", "shore")
            .with_exit("up", "lamp room"),
    )
    .hint("up", "ladder")
    .area("lighthouse")
    .before(locked_hatch)
}

fn lamp_room() -> LocationDef {
    LocationDef::new(
        "lamp room",
        LocationState::named("Lamp Room").with_exit("down", "cottage"),
    )
    .describe(|_, world| {
        if world.variables.is_set(LAMP_LIT) {
            "Light pours from the lamp out over the sea.".to_string()
        } else {
            "Glass on every side, and the great lamp dark in the middle.".to_string()
        }
    })
    .area("lighthouse")
}

fn carried(engine: &Engine, key: &str) -> bool {
    engine
        .world()
        .entity(key)
        .is_some_and(|e| e.state.location == INVENTORY)
}

fn locked_hatch(engine: &mut Engine, order: &mut Order) -> TurnResult {
    if order.direction_is("up") && order.verb.is_none() && !carried(engine, "key") {
        engine.message("The hatch above the ladder is locked.");
        return TurnResult::NotDone;
    }
    TurnResult::NoAction
}

fn open_bottle(engine: &mut Engine, _order: &mut Order, _owner: &Owner) -> TurnResult {
    let Some(open) = engine.world().entity("bottle").map(|e| e.state.open) else {
        return TurnResult::NoAction;
    };
    if open {
        engine.message("The bottle is already open.");
        return TurnResult::NotDone;
    }
    if let Some(bottle) = engine.world_mut().entity_mut("bottle") {
        bottle.state.open = true;
        bottle.state.description = Some("An old green bottle, uncorked.".to_string());
    }
    engine.message("[You] work the cork free. Inside is a brass key.");
    TurnResult::Done
}

/// Refused while the player's hands are full of rope.
fn break_counter(engine: &mut Engine, _order: &mut Order, _owner: &Owner) -> TurnResult {
    if carried(engine, "rope") {
        engine.message("[Your] hands are full of rope.");
        TurnResult::NotDone
    } else {
        engine.message("[You] thump the counter. The counter does not notice.");
        TurnResult::Done
    }
}

fn light_lamp(engine: &mut Engine, _order: &mut Order, _owner: &Owner) -> TurnResult {
    if engine.world().variables.is_set(LAMP_LIT) {
        engine.message("The lamp is already burning.");
        return TurnResult::NotDone;
    }
    engine.world_mut().variables.set_flag(LAMP_LIT, true);
    engine.message("[You] strike a match. The wick catches, and the lenses throw the light far out to sea.");
    TurnResult::Done
}

fn ending(engine: &mut Engine, _order: &Order) -> Option<TurnResult> {
    let variables = &engine.world().variables;
    if variables.is_set(LAMP_LIT) && !variables.is_set(ENDED) {
        engine.world_mut().variables.set_flag(ENDED, true);
        engine.message("Far out at sea, a ship turns for the harbour.\n<b>*** The End ***</b>");
    }
    None
}
