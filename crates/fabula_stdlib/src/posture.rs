//! Sitting, lying down and standing up.

use fabula_engine::{Engine, Param};
use fabula_foundation::TurnResult;
use fabula_parser::{Order, Word};
use fabula_world::{Posture, Seat};

/// Sits or lies down, on the floor or on something here.
///
/// With no noun, the only suitable object here is used if there is
/// exactly one.
pub fn rest(engine: &mut Engine, order: &mut Order, posture: Posture) -> TurnResult {
    let suits = |sitting: bool, laying: bool| match posture {
        Posture::Sitting => sitting,
        Posture::Laying => laying,
    };

    if order.noun.is_none() && order.unknown_words == 0 {
        let here = engine.world().player.location().to_string();
        let spots: Vec<(String, String)> = engine
            .world()
            .objects_at(&here)
            .into_iter()
            .filter(|e| suits(e.state.sitting, e.state.laying))
            .map(|e| (e.key().to_string(), e.state.noun.clone()))
            .collect();
        if let [(key, noun)] = spots.as_slice() {
            order.noun = Some(Word::plain(noun.as_str()));
            order.object = Some(key.clone());
        }
    }

    let seat = engine.world().player.state.seat.clone();
    let mut object = order.object.clone();
    if object.is_none() {
        if let Seat::On(key) = &seat {
            if engine.world().entity(key).is_some_and(|e| e.state.laying) {
                object = Some(key.clone());
            }
        }
    }

    if seat != Seat::Standing {
        let same_spot = match (&seat, &object) {
            (Seat::Floor, None) => true,
            (Seat::On(current), Some(key)) => current == key,
            _ => false,
        };
        if same_spot && engine.world().player.state.posture == posture {
            match &object {
                Some(key) => engine.message_with(
                    &format!("[You are] already {} on [the object].", posture.as_str()),
                    &Param::entity(key.as_str()),
                ),
                None => engine.message(&format!("[You are] already {} down.", posture.as_str())),
            }
            return TurnResult::NotDone;
        }
        let staying_put = matches!((&seat, &object), (Seat::On(current), Some(key)) if current == key);
        if !staying_put {
            let result = engine.sub_order_text("stand up");
            if result != TurnResult::Done {
                return result;
            }
            engine.take_message();
        }
    }

    if let Some(key) = object.filter(|k| engine.world().present(k)) {
        let (sitting, laying) = engine
            .world()
            .entity(&key)
            .map_or((false, false), |e| (e.state.sitting, e.state.laying));
        if !suits(sitting, laying) {
            let text = match posture {
                Posture::Sitting => "[The object] is not suitable for sitting.",
                Posture::Laying => "[The object] is not suitable for laying down.",
            };
            engine.message_with(text, &Param::entity(key));
            return TurnResult::NotDone;
        }
        let player = &mut engine.world_mut().player.state;
        player.seat = Seat::On(key.clone());
        player.posture = posture;
        let text = match posture {
            Posture::Sitting => "[You] sit on [the object].",
            Posture::Laying => "[You] lay down on [the object].",
        };
        engine.message_with(text, &Param::entity(key));
        return TurnResult::Done;
    }

    if (order.noun.is_some() && !order.noun_is("floor")) || order.unknown_words > 0 {
        engine.message("That's not suitable for sitting.");
        return TurnResult::NotDone;
    }
    let player = &mut engine.world_mut().player.state;
    player.seat = Seat::Floor;
    player.posture = posture;
    match posture {
        Posture::Sitting => engine.message("[You] sit down on the floor."),
        Posture::Laying => engine.message("[You] lay down on the floor."),
    }
    TurnResult::Done
}

/// Gets back on one's feet.
pub fn stand(engine: &mut Engine) -> TurnResult {
    if engine.world().player.is_standing() {
        engine.message("[You are] already standing.");
    } else {
        engine.world_mut().player.state.seat = Seat::Standing;
        engine.message("[You] stand up.");
    }
    TurnResult::Done
}

/// Mentions the player's posture after a location description.
pub fn after_description(engine: &mut Engine, _location: &str) {
    let posture = engine.world().player.state.posture.as_str();
    match engine.world().player.state.seat.clone() {
        Seat::Standing => {}
        Seat::Floor => engine.message(&format!("[You are] {posture} down on the floor.")),
        Seat::On(key) => engine.message_with(
            &format!("[You are] {posture} down on [the object]."),
            &Param::entity(key),
        ),
    }
}
