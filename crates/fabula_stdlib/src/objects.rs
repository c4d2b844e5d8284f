//! Examining, carrying and wearing things.
//!
//! The "all" forms run one sub-order per object with the order marked
//! partial, so the single-object handlers stay quiet and one aggregate
//! message is printed for the whole group.

use fabula_engine::{Engine, Param};
use fabula_foundation::TurnResult;
use fabula_parser::{Order, Word};
use fabula_world::{EntityState, INVENTORY, World};

// =============================================================================
// Helpers
// =============================================================================

/// A copy of the order with the verb replaced, as written too.
///
/// Rewriting the written form stops the English rewrites from turning the
/// sub-order back into the verb that issued it.
fn as_verb(order: &Order, verb: &str) -> Order {
    let mut order = order.clone();
    order.verb = Some(Word::plain(verb));
    order.remaining_text.clear();
    order
}

fn place_of(engine: &Engine, key: &str) -> String {
    engine
        .world()
        .entity(key)
        .map(|e| e.state.location.clone())
        .unwrap_or_default()
}

fn is_carried(engine: &Engine, key: &str) -> bool {
    place_of(engine, key) == INVENTORY
}

fn carried_count(world: &World) -> u32 {
    u32::try_from(world.inventory().len()).unwrap_or(u32::MAX)
}

/// Keys of the carried entities that pass a filter.
fn carried_where(engine: &Engine, keep: impl Fn(&EntityState) -> bool) -> Vec<String> {
    engine
        .world()
        .inventory()
        .into_iter()
        .filter(|e| keep(&e.state))
        .map(|e| e.key().to_string())
        .collect()
}

/// Points a copy of the order at each key in turn.
fn single_orders<'a>(
    engine: &'a Engine,
    order: &'a Order,
    keys: &'a [String],
) -> impl Iterator<Item = (&'a str, Order)> + 'a {
    keys.iter().filter_map(move |key| {
        let entity = engine.world().entity(key)?;
        let mut single = order.clone();
        single.target(key, &entity.state.noun, entity.state.adjective.as_deref());
        single.remaining_text.clear();
        Some((key.as_str(), single))
    })
}

/// Runs the order once per key as a quiet sub-order.
///
/// Returns the keys whose sub-order succeeded and that satisfy `kept`
/// afterwards.
fn run_for_each(
    engine: &mut Engine,
    order: &Order,
    keys: &[String],
    kept: impl Fn(&World, &str) -> bool,
) -> Vec<String> {
    let singles: Vec<(String, Order)> = single_orders(engine, order, keys)
        .map(|(key, single)| (key.to_string(), single))
        .collect();
    let mut done = Vec::new();
    for (key, mut single) in singles {
        single.partial = true;
        if engine.sub_order(&mut single) == TurnResult::Done && kept(engine.world(), &key) {
            done.push(key);
        }
    }
    done
}

/// True if every single order passes the modules' checks.
fn check_each(engine: &Engine, order: &Order, keys: &[String]) -> bool {
    single_orders(engine, order, keys).all(|(_, single)| engine.check(&single))
}

// =============================================================================
// Examine
// =============================================================================

/// Prints an object's description.
pub fn examine(engine: &mut Engine, order: &mut Order) -> TurnResult {
    if let Some(key) = order.object.clone() {
        if engine.world().present(&key) {
            if !engine.check(order) {
                return TurnResult::NotDone;
            }
            let description = engine
                .world()
                .entity(&key)
                .and_then(|e| e.description(engine.world()));
            match description {
                Some(text) if !text.is_empty() => engine.message(&text),
                Some(_) => {}
                None => engine.message_with("[The object] has nothing special.", &Param::entity(key)),
            }
            return TurnResult::Done;
        }
        if engine.world().entity(&key).is_some_and(|e| e.state.seen) {
            engine.message_with("[You] can't see [the object] here.", &Param::entity(key));
            return TurnResult::NotDone;
        }
    }
    engine.message("[You] can see nothing special.");
    TurnResult::NotDone
}

// =============================================================================
// Take and drop
// =============================================================================

/// Picks up one object, or everything loose here.
pub fn take(engine: &mut Engine, order: &mut Order) -> TurnResult {
    if let Some(key) = order.object.clone() {
        return take_one(engine, order, &key);
    }
    if order.noun_is("all") {
        return take_all(engine, order);
    }
    if order.noun.is_some() || order.unknown_words > 0 {
        engine.message("[You] can't pick up that.");
    } else {
        engine.message("[You] can't see that.");
    }
    TurnResult::NotDone
}

fn take_one(engine: &mut Engine, order: &Order, key: &str) -> TurnResult {
    if is_carried(engine, key) {
        engine.message_with("[You are] already carrying [the object].", &Param::entity(key));
        return TurnResult::NotDone;
    }
    if !engine.world().present(key) {
        engine.message("[You] can't see that.");
        return TurnResult::NotDone;
    }
    if engine.world().entity(key).is_some_and(|e| e.state.scenery) {
        engine.message(
            "That's hardly something [you]'d be able to pick up, considering the current situation.",
        );
        return TurnResult::NotDone;
    }
    if carried_count(engine.world()) >= engine.world().player.state.max_carried {
        engine.message("[You are] carrying too many things.");
        return TurnResult::NotDone;
    }
    if !engine.check(order) {
        return TurnResult::NotDone;
    }
    if !order.partial {
        engine.message_with("[You] now have [the object].", &Param::entity(key));
    }
    engine.world_mut().move_entity(key, INVENTORY);
    TurnResult::Done
}

fn take_all(engine: &mut Engine, order: &Order) -> TurnResult {
    let here = engine.world().player.location().to_string();
    let candidates: Vec<String> = engine
        .world()
        .objects_at(&here)
        .into_iter()
        .filter(|e| !e.state.scenery && !e.state.hidden)
        .map(|e| e.key().to_string())
        .collect();
    if candidates.is_empty() {
        engine.message("[You] can see nothing suitable.");
        return TurnResult::NotDone;
    }
    let total = carried_count(engine.world())
        .saturating_add(u32::try_from(candidates.len()).unwrap_or(u32::MAX));
    if total > engine.world().player.state.max_carried {
        engine.message("[You are] carrying too many things.");
        return TurnResult::NotDone;
    }

    let taken = run_for_each(engine, order, &candidates, |world, key| {
        world.entity(key).is_some_and(|e| e.state.location == INVENTORY)
    });
    if taken.is_empty() {
        return TurnResult::NotDone;
    }
    engine.message_with("[You] now have [the list].", &Param::entities(taken));
    TurnResult::Done
}

/// Puts down one carried object, or everything carried and not worn.
pub fn drop(engine: &mut Engine, order: &mut Order) -> TurnResult {
    if let Some(key) = order.object.clone() {
        if is_carried(engine, &key) {
            return drop_one(engine, order, &key);
        }
        if engine.world().present(&key) {
            engine.message_with("[You are] not carrying [the object].", &Param::entity(key));
            return TurnResult::NotDone;
        }
    } else if order.noun_is("all") {
        return drop_all(engine, order);
    }
    engine.message("[You are] not carrying that.");
    TurnResult::NotDone
}

fn drop_one(engine: &mut Engine, order: &Order, key: &str) -> TurnResult {
    if engine.world().entity(key).is_some_and(|e| e.state.worn) {
        let saved = engine.pending_message().to_string();
        let result = engine.sub_order(&mut as_verb(order, "remove"));
        if result != TurnResult::Done {
            return result;
        }
        engine.restore_message(saved);
    }
    if !engine.check(order) {
        if let Some(entity) = engine.world_mut().entity_mut(key) {
            entity.state.worn = false;
        }
        return TurnResult::NotDone;
    }
    let here = engine.world().player.location().to_string();
    engine.world_mut().move_entity(key, here);
    if !order.partial {
        engine.message_with("[You drop|I've dropped] [the object].", &Param::entity(key));
    }
    TurnResult::Done
}

fn drop_all(engine: &mut Engine, order: &Order) -> TurnResult {
    let candidates = carried_where(engine, |e| !e.worn && !e.hidden);
    if candidates.is_empty() {
        engine.message("[You are] not carrying anything.");
        return TurnResult::NotDone;
    }
    let here = engine.world().player.location().to_string();
    let dropped = run_for_each(engine, order, &candidates, |world, key| {
        world.entity(key).is_some_and(|e| e.state.location == here)
    });
    if dropped.is_empty() {
        return TurnResult::NotDone;
    }
    engine.message_with("[You drop|I've dropped] [the list].", &Param::entities(dropped));
    TurnResult::Done
}

// =============================================================================
// Clothing
// =============================================================================

fn set_worn(engine: &mut Engine, key: &str, worn: bool) {
    if let Some(entity) = engine.world_mut().entity_mut(key) {
        entity.state.worn = worn;
    }
}

/// Puts on a wearable object, picking it up first if needed.
pub fn wear(engine: &mut Engine, order: &mut Order) -> TurnResult {
    let Some(key) = order.object.clone() else {
        if order.noun_is("all") {
            return wear_all(engine, order);
        }
        engine.message("[You] can't wear that.");
        return TurnResult::NotDone;
    };
    let (wearable, worn, place) = match engine.world().entity(&key) {
        Some(e) => (e.state.wearable, e.state.worn, e.state.location.clone()),
        None => return TurnResult::NotDone,
    };
    let here = engine.world().player.location().to_string();

    if place == INVENTORY && wearable {
        if worn {
            engine.message_with("[You are] already wearing [the object].", &Param::entity(key));
            return TurnResult::NotDone;
        }
        if !engine.check(order) {
            return TurnResult::NotDone;
        }
        set_worn(engine, &key, true);
        engine.message_with("[You] put on [the object].", &Param::entity(key));
        return TurnResult::Done;
    }
    if wearable && engine.world().in_reach(&place) {
        let saved = engine.pending_message().to_string();
        let result = engine.sub_order(&mut as_verb(order, "take"));
        if result != TurnResult::Done {
            return result;
        }
        engine.restore_message(saved);
        if !engine.check(order) {
            engine.world_mut().move_entity(&key, here);
            return TurnResult::NotDone;
        }
        engine.message_with("[You] put on [the object].", &Param::entity(key.clone()));
        set_worn(engine, &key, true);
        return TurnResult::Done;
    }
    if place == INVENTORY || place == here {
        if worn {
            engine.message_with("[You are] already wearing [the object].", &Param::entity(key));
        } else {
            engine.message_with("[You] can't wear [the object].", &Param::entity(key));
        }
        return TurnResult::NotDone;
    }
    engine.message("[You] can't wear that.");
    TurnResult::NotDone
}

fn wear_all(engine: &mut Engine, order: &Order) -> TurnResult {
    let clothes = carried_where(engine, |e| e.wearable && !e.worn && !e.hidden);
    if clothes.is_empty() {
        engine.message("[You] can see nothing suitable.");
        return TurnResult::NotDone;
    }
    if !check_each(engine, order, &clothes) {
        return TurnResult::NotDone;
    }
    for key in &clothes {
        set_worn(engine, key, true);
    }
    engine.message_with("[You are] now wearing [the list].", &Param::entities(clothes));
    TurnResult::Done
}

/// Takes off a worn object, or everything worn.
pub fn remove(engine: &mut Engine, order: &mut Order) -> TurnResult {
    let here = engine.world().player.location().to_string();
    let target = order.object.clone().and_then(|key| {
        engine
            .world()
            .entity(&key)
            .map(|e| (e.state.location.clone(), e.state.worn, e.state.wearable))
            .map(|state| (key, state))
    });

    match target {
        Some((key, (place, true, _))) if place == INVENTORY => {
            if !engine.check(order) {
                return TurnResult::NotDone;
            }
            set_worn(engine, &key, false);
            engine.message_with("[You] remove [the object].", &Param::entity(key));
            TurnResult::Done
        }
        Some((key, (place, _, wearable))) if place == INVENTORY || place == here => {
            if wearable {
                engine.message_with("[You are] not wearing [the object].", &Param::entity(key));
            } else {
                engine.message_with("[You] can't wear [the object].", &Param::entity(key));
            }
            TurnResult::NotDone
        }
        _ if order.noun_is("clothes") || order.noun_is("all") => remove_all(engine, order),
        _ => {
            engine.message("[You are] not wearing that.");
            TurnResult::NotDone
        }
    }
}

fn remove_all(engine: &mut Engine, order: &Order) -> TurnResult {
    let worn = carried_where(engine, |e| e.worn && !e.hidden);
    if worn.is_empty() {
        engine.message("[You are] not wearing anything.");
        return TurnResult::NotDone;
    }
    if !check_each(engine, order, &worn) {
        return TurnResult::NotDone;
    }
    for key in &worn {
        set_worn(engine, key, false);
    }
    engine.message_with("[You] remove [the list].", &Param::entities(worn));
    TurnResult::Done
}

#[cfg(test)]
mod tests {
    use crate::fixture::{self, location_of, say};
    use fabula_engine::{EngineConfig, Module};
    use fabula_foundation::TurnResult;

    #[test]
    fn take_and_drop() {
        let mut engine = fixture::engine();
        assert_eq!(say(&mut engine, "take coin"), "You now have the coin.\n\n");
        assert_eq!(location_of(&engine, "coin"), "inventory");
        assert!(say(&mut engine, "take coin").contains("You are already carrying the coin."));
        assert!(say(&mut engine, "drop coin").contains("You drop the coin."));
        assert_eq!(location_of(&engine, "coin"), "study");
    }

    #[test]
    fn take_all_reports_once() {
        let mut engine = fixture::engine();
        let out = say(&mut engine, "take all");
        assert_eq!(out.matches("now have").count(), 1);
        assert!(out.contains("You now have the coin, the pen and the apple."));
        for key in ["coin", "pen", "apple"] {
            assert_eq!(location_of(&engine, key), "inventory");
        }
        assert_eq!(location_of(&engine, "chair"), "study");
    }

    #[test]
    fn drop_all_leaves_worn_clothes() {
        let mut engine = fixture::engine();
        say(&mut engine, "take all");
        say(&mut engine, "n");
        say(&mut engine, "wear coat");
        let out = say(&mut engine, "drop all");
        assert!(out.contains("You drop the coin, the pen and the apple."));
        assert_eq!(location_of(&engine, "coin"), "hall");
        assert_eq!(location_of(&engine, "coat"), "inventory");
    }

    #[test]
    fn nothing_to_take() {
        let mut engine = fixture::engine();
        say(&mut engine, "take all");
        assert!(say(&mut engine, "take all").contains("You can see nothing suitable."));
        assert!(say(&mut engine, "take").contains("You can't see that."));
        assert!(say(&mut engine, "take spoon").contains("You can't pick up that."));
    }

    #[test]
    fn scenery_stays_put() {
        let mut engine = fixture::engine();
        let out = say(&mut engine, "take chair");
        assert!(out.contains("That's hardly something you'd be able to pick up"));
        assert_eq!(location_of(&engine, "chair"), "study");
    }

    #[test]
    fn capacity_limit() {
        let mut engine = fixture::engine_with(EngineConfig::default().with_max_carried(2));
        assert!(say(&mut engine, "take all").contains("You are carrying too many things."));
        say(&mut engine, "take coin");
        say(&mut engine, "take pen");
        assert!(say(&mut engine, "take apple").contains("You are carrying too many things."));
        assert_eq!(location_of(&engine, "apple"), "study");
    }

    #[test]
    fn first_person_messages() {
        let mut engine = fixture::engine_with(EngineConfig::default().with_third_person(false));
        assert!(say(&mut engine, "take coin").contains("I now have the coin."));
        assert!(say(&mut engine, "drop coin").contains("I've dropped the coin."));
    }

    #[test]
    fn examine_objects() {
        let mut engine = fixture::engine();
        assert!(say(&mut engine, "examine pen").contains("A fountain pen."));
        assert!(say(&mut engine, "x pen").contains("A fountain pen."));
        assert!(say(&mut engine, "look at pen").contains("A fountain pen."));
        assert!(say(&mut engine, "read coin").contains("The coin has nothing special."));
        say(&mut engine, "n");
        assert!(say(&mut engine, "examine pen").contains("You can't see the pen here."));
        assert!(say(&mut engine, "examine").contains("You can see nothing special."));
    }

    #[test]
    fn wear_picks_up_first() {
        let mut engine = fixture::engine();
        say(&mut engine, "n");
        let out = say(&mut engine, "wear coat");
        assert!(out.contains("You put on the coat."));
        assert!(!out.contains("now have"));
        let coat = &engine.world().entity("coat").unwrap().state;
        assert!(coat.worn);
        assert_eq!(coat.location, "inventory");
        assert!(say(&mut engine, "put on coat").contains("You are already wearing the coat."));
    }

    #[test]
    fn wear_refuses_plain_objects() {
        let mut engine = fixture::engine();
        say(&mut engine, "take coin");
        assert!(say(&mut engine, "wear coin").contains("You can't wear the coin."));
        assert!(say(&mut engine, "wear all").contains("You can see nothing suitable."));
    }

    #[test]
    fn take_off_clothes() {
        let mut engine = fixture::engine();
        say(&mut engine, "n");
        say(&mut engine, "wear coat");
        assert!(say(&mut engine, "take off coat").contains("You remove the coat."));
        assert!(!engine.world().entity("coat").unwrap().state.worn);
        assert!(say(&mut engine, "remove coat").contains("You are not wearing the coat."));
        assert!(say(&mut engine, "remove clothes").contains("You are not wearing anything."));
        say(&mut engine, "wear all");
        assert!(say(&mut engine, "remove all").contains("You remove the coat."));
    }

    #[test]
    fn drop_worn_coat_removes_quietly() {
        let mut engine = fixture::engine();
        say(&mut engine, "n");
        say(&mut engine, "wear coat");
        let out = say(&mut engine, "drop coat");
        assert!(out.contains("You drop the coat."));
        assert!(!out.contains("remove"));
        let coat = &engine.world().entity("coat").unwrap().state;
        assert!(!coat.worn);
        assert_eq!(coat.location, "hall");
    }

    #[test]
    fn check_vetoes_take() {
        let mut engine = fixture::engine();
        engine.add_module(Module::new("sticky").check(|_, order| order.object.as_deref() != Some("coin")));
        let before = engine.transcript().len();
        assert_eq!(engine.submit_line("take coin"), TurnResult::NotDone);
        assert_eq!(location_of(&engine, "coin"), "study");
        assert_eq!(engine.transcript()[before..].trim(), "");
    }

    #[test]
    fn pronoun_follows_previous_clause() {
        let mut engine = fixture::engine();
        let out = say(&mut engine, "take coin. drop it");
        assert!(out.contains("You now have the coin."));
        assert!(out.contains("You drop the coin."));
        assert_eq!(location_of(&engine, "coin"), "study");
    }
}
