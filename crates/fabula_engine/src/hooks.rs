//! Hook signatures for modules, locations and entities.
//!
//! Hooks are reference-counted closures so the engine can clone one out of
//! its tables and call it with `&mut Engine`. Order hooks answer
//! [`TurnResult::NoAction`] when they have no opinion.
//!
//! [`TurnResult::NoAction`]: fabula_foundation::TurnResult::NoAction

use std::rc::Rc;

use fabula_foundation::TurnResult;
use fabula_parser::Order;

use crate::engine::Engine;

/// Enables or disables a module or location for the current state.
pub type Condition = Rc<dyn Fn(&Engine) -> bool>;

/// Runs once, at startup or on every (re)start.
pub type LifecycleHook = Rc<dyn Fn(&mut Engine)>;

/// Sees and may rewrite an order. `NotDone` from a before hook aborts.
pub type OrderHook = Rc<dyn Fn(&mut Engine, &mut Order) -> TurnResult>;

/// Pure veto over an action the standard verbs are about to take.
pub type CheckHook = Rc<dyn Fn(&Engine, &Order) -> bool>;

/// Runs after a successful turn. `Some` overrides the turn result.
pub type AfterHook = Rc<dyn Fn(&mut Engine, &Order) -> Option<TurnResult>>;

/// Runs before a location is described; `NotDone` suppresses it.
pub type DescriptionHook = Rc<dyn Fn(&mut Engine, &str) -> TurnResult>;

/// Runs after a location is described.
pub type AfterDescriptionHook = Rc<dyn Fn(&mut Engine, &str)>;

/// Entity predicate; receives the entity key.
pub type EntityCondition = Rc<dyn Fn(&Engine, &str) -> bool>;

/// Entity order hook; receives the entity key.
pub type EntityHook = Rc<dyn Fn(&mut Engine, &mut Order, &str) -> TurnResult>;

/// Entity after-turn hook; receives the entity key.
pub type EntityAfterHook = Rc<dyn Fn(&mut Engine, &Order, &str) -> Option<TurnResult>>;

/// Module-wide hooks.
#[derive(Clone, Default)]
pub struct ModuleHooks {
    /// Once, when the game starts.
    pub initialize: Option<LifecycleHook>,
    /// On start and on every restart.
    pub start_game: Option<LifecycleHook>,
    /// Skips the whole module when false.
    pub conditions: Option<Condition>,
    /// First look at every order.
    pub before: Option<OrderHook>,
    /// Last chance to handle an order.
    pub execute: Option<OrderHook>,
    /// Veto over standard actions.
    pub check: Option<CheckHook>,
    /// After a successful turn; the first `Some` wins.
    pub after: Option<AfterHook>,
    /// After a successful turn; every module runs.
    pub after_turn: Option<AfterHook>,
    /// Before a location is described.
    pub before_description: Option<DescriptionHook>,
    /// After a location is described.
    pub after_description: Option<AfterDescriptionHook>,
}

/// Per-location hooks.
#[derive(Clone, Default)]
pub struct LocationHooks {
    /// Skips this location's hooks and responses when false.
    pub conditions: Option<Condition>,
    /// Runs after module before hooks.
    pub before: Option<OrderHook>,
    /// Handles orders given here.
    pub execute: Option<OrderHook>,
    /// After this location is described.
    pub after_description: Option<LifecycleHook>,
}

/// Per-entity hooks.
#[derive(Clone, Default)]
pub struct EntityHooks {
    /// Skips this entity's hooks and responses when false.
    pub conditions: Option<EntityCondition>,
    /// Runs when the entity is the present first object.
    pub before: Option<EntityHook>,
    /// Handles orders aimed at the entity.
    pub execute: Option<EntityHook>,
    /// After a successful turn while the entity is present.
    pub after_turn: Option<EntityAfterHook>,
}
