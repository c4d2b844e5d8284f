//! The dispatch engine and turn state machine.
//!
//! A command passes through up to seven layers; the first one that claims
//! it decides the turn:
//!
//! 1. Module before hooks (a `NotDone` aborts the command)
//! 2. Module response tables
//! 3. The current location's before hook (a `NotDone` aborts)
//! 4. The first object, if present: before hook, execute hook, responses
//! 5. The current location: execute hook, responses, then its areas
//! 6. Module execute hooks, then module responses again
//! 7. Nothing understood the command (`NoAction`)
//!
//! A top-level command that was claimed is then resolved: after hooks run
//! on success, leftover text runs as the next command, and `Wait`/`Ask`
//! suspend the engine until the host answers. Sub-orders (redirects,
//! "take all" items) skip resolution and return their result to the
//! handler that issued them.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use fabula_foundation::{Result, TurnResult};
use fabula_parser::{Order, Parser, Vocabulary, WordKind};
use fabula_world::{SaveState, World};

use crate::config::EngineConfig;
use crate::hooks::{EntityHooks, LocationHooks, ModuleHooks};
use crate::message::{self, Param, Subject};
use crate::module::{EntityDef, LocationDef, Module};
use crate::output::{BufferOutput, Output};
use crate::response::{Owner, Response, ResponseTable};
use crate::store::{MemoryStore, SaveStore};

/// Code run when the host answers a suspension. Receives the line or key.
pub type Continuation = Box<dyn FnOnce(&mut Engine, &str) -> TurnResult>;

/// What the engine wants from the host next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Awaiting {
    /// A command.
    Command,
    /// An answer to a question.
    Line,
    /// A single key press.
    Key,
}

// =============================================================================
// Loaded Behaviour
// =============================================================================

struct LoadedModule {
    name: String,
    hooks: ModuleHooks,
    responses: ResponseTable,
}

struct EntityBehavior {
    hooks: EntityHooks,
    responses: ResponseTable,
}

struct LocationBehavior {
    hooks: LocationHooks,
    responses: ResponseTable,
}

struct Suspension {
    order: Order,
    awaiting: Awaiting,
    prompt: String,
    continuation: Option<Continuation>,
}

/// How an order is being dispatched.
#[derive(Clone, Copy, Debug, Default)]
struct Dispatch {
    /// Return the raw result instead of resolving the turn.
    sub_order: bool,
    /// Skip every response table (used by `!` responses).
    suppress_responses: bool,
}

impl Dispatch {
    const SUB_ORDER: Self = Self {
        sub_order: true,
        suppress_responses: false,
    };

    const QUIET: Self = Self {
        sub_order: true,
        suppress_responses: true,
    };
}

// =============================================================================
// Engine
// =============================================================================

/// The interpreter: world, parser, loaded modules and turn state.
pub struct Engine {
    config: EngineConfig,
    world: World,
    parser: Parser,
    modules: Vec<Rc<LoadedModule>>,
    entities: HashMap<String, Rc<EntityBehavior>>,
    locations: HashMap<String, Rc<LocationBehavior>>,
    areas: HashMap<String, Rc<ResponseTable>>,
    exit_names: BTreeMap<String, String>,
    output: Box<dyn Output>,
    store: Box<dyn SaveStore>,
    pending: String,
    leftover: String,
    suspension: Option<Suspension>,
    next_prompt: Option<String>,
    next_continuation: Option<Continuation>,
    initial_state: Option<SaveState>,
    rng: ChaCha8Rng,
    quit: bool,
}

impl Engine {
    /// Creates an engine with an in-memory output and save slot.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut world = World::new();
        world.variables.prompt.clone_from(&config.prompt);
        world.variables.ask_prompt.clone_from(&config.ask_prompt);
        world.variables.third_person = config.third_person;
        world.variables.print_location_names = config.print_location_names;
        world.player.state.max_carried = config.max_carried;
        world.capture_baseline();

        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            config,
            world,
            parser: Parser::new(Vocabulary::new()),
            modules: Vec::new(),
            entities: HashMap::new(),
            locations: HashMap::new(),
            areas: HashMap::new(),
            exit_names: BTreeMap::new(),
            output: Box::new(BufferOutput::new()),
            store: Box::new(MemoryStore::new()),
            pending: String::new(),
            leftover: String::new(),
            suspension: None,
            next_prompt: None,
            next_continuation: None,
            initial_state: None,
            quit: false,
        }
    }

    /// Builder method to set the output.
    #[must_use]
    pub fn with_output(mut self, output: Box<dyn Output>) -> Self {
        self.output = output;
        self
    }

    /// Builder method to set the save slot.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn SaveStore>) -> Self {
        self.store = store;
        self
    }

    // --- Loading ---

    /// Loads a module: vocabulary first, then its records and responses.
    pub fn add_module(&mut self, module: Module) {
        let Module {
            name,
            words,
            entities,
            locations,
            responses,
            areas,
            exit_names,
            start_location,
            hooks,
        } = module;
        let register = self.config.auto_register_response_words;

        self.parser.vocabulary_mut().add_words(&words);

        for def in entities {
            let EntityDef {
                entity,
                hooks: entity_hooks,
                responses: entity_responses,
            } = def;
            let vocabulary = self.parser.vocabulary_mut();
            vocabulary.add_word(&entity.state.noun, WordKind::Noun);
            if let Some(adjective) = &entity.state.adjective {
                vocabulary.add_word(adjective, WordKind::Adjective);
            }
            self.entities.insert(
                entity.key().to_string(),
                Rc::new(EntityBehavior {
                    hooks: entity_hooks,
                    responses: ResponseTable::compile(&entity_responses, vocabulary, register),
                }),
            );
            self.world.add_entity(entity);
        }

        for def in locations {
            let LocationDef {
                location,
                hooks: location_hooks,
                responses: location_responses,
            } = def;
            let vocabulary = self.parser.vocabulary_mut();
            self.locations.insert(
                location.key().to_string(),
                Rc::new(LocationBehavior {
                    hooks: location_hooks,
                    responses: ResponseTable::compile(&location_responses, vocabulary, register),
                }),
            );
            self.world.add_location(location);
        }

        for (area, responses) in areas {
            let table = ResponseTable::compile(&responses, self.parser.vocabulary_mut(), register);
            self.areas.insert(area, Rc::new(table));
        }

        self.exit_names.extend(exit_names);

        if let Some(start) = start_location {
            self.world.player.state.location = start;
            self.world.capture_baseline();
        }

        let responses = ResponseTable::compile(&responses, self.parser.vocabulary_mut(), register);
        info!(
            module = %name,
            entities = self.world.entities().count(),
            locations = self.world.locations().count(),
            words = self.parser.vocabulary().len(),
            "loaded module"
        );
        self.modules.push(Rc::new(LoadedModule {
            name,
            hooks,
            responses,
        }));
    }

    // --- Accessors ---

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world, for mutation.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The parser.
    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// The vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        self.parser.vocabulary()
    }

    /// The output.
    #[must_use]
    pub fn output(&self) -> &dyn Output {
        self.output.as_ref()
    }

    /// Everything printed since the last clear.
    #[must_use]
    pub fn transcript(&self) -> &str {
        self.output.transcript()
    }

    /// Message text not yet handed to the output.
    #[must_use]
    pub fn pending_message(&self) -> &str {
        &self.pending
    }

    /// Text left over from the last command nothing understood.
    #[must_use]
    pub fn leftover_text(&self) -> &str {
        &self.leftover
    }

    /// Names of loaded modules, in load order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }

    /// What the host should deliver next.
    #[must_use]
    pub fn awaiting(&self) -> Awaiting {
        self.suspension
            .as_ref()
            .map_or(Awaiting::Command, |s| s.awaiting)
    }

    /// The prompt for the next input. Empty while a key is awaited.
    #[must_use]
    pub fn prompt(&self) -> &str {
        match &self.suspension {
            None => &self.world.variables.prompt,
            Some(s) if s.awaiting == Awaiting::Line => &s.prompt,
            Some(_) => "",
        }
    }

    /// True once a story asked to end the session.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Asks the host to end the session after this turn.
    pub fn request_quit(&mut self) {
        info!("quit requested");
        self.quit = true;
    }

    /// Picks one option at random.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.rng)
    }

    // --- Host interface ---

    /// Starts the game: initialize hooks, a restart, and the first prompt.
    ///
    /// The state after the first restart is what later restarts return to.
    pub fn start_game(&mut self) {
        info!("starting game");
        for module in self.modules.clone() {
            if let Some(initialize) = &module.hooks.initialize {
                initialize(self);
            }
        }
        self.restart_game();
        self.initial_state = Some(self.world.serialize());
        self.settle();
    }

    /// Delivers a line of input: a command, or the answer to a question.
    ///
    /// While a key press is awaited the first character counts as the key.
    pub fn submit_line(&mut self, line: &str) -> TurnResult {
        let result = match self.awaiting() {
            Awaiting::Command => self.process_input(line),
            Awaiting::Line => self.resume(line),
            Awaiting::Key => {
                let key: String = line.chars().take(1).collect();
                self.resume(&key)
            }
        };
        self.settle();
        result
    }

    /// Delivers a key press. Ignored unless a key is awaited.
    pub fn submit_key(&mut self, key: &str) -> TurnResult {
        if self.awaiting() != Awaiting::Key {
            debug!(key = %key, "key press not awaited; ignored");
            return TurnResult::NoAction;
        }
        let result = self.resume(key);
        self.settle();
        result
    }

    fn process_input(&mut self, text: &str) -> TurnResult {
        debug!(input = %text, "processing input");
        let result = self.execute(text);
        if result == TurnResult::NoAction && !text.trim().is_empty() {
            let fallback = self.config.fallback_message.clone();
            self.message(&fallback);
        }
        result
    }

    fn resume(&mut self, input: &str) -> TurnResult {
        let Some(suspension) = self.suspension.take() else {
            return TurnResult::NoAction;
        };
        debug!(awaiting = ?suspension.awaiting, "resuming suspended turn");
        let result = match suspension.continuation {
            Some(continuation) => continuation(self, input),
            None => TurnResult::Done,
        };
        self.resolve_turn(&suspension.order, result)
    }

    /// Hands pending text to the output and asks for the next input.
    fn settle(&mut self) {
        self.flush();
        match &self.suspension {
            None => {
                self.output.print("\n");
                let prompt = self.world.variables.prompt.clone();
                self.output.request_line(&prompt);
            }
            Some(s) if s.awaiting == Awaiting::Line => {
                let prompt = s.prompt.clone();
                self.output.request_line(&prompt);
            }
            Some(_) => self.output.request_key(),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.output.print(&text);
        }
    }

    // --- Suspension ---

    /// Suspends the turn until a key press; returns `Wait`.
    ///
    /// Pending text is shown first. The continuation's result resolves the
    /// suspended turn.
    pub fn wait_for_key(
        &mut self,
        continuation: impl FnOnce(&mut Engine, &str) -> TurnResult + 'static,
    ) -> TurnResult {
        self.next_continuation = Some(Box::new(continuation));
        TurnResult::Wait
    }

    /// Suspends the turn until a line is entered; returns `Ask`.
    pub fn ask(
        &mut self,
        continuation: impl FnOnce(&mut Engine, &str) -> TurnResult + 'static,
    ) -> TurnResult {
        self.next_continuation = Some(Box::new(continuation));
        TurnResult::Ask
    }

    /// Like [`Engine::ask`], with a custom prompt.
    pub fn ask_with_prompt(
        &mut self,
        prompt: impl Into<String>,
        continuation: impl FnOnce(&mut Engine, &str) -> TurnResult + 'static,
    ) -> TurnResult {
        self.next_prompt = Some(prompt.into());
        self.ask(continuation)
    }

    // --- Dispatch ---

    /// Parses text against the current vocabulary and world.
    pub fn parse(&mut self, text: &str) -> Order {
        self.parser.parse(text, &self.world)
    }

    /// Parses and runs a top-level command.
    ///
    /// A clause with nothing in it but a conjunction ("then go north")
    /// passes straight on to the text after it.
    pub fn execute(&mut self, text: &str) -> TurnResult {
        let mut order = self.parse(text);
        if order.is_empty() && !order.remaining_text.is_empty() {
            let next = std::mem::take(&mut order.remaining_text);
            return self.execute(&next);
        }
        self.execute_order(&mut order)
    }

    /// Runs a top-level order, resolving the turn.
    pub fn execute_order(&mut self, order: &mut Order) -> TurnResult {
        self.dispatch(order, Dispatch::default())
    }

    /// Runs an order on behalf of a handler and returns its raw result.
    pub fn sub_order(&mut self, order: &mut Order) -> TurnResult {
        self.dispatch(order, Dispatch::SUB_ORDER)
    }

    /// Parses text and runs it as a sub-order.
    pub fn sub_order_text(&mut self, text: &str) -> TurnResult {
        let mut order = self.parse(text);
        self.sub_order(&mut order)
    }

    /// True if every enabled module's check hook allows the order.
    #[must_use]
    pub fn check(&self, order: &Order) -> bool {
        self.modules
            .iter()
            .filter(|m| self.module_enabled(m))
            .all(|m| m.hooks.check.as_ref().is_none_or(|check| check(self, order)))
    }

    fn module_enabled(&self, module: &LoadedModule) -> bool {
        module.hooks.conditions.as_ref().is_none_or(|c| c(self))
    }

    fn dispatch(&mut self, order: &mut Order, mode: Dispatch) -> TurnResult {
        if order.is_empty() {
            return TurnResult::NoAction;
        }
        let modules = self.modules.clone();

        // 1-2: module before hooks and responses
        for module in &modules {
            if !self.module_enabled(module) {
                continue;
            }
            if let Some(before) = &module.hooks.before {
                if before(self, order) == TurnResult::NotDone {
                    debug!(module = %module.name, "before hook refused order");
                    return TurnResult::NotDone;
                }
            }
            if !mode.suppress_responses {
                let owner = Owner::Module(module.name.clone());
                let result = self.run_responses(&module.responses, order, &owner);
                // Settled like the later layers, so WAIT/ASK handlers keep their continuation.
                if result.is_handled() {
                    return self.finish(order, result, mode);
                }
            }
        }

        // 3: location before hook
        let here = self.world.player.location().to_string();
        let location = self
            .locations
            .get(&here)
            .cloned()
            .filter(|b| b.hooks.conditions.as_ref().is_none_or(|c| c(self)));
        if let Some(before) = location.as_ref().and_then(|b| b.hooks.before.clone()) {
            if before(self, order) == TurnResult::NotDone {
                debug!(location = %here, "location refused order");
                return TurnResult::NotDone;
            }
        }

        // 4: the first object
        if let Some(key) = order.object.clone().filter(|k| self.world.present(k)) {
            let result = self.dispatch_object(&key, order, mode);
            if result.is_handled() {
                return self.finish(order, result, mode);
            }
        }

        // 5: the location and its areas
        if let Some(location) = &location {
            let mut result = match &location.hooks.execute {
                Some(execute) => execute(self, order),
                None => TurnResult::NoAction,
            };
            if !result.is_handled() && !mode.suppress_responses {
                result = self.location_responses(&here, location, order);
            }
            if result.is_handled() {
                return self.finish(order, result, mode);
            }
        } else if !self.locations.contains_key(&here) && !mode.suppress_responses {
            let result = self.area_responses(&here, order);
            if result.is_handled() {
                return self.finish(order, result, mode);
            }
        }

        // 6: module execute hooks
        for module in &modules {
            if !self.module_enabled(module) {
                continue;
            }
            let mut result = match &module.hooks.execute {
                Some(execute) => execute(self, order),
                None => TurnResult::NoAction,
            };
            if !result.is_handled() && !mode.suppress_responses {
                let owner = Owner::Module(module.name.clone());
                result = self.run_responses(&module.responses, order, &owner);
            }
            if result.is_handled() {
                return self.finish(order, result, mode);
            }
        }

        // 7: nothing understood it
        self.leftover.clone_from(&order.remaining_text);
        debug!(leftover = %self.leftover, "no handler for order");
        TurnResult::NoAction
    }

    /// Runs the first object's hooks and responses.
    ///
    /// A before hook's result stands unless execute claims the order.
    fn dispatch_object(&mut self, key: &str, order: &mut Order, mode: Dispatch) -> TurnResult {
        let Some(behavior) = self.entities.get(key).cloned() else {
            return TurnResult::NoAction;
        };
        if !behavior.hooks.conditions.as_ref().is_none_or(|c| c(self, key)) {
            return TurnResult::NoAction;
        }

        let mut result = TurnResult::NoAction;
        if let Some(before) = &behavior.hooks.before {
            result = before(self, order, key);
            if result == TurnResult::NotDone {
                return result;
            }
        }
        if let Some(execute) = &behavior.hooks.execute {
            let executed = execute(self, order, key);
            if executed.is_handled() {
                result = executed;
            }
        }
        if !result.is_handled() && !mode.suppress_responses {
            result = self.run_responses(&behavior.responses, order, &Owner::Entity(key.to_string()));
        }
        result
    }

    fn location_responses(&mut self, key: &str, location: &LocationBehavior, order: &mut Order) -> TurnResult {
        let result = self.run_responses(&location.responses, order, &Owner::Location(key.to_string()));
        if result.is_handled() {
            return result;
        }
        self.area_responses(key, order)
    }

    fn area_responses(&mut self, key: &str, order: &mut Order) -> TurnResult {
        let areas = self
            .world
            .location(key)
            .map(|l| l.areas().to_vec())
            .unwrap_or_default();
        for area in areas {
            let Some(table) = self.areas.get(&area).cloned() else {
                continue;
            };
            let result = self.run_responses(&table, order, &Owner::Area(area));
            if result.is_handled() {
                return result;
            }
        }
        TurnResult::NoAction
    }

    fn run_responses(&mut self, table: &ResponseTable, order: &mut Order, owner: &Owner) -> TurnResult {
        let matched: Vec<Response> = table.matching(order).cloned().collect();
        for response in matched {
            let result = self.apply_response(&response, order, owner);
            if result.is_handled() {
                debug!(owner = %owner.key(), %result, "response matched");
                return result;
            }
        }
        TurnResult::NoAction
    }

    fn apply_response(&mut self, response: &Response, order: &mut Order, owner: &Owner) -> TurnResult {
        match response {
            Response::Literal(text) => {
                self.message(text);
                TurnResult::Done
            }
            Response::Refusal(text) => {
                self.message(text);
                TurnResult::NotDone
            }
            Response::Redirect(text) => {
                order.direction = None;
                let changes = self.parse(text);
                order.overlay(&changes);
                self.dispatch(order, Dispatch::SUB_ORDER)
            }
            Response::Suppressed(text) => {
                let saved = self.pending.clone();
                let result = self.dispatch(order, Dispatch::QUIET);
                if result == TurnResult::Done {
                    self.pending = saved;
                    if !text.is_empty() {
                        self.message(text);
                    }
                }
                result
            }
            Response::Handler(handler) => handler(self, order, owner),
        }
    }

    fn finish(&mut self, order: &Order, result: TurnResult, mode: Dispatch) -> TurnResult {
        if mode.sub_order {
            result
        } else {
            self.resolve_turn(order, result)
        }
    }

    // --- Turn resolution ---

    /// Finishes a top-level turn.
    ///
    /// - `Done`: module after hooks (latest module first), then after-turn
    ///   hooks of present objects; then leftover text runs as a command
    /// - `Wait`/`Ask`: the order and continuation are kept until the host
    ///   answers
    /// - `Restart`: the game restarts
    pub fn resolve_turn(&mut self, order: &Order, result: TurnResult) -> TurnResult {
        let mut result = result;

        if result == TurnResult::Done {
            for module in self.modules.clone().iter().rev() {
                if !self.module_enabled(module) {
                    continue;
                }
                if let Some(after) = &module.hooks.after {
                    if let Some(overridden) = after(self, order) {
                        result = overridden;
                        break;
                    }
                }
                if let Some(after_turn) = &module.hooks.after_turn {
                    if let Some(overridden) = after_turn(self, order) {
                        result = overridden;
                    }
                }
            }
        }

        if result == TurnResult::Done {
            let present: Vec<String> = self
                .world
                .objects_here()
                .iter()
                .map(|e| e.key().to_string())
                .collect();
            for key in present {
                let Some(behavior) = self.entities.get(&key).cloned() else {
                    continue;
                };
                if !behavior.hooks.conditions.as_ref().is_none_or(|c| c(self, &key)) {
                    continue;
                }
                if let Some(after_turn) = &behavior.hooks.after_turn {
                    if let Some(overridden) = after_turn(self, order, &key) {
                        result = overridden;
                        break;
                    }
                }
            }
        }

        match result {
            TurnResult::Done => {
                if !order.remaining_text.is_empty() && !order.partial {
                    let next = order.remaining_text.clone();
                    debug!(next = %next, "running remaining text");
                    return self.execute(&next);
                }
            }
            TurnResult::NotDone => {}
            TurnResult::Wait | TurnResult::Ask => {
                let awaiting = if result == TurnResult::Wait {
                    Awaiting::Key
                } else {
                    Awaiting::Line
                };
                let prompt = self
                    .next_prompt
                    .take()
                    .unwrap_or_else(|| self.world.variables.ask_prompt.clone());
                debug!(?awaiting, "turn suspended");
                self.suspension = Some(Suspension {
                    order: order.clone(),
                    awaiting,
                    prompt,
                    continuation: self.next_continuation.take(),
                });
            }
            TurnResult::Restart => self.restart_game(),
            TurnResult::NoAction => warn!("turn resolved with no action"),
        }
        result
    }

    // --- Lifecycle ---

    /// Returns the world to its starting state and describes the start.
    pub fn restart_game(&mut self) {
        self.world.reset();
        if let Some(initial) = self.initial_state.clone() {
            if let Err(e) = self.world.restore(&initial) {
                warn!(error = %e, "could not restore initial state");
            }
        }
        self.pending.clear();
        self.leftover.clear();
        self.suspension = None;
        self.next_prompt = None;
        self.next_continuation = None;
        self.parser.forget_pronouns();

        for module in self.modules.clone() {
            if let Some(start) = &module.hooks.start_game {
                start(self);
            }
        }
        self.describe(None);
        info!(location = %self.world.player.location(), "game restarted");
    }

    /// Captures the world as a snapshot.
    #[must_use]
    pub fn serialize(&self) -> SaveState {
        self.world.serialize()
    }

    /// Replays a snapshot onto the world.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot does not fit the loaded records.
    pub fn restore(&mut self, state: &SaveState) -> Result<()> {
        self.world.restore(state)?;
        self.parser.forget_pronouns();
        Ok(())
    }

    /// True if the save slot holds a game.
    #[must_use]
    pub fn has_saved_game(&self) -> bool {
        self.store.exists()
    }

    /// Writes the current game to the save slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn save_game(&mut self) -> Result<()> {
        let state = self.world.serialize();
        self.store.store(&state)?;
        info!("game saved");
        Ok(())
    }

    /// Reads the save slot into the world. Returns false if it is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or does not fit.
    pub fn load_game(&mut self) -> Result<bool> {
        let Some(state) = self.store.load()? else {
            return Ok(false);
        };
        self.restore(&state)?;
        info!("game loaded");
        Ok(true)
    }

    // --- Description ---

    /// Describes a location (the player's, by default).
    ///
    /// Before-description hooks run latest module first and may suppress
    /// the description with `NotDone`.
    pub fn describe(&mut self, location: Option<&str>) -> TurnResult {
        let key = location.map_or_else(|| self.world.player.location().to_string(), str::to_string);
        let modules = self.modules.clone();

        for module in modules.iter().rev() {
            if !self.module_enabled(module) {
                continue;
            }
            if let Some(before) = &module.hooks.before_description {
                if before(self, &key) == TurnResult::NotDone {
                    return TurnResult::NotDone;
                }
            }
        }

        let Some(place) = self.world.location(&key) else {
            warn!(location = %key, "cannot describe unknown location");
            return TurnResult::NotDone;
        };
        let first_visit = !place.state.seen;
        let hide_objects = place.state.hide_objects;

        if first_visit && self.world.variables.print_location_names {
            self.message_with("<b>[object]</b>", &Param::location(key.clone()));
        }
        if let Some(place) = self.world.location_mut(&key) {
            place.state.seen = true;
        }
        let description = self
            .world
            .location(&key)
            .and_then(|place| place.description(&self.world));
        if let Some(text) = description.filter(|t| !t.is_empty()) {
            self.message(&text);
        }

        if !hide_objects {
            let visible: Vec<String> = self
                .world
                .objects_at(&key)
                .iter()
                .filter(|e| !e.state.hidden)
                .map(|e| e.key().to_string())
                .collect();
            if !visible.is_empty() {
                self.message_with("[You] can see [a list] here.", &Param::entities(visible));
            }
        }

        if let Some(after) = self
            .locations
            .get(&key)
            .and_then(|b| b.hooks.after_description.clone())
        {
            after(self);
        }
        for module in modules.iter().rev() {
            if !self.module_enabled(module) {
                continue;
            }
            if let Some(after) = &module.hooks.after_description {
                after(self, &key);
            }
        }
        TurnResult::Done
    }

    /// Names the exits of a location, ready for a list code.
    ///
    /// A direction is renamed by the location first, then by the story's
    /// exit names. Hints follow in parentheses.
    #[must_use]
    pub fn exits_from(&self, location: &str) -> Vec<Subject> {
        let Some(place) = self.world.location(location) else {
            return Vec::new();
        };
        place
            .state
            .exits
            .keys()
            .map(|direction| {
                let local = place.exit_name(direction).unwrap_or(direction.as_str());
                let mut name = self
                    .exit_names
                    .get(local)
                    .cloned()
                    .unwrap_or_else(|| local.to_string());
                if let Some(hint) = place.hint(direction) {
                    name = format!("{name} ({})", hint.render(place, &self.world));
                }
                Subject::proper(name)
            })
            .collect()
    }

    // --- Messages ---

    /// Adds a line of story text.
    pub fn message(&mut self, text: &str) {
        self.mess_with(&format!("{text}\n"), &Param::None);
    }

    /// Adds a line of story text about a subject.
    pub fn message_with(&mut self, text: &str, param: &Param) {
        self.mess_with(&format!("{text}\n"), param);
    }

    /// Adds story text without a line break.
    pub fn mess(&mut self, text: &str) {
        self.mess_with(text, &Param::None);
    }

    /// Adds story text about a subject without a line break.
    pub fn mess_with(&mut self, text: &str, param: &Param) {
        let rendered = message::render(&mut self.world, text, param);
        message::append_indented(&mut self.pending, &rendered, &self.config.auto_indent);
    }

    /// Expands message codes without queueing the text.
    pub fn render(&mut self, text: &str, param: &Param) -> String {
        message::render(&mut self.world, text, param)
    }

    /// Removes and returns the pending text.
    pub fn take_message(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }

    /// Replaces the pending text.
    pub fn restore_message(&mut self, text: String) {
        self.pending = text;
    }

    /// Clears the pending text and the display.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.output.clear();
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("modules", &self.modules.iter().map(|m| &m.name).collect::<Vec<_>>())
            .field("world", &self.world)
            .field("awaiting", &self.awaiting())
            .finish_non_exhaustive()
    }
}
