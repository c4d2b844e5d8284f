//! Shared fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use fabula_engine::{Engine, EngineConfig, Module};

/// A shared log hooks can write to.
pub type Trace = Rc<RefCell<Vec<String>>>;

pub fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(trace: &Trace) -> Vec<String> {
    trace.borrow().clone()
}

pub fn engine_with(modules: Vec<Module>) -> Engine {
    engine_with_config(EngineConfig::default().with_auto_indent(""), modules)
}

pub fn engine_with_config(config: EngineConfig, modules: Vec<Module>) -> Engine {
    let mut engine = Engine::new(config);
    for module in modules {
        engine.add_module(module);
    }
    engine.start_game();
    engine
}

/// Submits a line and returns only the text it printed.
pub fn say(engine: &mut Engine, line: &str) -> String {
    let before = engine.transcript().len();
    engine.submit_line(line);
    engine.transcript().get(before..).unwrap_or_default().to_string()
}
