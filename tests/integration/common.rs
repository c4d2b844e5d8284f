//! Shared fixtures.

use fabula_engine::{Engine, EngineConfig, MemoryStore};

/// The demo story behind the English module, with an in-memory save slot.
pub fn demo_engine() -> Engine {
    let mut engine = Engine::new(EngineConfig::default().with_auto_indent(""))
        .with_store(Box::new(MemoryStore::new()));
    engine.add_module(fabula_stdlib::english());
    engine.add_module(fabula_runtime::demo());
    engine.start_game();
    engine
}

/// Submits a line and returns only the text it printed.
pub fn say(engine: &mut Engine, line: &str) -> String {
    let before = engine.transcript().len();
    engine.submit_line(line);
    engine.transcript().get(before..).unwrap_or_default().to_string()
}

pub fn location_of<'a>(engine: &'a Engine, key: &str) -> &'a str {
    engine
        .world()
        .entity(key)
        .map_or("", |e| e.state.location.as_str())
}
