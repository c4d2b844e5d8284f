//! Noun resolution.
//!
//! Matches a noun (and optional adjective) against every entity in the
//! world. Resolution does not consider presence; dispatch decides whether a
//! resolved object can be reached.

use fabula_world::World;

/// Result of resolving one noun slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NounResolution {
    /// No entity has this noun.
    NotFound,
    /// Exactly one entity.
    Unique(String),
    /// Several entities, even after adjective narrowing.
    Ambiguous(Vec<String>),
}

/// Finds the entities a noun and adjective refer to.
///
/// With more than one noun match the adjective narrows the set; if no
/// candidate carries the adjective, all noun matches are kept.
#[must_use]
pub fn resolve_noun(world: &World, noun: &str, adjective: Option<&str>) -> NounResolution {
    let candidates: Vec<_> = world.entities().filter(|e| e.state.noun == noun).collect();

    let narrowed = match adjective {
        Some(adjective) if candidates.len() > 1 => {
            let matches: Vec<_> = candidates
                .iter()
                .filter(|e| e.state.adjective.as_deref() == Some(adjective))
                .copied()
                .collect();
            if matches.is_empty() { candidates } else { matches }
        }
        _ => candidates,
    };

    match narrowed.as_slice() {
        [] => NounResolution::NotFound,
        [only] => NounResolution::Unique(only.key().to_string()),
        many => NounResolution::Ambiguous(many.iter().map(|e| e.key().to_string()).collect()),
    }
}
