//! Turn results.
//!
//! Every handler in the dispatch chain answers with one of these values.
//! `NotDone` is the normal "understood, but it didn't work" outcome and
//! must stay distinct from `NoAction`, which means nothing understood the
//! command at all.

use std::fmt;

/// Outcome of dispatching one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnResult {
    /// The command succeeded and the turn advances.
    Done,
    /// The command was understood but had no effect.
    NotDone,
    /// Suspended until the host delivers a single key press.
    Wait,
    /// Suspended until the host delivers a full line of text.
    Ask,
    /// Tear down and reinitialise the world.
    Restart,
    /// No handler matched the command.
    NoAction,
}

impl TurnResult {
    /// Returns true for `Wait` and `Ask`.
    #[must_use]
    pub const fn is_suspended(self) -> bool {
        matches!(self, Self::Wait | Self::Ask)
    }

    /// Returns true when a handler claimed the command.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::NoAction)
    }
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Done => "DONE",
            Self::NotDone => "NOTDONE",
            Self::Wait => "WAIT",
            Self::Ask => "ASK",
            Self::Restart => "RESTART",
            Self::NoAction => "NOACTION",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspension_states() {
        assert!(TurnResult::Wait.is_suspended());
        assert!(TurnResult::Ask.is_suspended());
        assert!(!TurnResult::Done.is_suspended());
    }

    #[test]
    fn not_done_is_handled() {
        assert!(TurnResult::NotDone.is_handled());
        assert!(!TurnResult::NoAction.is_handled());
        assert_eq!(TurnResult::NoAction.to_string(), "NOACTION");
    }
}
