//! Configuration for the dispatch engine.

/// Engine configuration.
///
/// The presentation switches are copied into the world variables when the
/// engine is created, before the baseline is captured, so changes made
/// during play take part in save/restore.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Prompt shown when waiting for a command.
    pub prompt: String,

    /// Prompt shown when waiting for an answer.
    pub ask_prompt: String,

    /// Address the player as "you" (true) or "I" (false).
    pub third_person: bool,

    /// Print location names in bold on first visit.
    pub print_location_names: bool,

    /// Indentation inserted after each line break of the story text.
    pub auto_indent: String,

    /// Player carrying capacity.
    pub max_carried: u32,

    /// Seed for randomised text.
    pub rng_seed: u64,

    /// Register unknown response-pattern words instead of rejecting them.
    pub auto_register_response_words: bool,

    /// Shown when nothing understood a command.
    pub fallback_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            ask_prompt: "> ".to_string(),
            third_person: true,
            print_location_names: false,
            auto_indent: "    ".to_string(),
            max_carried: 99,
            rng_seed: 0,
            auto_register_response_words: true,
            fallback_message: "[You] can't do that.".to_string(),
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the command prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the answer prompt.
    #[must_use]
    pub fn with_ask_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.ask_prompt = prompt.into();
        self
    }

    /// Builder method to choose third or first person.
    #[must_use]
    pub fn with_third_person(mut self, third_person: bool) -> Self {
        self.third_person = third_person;
        self
    }

    /// Builder method to print location names.
    #[must_use]
    pub fn with_print_location_names(mut self, print: bool) -> Self {
        self.print_location_names = print;
        self
    }

    /// Builder method to set the auto-indent string.
    #[must_use]
    pub fn with_auto_indent(mut self, indent: impl Into<String>) -> Self {
        self.auto_indent = indent.into();
        self
    }

    /// Builder method to set carrying capacity.
    #[must_use]
    pub fn with_max_carried(mut self, max: u32) -> Self {
        self.max_carried = max;
        self
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Builder method to enable/disable response word registration.
    #[must_use]
    pub fn with_auto_register_response_words(mut self, enabled: bool) -> Self {
        self.auto_register_response_words = enabled;
        self
    }

    /// Builder method to set the fallback message.
    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }
}
