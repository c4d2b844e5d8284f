//! The engine-to-host display boundary.
//!
//! The engine never blocks for input. When it needs a line or a key it
//! says so through [`Output::request_line`] / [`Output::request_key`] and
//! returns; the host later answers with `Engine::submit_line` or
//! `Engine::submit_key`.

/// What the host displays, and how it is asked for input.
pub trait Output {
    /// Appends rendered text to the display.
    fn print(&mut self, text: &str);

    /// Clears the visible transcript. World state is untouched.
    fn clear(&mut self);

    /// Returns the accumulated text since the last clear.
    fn transcript(&self) -> &str;

    /// The engine now wants one line of text.
    fn request_line(&mut self, _prompt: &str) {}

    /// The engine now wants a single key press.
    fn request_key(&mut self) {}
}

/// An input request recorded by [`BufferOutput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// A line, with its prompt.
    Line(String),
    /// A key press.
    Key,
}

/// In-memory output for tests and batch runs.
#[derive(Clone, Debug, Default)]
pub struct BufferOutput {
    transcript: String,
    requests: Vec<Request>,
}

impl BufferOutput {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input requests received so far.
    #[must_use]
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// The most recent input request.
    #[must_use]
    pub fn last_request(&self) -> Option<&Request> {
        self.requests.last()
    }
}

impl Output for BufferOutput {
    fn print(&mut self, text: &str) {
        self.transcript.push_str(text);
    }

    fn clear(&mut self) {
        self.transcript.clear();
    }

    fn transcript(&self) -> &str {
        &self.transcript
    }

    fn request_line(&mut self, prompt: &str) {
        self.requests.push(Request::Line(prompt.to_string()));
    }

    fn request_key(&mut self) {
        self.requests.push(Request::Key);
    }
}
