//! AI coach chat transcript
//!
//! Append-only message list plus the pending input buffer for the coach
//! screen. Coach replies are seed data; nothing is generated or persisted.

/// A single chat bubble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    /// Create a message sent by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// Create a message from the coach
    pub fn coach(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// Ordered chat transcript with a pending input buffer
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    input: String,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript preloaded with the coach demo conversation
    pub fn seeded() -> Self {
        Self {
            messages: vec![
                ChatMessage::coach("Hi! I'm your AI coach.\nWhat do you want to train today?"),
                ChatMessage::user("I'd like to work on my chest.\nPut a plan together for me."),
                ChatMessage::coach("Your plan is locked in."),
            ],
            input: String::new(),
        }
    }

    /// Messages in insertion order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The pending, not yet posted input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a character to the pending input
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the pending input
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Post the pending input as a user message
    ///
    /// Input that is empty after trimming is silently ignored and the
    /// buffer is left untouched. Returns whether a message was appended.
    pub fn post_user_message(&mut self) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(text));
        self.input.clear();
        true
    }
}
